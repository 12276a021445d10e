//! Belt generation
//!
//! Obstacles spawn anywhere in the visible area with no overlap checks.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Obstacle, World};

/// Replace the world's obstacles with `count` freshly rolled ones
pub fn generate_belt(world: &mut World, count: usize) {
    let config = &world.config;
    let rng = &mut world.rng;

    let max_speed = config.obstacle_speed_per_tick();
    let radius = config.obstacle_radius();
    let (min_vert, max_vert) = config.vertex_range();

    world.obstacles = (0..count)
        .map(|_| {
            let pos = Vec2::new(
                rng.random_range(0.0..config.width),
                rng.random_range(0.0..config.height),
            );
            let vel = Vec2::new(
                rng.random_range(-max_speed..=max_speed),
                rng.random_range(-max_speed..=max_speed),
            );
            Obstacle {
                pos,
                vel,
                radius,
                orientation: rng.random_range(0.0..TAU),
                vertex_count: rng.random_range(min_vert..=max_vert),
            }
        })
        .collect();

    log::info!(
        "Generated belt: {} obstacles, radius {}, {}-{} vertices",
        count,
        radius,
        min_vert,
        max_vert
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn world(config: Config, seed: u64) -> World {
        World::new(config, seed).unwrap()
    }

    #[test]
    fn test_belt_count_and_bounds() {
        let config = Config {
            obstacle_count: 0,
            ..Default::default()
        };
        let mut world = world(config, 5);
        assert!(world.obstacles.is_empty());

        generate_belt(&mut world, 200);
        assert_eq!(world.obstacles.len(), 200);

        let max_speed = world.config.obstacle_speed / world.config.tick_rate;
        for o in &world.obstacles {
            assert!((5..=15).contains(&o.vertex_count));
            assert!(o.vel.x.abs() <= max_speed + 1e-6);
            assert!(o.vel.y.abs() <= max_speed + 1e-6);
            assert!((0.0..800.0).contains(&o.pos.x));
            assert!((0.0..600.0).contains(&o.pos.y));
            assert!((0.0..TAU).contains(&o.orientation));
            assert_eq!(o.radius, 50.0);
        }
    }

    #[test]
    fn test_belt_replaces_previous() {
        let mut world = world(Config::default(), 9);
        assert_eq!(world.obstacles.len(), 3);
        generate_belt(&mut world, 1);
        assert_eq!(world.obstacles.len(), 1);
    }

    #[test]
    fn test_belt_is_seeded() {
        let a = world(Config::default(), 1234);
        let b = world(Config::default(), 1234);
        let c = world(Config::default(), 4321);
        assert_eq!(a.obstacles, b.obstacles);
        assert_ne!(a.obstacles, c.obstacles);
    }

    #[test]
    fn test_still_belt_when_speed_zero() {
        let config = Config {
            obstacle_speed: 0.0,
            obstacle_count: 10,
            ..Default::default()
        };
        let world = world(config, 3);
        assert!(world.obstacles.iter().all(|o| o.vel == Vec2::ZERO));
    }
}
