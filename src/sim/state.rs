//! World state and core simulation types
//!
//! Everything `step` reads or writes lives in [`World`], so tests can build
//! fixtures directly instead of touching globals.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::belt::generate_belt;
use crate::config::{Config, ConfigError};
use crate::input::ControlIntents;
use crate::polar_to_cartesian;

/// The player's craft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Fixed at creation
    pub radius: f32,
    /// Radians, 0 = +x, counter-clockwise positive
    pub heading: f32,
    /// Radians per tick
    pub angular_vel: f32,
    pub thrusting: bool,
    /// Pixels per tick
    pub vel: Vec2,
}

impl Ship {
    /// Ship at rest at `pos`, nose pointing up
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            heading: FRAC_PI_2,
            angular_vel: 0.0,
            thrusting: false,
            vel: Vec2::ZERO,
        }
    }

    /// Unit vector along the heading in screen space (y grows downward)
    #[inline]
    pub fn forward(&self) -> Vec2 {
        Vec2::new(self.heading.cos(), -self.heading.sin())
    }

    /// Offset from the centre given in ship-local units of radius:
    /// `along` toward the nose, `side` toward the ship's right
    fn local(&self, along: f32, side: f32) -> Vec2 {
        let (sin, cos) = self.heading.sin_cos();
        self.pos
            + self.radius * Vec2::new(along * cos + side * sin, -along * sin + side * cos)
    }

    /// Triangle silhouette: nose, rear left, rear right
    pub fn hull(&self) -> [Vec2; 3] {
        [
            self.local(4.0 / 3.0, 0.0),
            self.local(-2.0 / 3.0, -1.0),
            self.local(-2.0 / 3.0, 1.0),
        ]
    }

    /// Flame behind the ship: rear left, tail, rear right
    pub fn flame(&self) -> [Vec2; 3] {
        [
            self.local(-2.0 / 3.0, -0.5),
            self.local(-2.0, 0.0),
            self.local(-2.0 / 3.0, 0.5),
        ]
    }
}

/// A drifting polygonal obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    /// Pixels per tick, constant
    pub vel: Vec2,
    pub radius: f32,
    /// Rotational phase of the polygon
    pub orientation: f32,
    pub vertex_count: u32,
}

impl Obstacle {
    /// Regular polygon outline, recomputed on every call
    pub fn outline(&self) -> Vec<Vec2> {
        let step = std::f32::consts::TAU / self.vertex_count as f32;
        (0..self.vertex_count)
            .map(|j| self.pos + polar_to_cartesian(self.radius, self.orientation + j as f32 * step))
            .collect()
    }
}

/// Complete world state
#[derive(Debug, Clone)]
pub struct World {
    pub config: Config,
    /// Seed the belt was generated from
    pub seed: u64,
    pub rng: Pcg32,
    pub ship: Ship,
    pub obstacles: Vec<Obstacle>,
    pub intents: ControlIntents,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    /// Validate `config` and build the initial world
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let ship = Ship::new(Self::centre(&config), config.ship_radius());
        let mut world = Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
            ship,
            obstacles: Vec::new(),
            intents: ControlIntents::new(),
            time_ticks: 0,
            config,
        };
        world.reset();
        log::info!(
            "World {}x{} created (seed {}, {} obstacles)",
            world.config.width,
            world.config.height,
            seed,
            world.obstacles.len()
        );
        Ok(world)
    }

    /// Return to initial conditions with the original seed
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.ship = Ship::new(Self::centre(&self.config), self.config.ship_radius());
        self.intents.clear();
        self.time_ticks = 0;
        let count = self.config.obstacle_count;
        generate_belt(self, count);
        log::debug!("World reset (seed {})", self.seed);
    }

    fn centre(config: &Config) -> Vec2 {
        Vec2::new(config.width / 2.0, config.height / 2.0)
    }
}
