//! Fixed timestep simulation step
//!
//! Advances the world by one tick and draws it as it goes. Draw order and
//! update order are interleaved: the ship is drawn with the heading used for
//! thrust, before rotation and motion are integrated.

use glam::Vec2;

use super::state::{Ship, World};
use crate::consts::MARKER_SIZE;
use crate::draw::{Canvas, colors};
use crate::normalize_angle;

/// Advance the world by one tick, issuing this frame's draw commands to `canvas`
pub fn step(world: &mut World, canvas: &mut impl Canvas) {
    let config = &world.config;
    let dt = config.dt();
    let ship_line = config.ship_size / 10.0;
    let obstacle_line = config.ship_size / 20.0;

    canvas.clear(colors::BACKGROUND);

    let ship = &mut world.ship;
    ship.angular_vel = world.intents.turn() * config.turn_speed_per_tick();
    ship.thrusting = world.intents.thrusting();

    if ship.thrusting {
        apply_thrust(ship, config.ship_thrust, dt);
        let flame = ship.flame();
        canvas.fill_polygon(&flame, colors::THRUSTER_FILL);
        canvas.stroke_polygon(&flame, colors::THRUSTER_STROKE, ship_line);
    } else {
        apply_friction(ship, config.friction, dt);
    }

    canvas.stroke_polygon(&ship.hull(), colors::SHIP, ship_line);

    for obstacle in &world.obstacles {
        canvas.stroke_polygon(&obstacle.outline(), colors::OBSTACLE, obstacle_line);
    }

    ship.heading = normalize_angle(ship.heading + ship.angular_vel);
    ship.pos += ship.vel;
    for obstacle in &mut world.obstacles {
        obstacle.pos += obstacle.vel;
    }

    let view = Vec2::new(config.width, config.height);
    ship.pos = wrap_position(ship.pos, ship.radius, view);
    for obstacle in &mut world.obstacles {
        obstacle.pos = wrap_position(obstacle.pos, obstacle.radius, view);
    }

    let half = MARKER_SIZE / 2.0;
    canvas.fill_rect(
        ship.pos.x - half,
        ship.pos.y - half,
        MARKER_SIZE,
        MARKER_SIZE,
        colors::MARKER,
    );

    world.time_ticks += 1;
    log::trace!(
        "tick {}: ship pos={} vel={} heading={:.3}",
        world.time_ticks,
        world.ship.pos,
        world.ship.vel,
        world.ship.heading
    );
}

/// Accelerate along the heading for one tick
pub fn apply_thrust(ship: &mut Ship, thrust: f32, dt: f32) {
    ship.vel += ship.forward() * thrust * dt;
}

/// Decay velocity toward rest for one tick
pub fn apply_friction(ship: &mut Ship, friction: f32, dt: f32) {
    ship.vel -= ship.vel * friction * dt;
}

/// Toroidal wrap: once the centre is more than `radius` past an edge, it
/// reappears `radius` beyond the opposite edge
pub fn wrap_position(pos: Vec2, radius: f32, view: Vec2) -> Vec2 {
    Vec2::new(
        wrap_axis(pos.x, radius, view.x),
        wrap_axis(pos.y, radius, view.y),
    )
}

#[inline]
fn wrap_axis(v: f32, radius: f32, extent: f32) -> f32 {
    if v < -radius {
        extent + radius
    } else if v > extent + radius {
        -radius
    } else {
        v
    }
}
