//! Drift Belt - a wrap-around arcade simulation
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (ship physics, obstacle drift, wrap-around)
//! - `input`: Key edges to control intents
//! - `draw`: Drawing collaborator contract and a recording canvas
//! - `clock`: Fixed-rate tick scheduling
//! - `config`: Startup tuning with validation

pub mod clock;
pub mod config;
pub mod draw;
pub mod input;
pub mod sim;

pub use clock::FixedClock;
pub use config::{Config, ConfigError};
pub use draw::{Canvas, Color, CommandList, DrawCommand};
pub use input::{ControlIntents, Key, KeyEvent};

use glam::Vec2;

/// Default tuning values
pub mod consts {
    /// Simulation ticks per second
    pub const TICK_RATE: f32 = 30.0;
    /// Friction coefficient of space (0 = none, 1 = full)
    pub const FRICTION: f32 = 0.7;
    /// Ship size in pixels (radius is half)
    pub const SHIP_SIZE: f32 = 30.0;
    /// Ship acceleration in pixels/second²
    pub const SHIP_THRUST: f32 = 5.0;
    /// Turn speed in degrees/second
    pub const TURN_SPEED: f32 = 360.0;

    /// Starting number of obstacles
    pub const OBSTACLE_COUNT: usize = 3;
    /// Max starting speed of obstacles in pixels/second
    pub const OBSTACLE_SPEED: f32 = 50.0;
    /// Starting size of obstacles in pixels (radius is half)
    pub const OBSTACLE_SIZE: f32 = 100.0;
    /// Average number of vertices per obstacle
    pub const OBSTACLE_VERTEX_AVG: u32 = 10;

    /// Visible area
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Maximum ticks run per clock advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;
    /// Side length of the centre marker
    pub const MARKER_SIZE: f32 = 2.0;
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(FRAC_PI_2), FRAC_PI_2);
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-6);
        assert!((normalize_angle(5.0 * PI) - PI).abs() < 1e-5);
        assert_eq!(normalize_angle(TAU), 0.0);
        let tiny = normalize_angle(-1e-9);
        assert!((0.0..TAU).contains(&tiny));
    }
}
