//! Startup configuration
//!
//! Every value here is fixed for the lifetime of a world. Bad values are
//! rejected before the first tick so the loop itself never fails.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Environment variable naming an optional JSON override file
pub const CONFIG_ENV_VAR: &str = "DRIFT_BELT_CONFIG";

/// Configuration errors, raised at startup only
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tick rate must be a positive finite number, got {0}")]
    TickRate(f32),
    #[error("friction must lie in [0, 1), got {0}")]
    Friction(f32),
    #[error("ship size must be positive, got {0}")]
    ShipSize(f32),
    #[error("ship thrust must be a non-negative finite number, got {0}")]
    ShipThrust(f32),
    #[error("turn speed must be a non-negative finite number, got {0}")]
    TurnSpeed(f32),
    #[error("obstacle speed must be a non-negative finite number, got {0}")]
    ObstacleSpeed(f32),
    #[error("obstacle size must be positive, got {0}")]
    ObstacleSize(f32),
    #[error("obstacle vertex average must be at least 3, got {0}")]
    ObstacleVertexAvg(u32),
    #[error("visible area must be positive, got {width}x{height}")]
    ViewSize { width: f32, height: f32 },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Ticks per second
    pub tick_rate: f32,
    /// Friction coefficient, [0, 1)
    pub friction: f32,
    /// Ship size in pixels
    pub ship_size: f32,
    /// Ship acceleration in pixels/second²
    pub ship_thrust: f32,
    /// Turn speed in degrees/second
    pub turn_speed: f32,
    /// Obstacles in the initial belt
    pub obstacle_count: usize,
    /// Max obstacle speed per axis in pixels/second
    pub obstacle_speed: f32,
    /// Obstacle size in pixels
    pub obstacle_size: f32,
    /// Average obstacle vertex count
    pub obstacle_vertex_avg: u32,
    /// Visible area width in pixels
    pub width: f32,
    /// Visible area height in pixels
    pub height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            friction: FRICTION,
            ship_size: SHIP_SIZE,
            ship_thrust: SHIP_THRUST,
            turn_speed: TURN_SPEED,
            obstacle_count: OBSTACLE_COUNT,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_size: OBSTACLE_SIZE,
            obstacle_vertex_avg: OBSTACLE_VERTEX_AVG,
            width: VIEW_WIDTH,
            height: VIEW_HEIGHT,
        }
    }
}

impl Config {
    /// Check every field, returning the first violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(ConfigError::TickRate(self.tick_rate));
        }
        if !(0.0..1.0).contains(&self.friction) {
            return Err(ConfigError::Friction(self.friction));
        }
        if !(self.ship_size.is_finite() && self.ship_size > 0.0) {
            return Err(ConfigError::ShipSize(self.ship_size));
        }
        if !(self.ship_thrust.is_finite() && self.ship_thrust >= 0.0) {
            return Err(ConfigError::ShipThrust(self.ship_thrust));
        }
        if !(self.turn_speed.is_finite() && self.turn_speed >= 0.0) {
            return Err(ConfigError::TurnSpeed(self.turn_speed));
        }
        if !(self.obstacle_speed.is_finite() && self.obstacle_speed >= 0.0) {
            return Err(ConfigError::ObstacleSpeed(self.obstacle_speed));
        }
        if !(self.obstacle_size.is_finite() && self.obstacle_size > 0.0) {
            return Err(ConfigError::ObstacleSize(self.obstacle_size));
        }
        if self.obstacle_vertex_avg < 3 {
            return Err(ConfigError::ObstacleVertexAvg(self.obstacle_vertex_avg));
        }
        let view_ok = |v: f32| v.is_finite() && v > 0.0;
        if !(view_ok(self.width) && view_ok(self.height)) {
            return Err(ConfigError::ViewSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Parse overrides from JSON (missing fields keep defaults) and validate
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read overrides from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Resolve the startup config: the file named by `DRIFT_BELT_CONFIG`, or defaults
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::debug!("Loading config from {}", path.to_string_lossy());
                Self::from_file(path)
            }
            None => {
                log::debug!("Using default config");
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Seconds per tick
    #[inline]
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate
    }

    /// Turn speed converted to radians per tick
    #[inline]
    pub fn turn_speed_per_tick(&self) -> f32 {
        self.turn_speed.to_radians() * self.dt()
    }

    #[inline]
    pub fn ship_radius(&self) -> f32 {
        self.ship_size / 2.0
    }

    #[inline]
    pub fn obstacle_radius(&self) -> f32 {
        self.obstacle_size / 2.0
    }

    /// Max obstacle speed per axis in pixels/tick
    #[inline]
    pub fn obstacle_speed_per_tick(&self) -> f32 {
        self.obstacle_speed * self.dt()
    }

    /// Inclusive range of obstacle vertex counts: avg/2 rounded up to avg + avg/2
    pub fn vertex_range(&self) -> (u32, u32) {
        let avg = self.obstacle_vertex_avg;
        (avg.div_ceil(2), avg + avg / 2)
    }
}
