//! Simulation module
//!
//! All world logic lives here. This module must stay deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No platform dependencies; drawing goes through the `Canvas` trait

pub mod belt;
pub mod state;
pub mod tick;

pub use belt::generate_belt;
pub use state::{Obstacle, Ship, World};
pub use tick::{apply_friction, apply_thrust, step, wrap_position};
