//! # Ant Farm
//!
//! A menu-driven simulation of competing ant colonies in a meadow.
//!
//! This library provides the core functionality for spawning colonies,
//! granting workers and warriors, advancing simulated ticks, and resolving
//! deterministic attacks between colonies.

pub mod cli;
pub mod colony;
pub mod error;
pub mod meadow;
pub mod menu;

pub use cli::Args;
pub use colony::Colony;
pub use error::{MeadowError, Result};
pub use meadow::{AttackOutcome, Meadow};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{Args, AttackOutcome, Colony, Meadow, MeadowError, Result};
}
