use std::fmt;

/// Non-fatal error conditions reported by the meadow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeadowError {
    /// Spawn attempted while the meadow is at its colony limit
    CapacityExceeded { limit: usize },
    /// Colony index outside the current registry range
    InvalidIndex { index: usize, count: usize },
    /// Attack involving a colony that is no longer alive
    NotAlive,
}

impl fmt::Display for MeadowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeadowError::CapacityExceeded { limit } => write!(
                f,
                "Cannot create more colonies. Maximum limit of {} reached.",
                limit
            ),
            MeadowError::InvalidIndex { .. } => write!(f, "Invalid colony index."),
            MeadowError::NotAlive => write!(f, "Both colonies must be alive to attack."),
        }
    }
}

impl std::error::Error for MeadowError {}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, MeadowError>;
