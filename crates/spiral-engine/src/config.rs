//! Walk configuration, validation, and error types.
//!
//! [`WalkConfig`] is the input to [`run`](crate::run).
//! [`validate()`](WalkConfig::validate) checks it before any cell is visited.

use std::error::Error;
use std::fmt;

use spiral_core::SpiralError;

// ── WalkConfig ─────────────────────────────────────────────────────

/// Parameters for a single neighbour-sum walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkConfig {
    /// The walk stops at the first value strictly greater than this.
    /// Must be at least 1.
    pub threshold: u64,
    /// Upper bound on visited cells, origin included. `None` = unbounded.
    pub max_cells: Option<usize>,
}

impl WalkConfig {
    /// An unbounded walk to `threshold`.
    pub fn new(threshold: u64) -> Self {
        Self {
            threshold,
            max_cells: None,
        }
    }

    /// Cap the number of visited cells.
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = Some(max_cells);
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if self.max_cells == Some(0) {
            return Err(ConfigError::ZeroCellBudget);
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`WalkConfig::validate()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `threshold` is zero.
    ZeroThreshold,
    /// `max_cells` is `Some(0)`.
    ZeroCellBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroThreshold => write!(f, "threshold must be at least 1"),
            Self::ZeroCellBudget => write!(f, "max_cells must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

impl From<ConfigError> for SpiralError {
    fn from(e: ConfigError) -> Self {
        let name = match e {
            ConfigError::ZeroThreshold => "threshold",
            ConfigError::ZeroCellBudget => "max_cells",
        };
        SpiralError::InvalidArgument { name, value: 0 }
    }
}
