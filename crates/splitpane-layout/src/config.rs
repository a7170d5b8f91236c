#![forbid(unsafe_code)]

//! Construction-time options for a split primitive.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fraction::{
    DEFAULT_INITIAL_FRACTION, DEFAULT_MIN_PANE_EXTENT, SplitConstraints, SplitState,
};
use crate::render::DEFAULT_DIVIDER_EXTENT;

/// Options recognized when a split primitive is created.
///
/// Missing fields take their defaults, so `{}` (or an empty TOML table) is a
/// valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitPaneConfig {
    /// Minimum extent of the leading pane.
    pub min_left: f64,
    /// Minimum extent of the trailing pane.
    pub min_right: f64,
    /// Starting split fraction in `[0, 1]`.
    pub initial_fraction: f64,
    /// Width of the divider hit strip.
    pub divider_extent: f64,
}

impl Default for SplitPaneConfig {
    fn default() -> Self {
        Self {
            min_left: DEFAULT_MIN_PANE_EXTENT,
            min_right: DEFAULT_MIN_PANE_EXTENT,
            initial_fraction: DEFAULT_INITIAL_FRACTION,
            divider_extent: DEFAULT_DIVIDER_EXTENT,
        }
    }
}

impl SplitPaneConfig {
    #[must_use]
    pub fn with_min_left(mut self, min_left: f64) -> Self {
        self.min_left = min_left;
        self
    }

    #[must_use]
    pub fn with_min_right(mut self, min_right: f64) -> Self {
        self.min_right = min_right;
        self
    }

    #[must_use]
    pub fn with_initial_fraction(mut self, initial_fraction: f64) -> Self {
        self.initial_fraction = initial_fraction;
        self
    }

    #[must_use]
    pub fn with_divider_extent(mut self, divider_extent: f64) -> Self {
        self.divider_extent = divider_extent;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, SplitConfigError> {
        let config: Self = toml::from_str(input).map_err(|err| SplitConfigError::Parse {
            message: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject options that cannot describe a split.
    pub fn validate(&self) -> Result<(), SplitConfigError> {
        check_extent("min_left", self.min_left)?;
        check_extent("min_right", self.min_right)?;
        check_extent("divider_extent", self.divider_extent)?;
        if !self.initial_fraction.is_finite() || !(0.0..=1.0).contains(&self.initial_fraction) {
            return Err(SplitConfigError::InvalidInitialFraction {
                value: self.initial_fraction,
            });
        }
        Ok(())
    }

    /// Constraints described by this configuration.
    #[must_use]
    pub fn constraints(&self) -> SplitConstraints {
        SplitConstraints::new(self.min_left, self.min_right)
    }

    /// Initial split state.
    #[must_use]
    pub fn initial_state(&self) -> SplitState {
        SplitState::new(self.initial_fraction)
    }
}

fn check_extent(field: &'static str, value: f64) -> Result<(), SplitConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SplitConfigError::InvalidExtent { field, value })
    }
}

/// Configuration validation failures.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitConfigError {
    InvalidExtent { field: &'static str, value: f64 },
    InvalidInitialFraction { value: f64 },
    Parse { message: String },
}

impl fmt::Display for SplitConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent { field, value } => {
                write!(f, "{field} must be a finite, non-negative length (got {value})")
            }
            Self::InvalidInitialFraction { value } => {
                write!(f, "initial_fraction must be within [0, 1] (got {value})")
            }
            Self::Parse { message } => write!(f, "invalid split pane config: {message}"),
        }
    }
}

impl std::error::Error for SplitConfigError {}
