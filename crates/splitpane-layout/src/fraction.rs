#![forbid(unsafe_code)]

//! Split-fraction geometry.
//!
//! Maps a desired split fraction, a container width, and the two minimum pane
//! extents to a valid fraction. Everything here is pure and total: no input
//! can make it panic or produce a non-finite fraction.
//!
//! # Feasible window
//!
//! ```text
//! lower = min(min_left / width, 1)
//! upper = 1 - min(min_right / width, 1)
//! ```
//!
//! When `lower > upper` the container is too narrow for both minimums and the
//! window collapses to the single point `lower`. The leading pane keeps its
//! minimum and the trailing pane renders below its own.

use serde::{Deserialize, Serialize};

/// Default minimum extent of each pane, in host units.
pub const DEFAULT_MIN_PANE_EXTENT: f64 = 320.0;

/// Default starting split fraction.
pub const DEFAULT_INITIAL_FRACTION: f64 = 0.5;

/// Minimum extents of the leading and trailing panes.
///
/// Negative and NaN minimums are sanitized to `0.0` on construction. An
/// infinite minimum is kept and saturates its side of the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitConstraints {
    min_left: f64,
    min_right: f64,
}

impl SplitConstraints {
    /// Build constraints from raw minimum extents.
    #[must_use]
    pub fn new(min_left: f64, min_right: f64) -> Self {
        Self {
            min_left: sanitize_min(min_left),
            min_right: sanitize_min(min_right),
        }
    }

    /// Constraints that never restrict the fraction.
    #[must_use]
    pub const fn unconstrained() -> Self {
        Self {
            min_left: 0.0,
            min_right: 0.0,
        }
    }

    /// Minimum extent of the leading pane.
    #[must_use]
    pub const fn min_left(self) -> f64 {
        self.min_left
    }

    /// Minimum extent of the trailing pane.
    #[must_use]
    pub const fn min_right(self) -> f64 {
        self.min_right
    }

    /// Feasible window for a container of `width`.
    #[must_use]
    pub fn window(self, width: f64) -> FeasibleWindow {
        FeasibleWindow::new(width, self)
    }

    /// Clamp `desired` into the feasible window for `width`.
    ///
    /// `previous` is returned unchanged when `desired` is NaN or the clamp
    /// would otherwise produce a non-finite value.
    #[must_use]
    pub fn decide(self, desired: f64, width: f64, previous: f64) -> ClampDecision {
        let window = self.window(width);
        if desired.is_nan() {
            return ClampDecision::rejected(desired, previous, window);
        }

        let clamped = desired.max(window.lower).min(window.upper);
        if !clamped.is_finite() {
            return ClampDecision::rejected(desired, previous, window);
        }

        let reason = if window.collapsed {
            ClampReason::Collapsed
        } else if desired < window.lower {
            ClampReason::ClampedToLower
        } else if desired > window.upper {
            ClampReason::ClampedToUpper
        } else {
            ClampReason::WithinWindow
        };

        ClampDecision {
            input: desired,
            fraction: clamped,
            window,
            reason,
        }
    }
}

impl Default for SplitConstraints {
    fn default() -> Self {
        Self {
            min_left: DEFAULT_MIN_PANE_EXTENT,
            min_right: DEFAULT_MIN_PANE_EXTENT,
        }
    }
}

fn sanitize_min(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Range of fractions that satisfies both minimum extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeasibleWindow {
    /// Smallest admissible fraction.
    pub lower: f64,
    /// Largest admissible fraction (`== lower` when collapsed).
    pub upper: f64,
    /// True when the minimums could not both be honored.
    pub collapsed: bool,
}

impl FeasibleWindow {
    /// Compute the window for `width`.
    ///
    /// Non-positive (or NaN) widths are treated as `1.0` so the division stays
    /// finite; the resulting window is degenerate but valid.
    #[must_use]
    pub fn new(width: f64, constraints: SplitConstraints) -> Self {
        let width = if width > 0.0 { width } else { 1.0 };
        let lower = unit_ratio(constraints.min_left, width);
        let upper = 1.0 - unit_ratio(constraints.min_right, width);
        if lower > upper {
            Self {
                lower,
                upper: lower,
                collapsed: true,
            }
        } else {
            Self {
                lower,
                upper,
                collapsed: false,
            }
        }
    }

    /// Whether `fraction` lies inside the window.
    #[must_use]
    pub fn contains(self, fraction: f64) -> bool {
        fraction >= self.lower && fraction <= self.upper
    }
}

// `min(extent / width, 1)`; `inf / inf` is NaN, which `f64::min` resolves to 1.
fn unit_ratio(extent: f64, width: f64) -> f64 {
    (extent / width).min(1.0)
}

/// Why a clamp produced its fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampReason {
    WithinWindow,
    ClampedToLower,
    ClampedToUpper,
    Collapsed,
    RejectedNonFinite,
}

/// Outcome of one clamp with its diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampDecision {
    pub input: f64,
    pub fraction: f64,
    pub window: FeasibleWindow,
    pub reason: ClampReason,
}

impl ClampDecision {
    fn rejected(input: f64, previous: f64, window: FeasibleWindow) -> Self {
        Self {
            input,
            fraction: previous,
            window,
            reason: ClampReason::RejectedNonFinite,
        }
    }

    /// True if the decision kept the previous fraction.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self.reason, ClampReason::RejectedNonFinite)
    }
}

/// Clamp a desired split fraction for a container of `width`.
///
/// Returns `previous` when the result would not be finite.
#[must_use]
pub fn clamp_fraction(
    desired: f64,
    width: f64,
    min_left: f64,
    min_right: f64,
    previous: f64,
) -> f64 {
    SplitConstraints::new(min_left, min_right)
        .decide(desired, width, previous)
        .fraction
}

/// Committed split fraction owned by one split primitive.
///
/// Always finite and within `[0, 1]`. The only mutation path is
/// [`SplitState::commit`], which takes a [`ClampDecision`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitState {
    fraction: f64,
}

impl SplitState {
    /// Create state from an initial fraction.
    ///
    /// Out-of-range values are pulled into `[0, 1]`; NaN falls back to
    /// [`DEFAULT_INITIAL_FRACTION`].
    #[must_use]
    pub fn new(initial_fraction: f64) -> Self {
        let fraction = if initial_fraction.is_nan() {
            DEFAULT_INITIAL_FRACTION
        } else {
            initial_fraction.clamp(0.0, 1.0)
        };
        Self { fraction }
    }

    /// Current committed fraction.
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Commit a clamp result.
    pub fn commit(&mut self, decision: ClampDecision) -> FractionCommit {
        let previous = self.fraction;
        if decision.fraction.is_finite() && (0.0..=1.0).contains(&decision.fraction) {
            self.fraction = decision.fraction;
        }
        FractionCommit {
            previous,
            fraction: self.fraction,
            reason: decision.reason,
        }
    }
}

impl Default for SplitState {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_FRACTION)
    }
}

/// Record of one commit into [`SplitState`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractionCommit {
    pub previous: f64,
    pub fraction: f64,
    pub reason: ClampReason,
}

impl FractionCommit {
    /// Whether the committed fraction differs from the previous one.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.previous != self.fraction
    }
}
