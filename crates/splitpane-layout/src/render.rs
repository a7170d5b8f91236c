#![forbid(unsafe_code)]

//! Render-side geometry for a committed split.
//!
//! Everything here is derived on demand from `(fraction, constraints,
//! container)`; nothing is cached between renders. Pane widths come from the
//! fraction clamped against the constraints and the container being rendered,
//! so a stale fraction can never size a pane below a feasible minimum.
//!
//! The leading pane spans `clamped × width` and the trailing pane the rest.
//! The divider is an overlay strip centered on the split line and kept inside
//! the container; it never steals width from either pane, so the pointer
//! position that produced a fraction lines up with the drawn split line.

use serde::{Deserialize, Serialize};
use splitpane_core::Bounds;

use crate::fraction::{DEFAULT_INITIAL_FRACTION, SplitConstraints};

/// Default divider hit-strip extent, in host units.
pub const DEFAULT_DIVIDER_EXTENT: f64 = 16.0;

/// Orientation of the divider line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DividerOrientation {
    Vertical,
}

/// Pointer cursor hosts should show over the divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DividerCursor {
    ColumnResize,
}

/// Presentation hints for the divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividerAffordance {
    pub orientation: DividerOrientation,
    pub cursor: DividerCursor,
    /// True while a drag gesture owns the divider.
    pub active: bool,
}

impl DividerAffordance {
    #[must_use]
    pub const fn new(active: bool) -> Self {
        Self {
            orientation: DividerOrientation::Vertical,
            cursor: DividerCursor::ColumnResize,
            active,
        }
    }
}

/// Regions for one render of the split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitLayout {
    pub leading: Bounds,
    pub divider: Bounds,
    pub trailing: Bounds,
    /// Nominal minimum widths, for hosts that mirror them as `min-width`.
    pub min_leading: f64,
    pub min_trailing: f64,
}

impl SplitLayout {
    /// Compute pane and divider regions.
    ///
    /// `fraction` is clamped into the feasible window for `container` first.
    /// Non-finite fractions fall back to an even split; negative or
    /// non-finite container sizes and divider extents are treated as zero.
    #[must_use]
    pub fn compute(
        fraction: f64,
        constraints: SplitConstraints,
        container: Bounds,
        divider_extent: f64,
    ) -> Self {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            DEFAULT_INITIAL_FRACTION
        };
        let width = non_negative(container.width);
        let height = non_negative(container.height);
        let fraction = constraints.decide(fraction, width, fraction).fraction;
        let leading_width = fraction * width;
        let trailing_width = width - leading_width;

        let divider_width = non_negative(divider_extent).min(width);
        let divider_x = (leading_width - divider_width / 2.0).clamp(0.0, width - divider_width);

        Self {
            leading: Bounds::new(container.x, container.y, leading_width, height),
            divider: Bounds::new(container.x + divider_x, container.y, divider_width, height),
            trailing: Bounds::new(
                container.x + leading_width,
                container.y,
                trailing_width,
                height,
            ),
            min_leading: constraints.min_left(),
            min_trailing: constraints.min_right(),
        }
    }

    /// True when either pane renders narrower than its nominal minimum.
    ///
    /// Happens only when the container cannot fit both minimums.
    #[must_use]
    pub fn below_minimum(&self) -> bool {
        self.leading.width < self.min_leading || self.trailing.width < self.min_trailing
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
