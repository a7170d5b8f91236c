#![forbid(unsafe_code)]

//! splitpane public facade crate.
//!
//! This crate provides the stable surface area for users. It re-exports the
//! common types from the internal crates and offers a lightweight prelude.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use splitpane_core::{Bounds, Point, PointerButton, PointerId, SurfaceId};

// --- Layout re-exports -----------------------------------------------------

pub use splitpane_layout::{
    ClampDecision, ClampReason, DEFAULT_DIVIDER_EXTENT, DEFAULT_INITIAL_FRACTION,
    DEFAULT_MIN_PANE_EXTENT, DividerAffordance, DividerCursor, DividerOrientation,
    FeasibleWindow, FractionCommit, SplitCancelReason, SplitConfigError, SplitConstraints,
    SplitDragEffect, SplitDragMachine, SplitDragMachineError, SplitDragNoopReason, SplitDragState,
    SplitDragTransition, SplitInputEvent, SplitInputEventKind, SplitLayout, SplitPane,
    SplitPaneConfig, SplitPaneOutcome, SplitState, clamp_fraction, reclamp,
};

// --- Web re-exports --------------------------------------------------------

#[cfg(feature = "web")]
pub use splitpane_web::{
    ListenerToken, ObserverToken, SplitCaptureCommand, SplitPaneHost, SplitPaneMount,
    SplitPointerCaptureAdapter, SplitPointerCaptureConfig, SplitPointerDispatch,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for splitpane users.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Construction options were rejected.
    Config(SplitConfigError),
    /// A host delivered drag events out of order.
    Drag(SplitDragMachineError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Drag(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Drag(err) => Some(err),
        }
    }
}

impl From<SplitConfigError> for Error {
    fn from(err: SplitConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<SplitDragMachineError> for Error {
    fn from(err: SplitDragMachineError) -> Self {
        Self::Drag(err)
    }
}

/// Standard result type for splitpane APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Bounds, Error, Point, PointerButton, PointerId, Result, SplitConstraints, SplitLayout,
        SplitPane, SplitPaneConfig,
    };

    #[cfg(feature = "web")]
    pub use crate::{SplitPaneHost, SplitPaneMount};

    pub use crate::{core, layout};

    #[cfg(feature = "web")]
    pub use crate::web;
}

pub use splitpane_core as core;
pub use splitpane_layout as layout;
#[cfg(feature = "web")]
pub use splitpane_web as web;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::{SplitConfigError, SplitDragMachineError, SplitInputEvent, SplitInputEventKind};

    fn drag_to(pane: &mut SplitPane, x: f64) -> Result<f64> {
        let pointer_id = PointerId::new(1);
        pane.apply_event(&SplitInputEvent::new(
            1,
            SplitInputEventKind::PointerDown {
                pointer_id,
                button: PointerButton::Primary,
                position: Point::new(0.0, 0.0),
            },
        ))?;
        pane.apply_event(&SplitInputEvent::new(
            2,
            SplitInputEventKind::PointerMove {
                pointer_id,
                position: Point::new(x, 0.0),
                container: Bounds::from_size(1000.0, 100.0),
            },
        ))?;
        Ok(pane.fraction())
    }

    #[test]
    fn errors_convert_through_question_mark() {
        let config: Result<SplitPane> = SplitPane::new(
            SplitPaneConfig::default().with_initial_fraction(-0.5),
        )
        .map_err(Error::from);
        assert_eq!(
            config.expect_err("negative fraction"),
            Error::Config(SplitConfigError::InvalidInitialFraction { value: -0.5 })
        );

        let mut pane = SplitPane::new(SplitPaneConfig::default()).expect("default config");
        assert_eq!(drag_to(&mut pane, 400.0), Ok(0.4));
        assert_eq!(
            drag_to(&mut pane, 400.0),
            Err(Error::Drag(SplitDragMachineError::OutOfOrderSequence {
                sequence: 1,
                last: 2
            }))
        );
    }

    #[test]
    fn display_forwards_inner_message() {
        let err = Error::from(SplitDragMachineError::ZeroSequence);
        assert_eq!(err.to_string(), SplitDragMachineError::ZeroSequence.to_string());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn prelude_reaches_layout_math() {
        let split = SplitLayout::compute(
            0.25,
            SplitConstraints::unconstrained(),
            Bounds::from_size(800.0, 600.0),
            layout::DEFAULT_DIVIDER_EXTENT,
        );
        assert_eq!(split.leading.width, 200.0);
        assert_eq!(split.trailing.width, 600.0);
    }
}
