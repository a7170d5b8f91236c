#![forbid(unsafe_code)]

//! Resizable two-pane split layout.
//!
//! # Role in splitpane
//! `splitpane-layout` is the algorithmic core: it owns the split fraction and
//! keeps it valid under three interleaved event sources (pointer moves,
//! pointer release/cancel, container resize). It performs no I/O and never
//! logs; host adapters (`splitpane-web`) feed it events and execute the
//! side effects it asks for.
//!
//! # Modules
//! - [`fraction`]: feasible-window clamping and the committed [`SplitState`].
//! - [`drag`]: divider drag lifecycle state machine.
//! - [`resize`]: reclamping after container size changes.
//! - [`render`]: pure pane/divider geometry for a committed fraction.
//! - [`config`]: construction-time options.
//! - [`split_pane`]: the [`SplitPane`] instance tying them together.

pub mod config;
pub mod drag;
pub mod fraction;
pub mod render;
pub mod resize;
pub mod split_pane;

pub use config::{SplitConfigError, SplitPaneConfig};
pub use drag::{
    SplitCancelReason, SplitDragEffect, SplitDragMachine, SplitDragMachineError,
    SplitDragNoopReason, SplitDragState, SplitDragTransition, SplitInputEvent,
    SplitInputEventKind,
};
pub use fraction::{
    ClampDecision, ClampReason, DEFAULT_INITIAL_FRACTION, DEFAULT_MIN_PANE_EXTENT,
    FeasibleWindow, FractionCommit, SplitConstraints, SplitState, clamp_fraction,
};
pub use render::{
    DEFAULT_DIVIDER_EXTENT, DividerAffordance, DividerCursor, DividerOrientation, SplitLayout,
};
pub use resize::reclamp;
pub use split_pane::{SplitPane, SplitPaneOutcome};
pub use splitpane_core::{Bounds, Point, PointerButton, PointerId, SurfaceId};
