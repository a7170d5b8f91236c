#![forbid(unsafe_code)]

//! One resizable two-pane split instance.
//!
//! [`SplitPane`] exclusively owns its [`SplitState`] and wires the three event
//! sources together: drag events go through [`SplitDragMachine`], moves are
//! clamped against the constraints current at that moment, and container
//! resizes are reclamped through [`reclamp`]. Constraint changes reclamp
//! against the last container width the split saw, so the committed fraction
//! never sits outside the current feasible window. All handlers run
//! synchronously and in O(1).

use splitpane_core::Bounds;

use crate::config::{SplitConfigError, SplitPaneConfig};
use crate::drag::{
    SplitDragEffect, SplitDragMachine, SplitDragMachineError, SplitDragState,
    SplitDragTransition, SplitInputEvent,
};
use crate::fraction::{FractionCommit, SplitConstraints, SplitState};
use crate::render::{DividerAffordance, SplitLayout};
use crate::resize::reclamp;

/// Result of applying one drag event to a [`SplitPane`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPaneOutcome {
    pub transition: SplitDragTransition,
    /// Present when the event was an accepted pointer move.
    pub commit: Option<FractionCommit>,
}

/// Resizable split primitive state.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitPane {
    state: SplitState,
    constraints: SplitConstraints,
    divider_extent: f64,
    drag: SplitDragMachine,
    /// Width from the most recent accepted move or resize.
    container_width: Option<f64>,
}

impl SplitPane {
    /// Create an instance from validated options.
    pub fn new(config: SplitPaneConfig) -> Result<Self, SplitConfigError> {
        config.validate()?;
        Ok(Self {
            state: config.initial_state(),
            constraints: config.constraints(),
            divider_extent: config.divider_extent,
            drag: SplitDragMachine::new(),
            container_width: None,
        })
    }

    /// Committed split fraction.
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.state.fraction()
    }

    #[must_use]
    pub const fn constraints(&self) -> SplitConstraints {
        self.constraints
    }

    /// Replace the minimum extents and reclamp the committed fraction.
    ///
    /// Returns `None` when no move or resize has reported a container width
    /// yet; the first one clamps against the new constraints.
    pub fn set_constraints(&mut self, constraints: SplitConstraints) -> Option<FractionCommit> {
        self.constraints = constraints;
        let width = self.container_width?;
        Some(reclamp(&mut self.state, width, constraints))
    }

    /// Container width last reported by a move or resize.
    #[must_use]
    pub const fn container_width(&self) -> Option<f64> {
        self.container_width
    }

    #[must_use]
    pub const fn divider_extent(&self) -> f64 {
        self.divider_extent
    }

    #[must_use]
    pub const fn drag_state(&self) -> SplitDragState {
        self.drag.state()
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Whether hosts should suppress default pointer side effects (text
    /// selection, native drag) on the interactive surface.
    #[must_use]
    pub const fn suppresses_default(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Sequence number of the last accepted drag event.
    #[must_use]
    pub const fn last_sequence(&self) -> u64 {
        self.drag.last_sequence()
    }

    /// Apply one drag lifecycle event, committing a new fraction for moves.
    pub fn apply_event(
        &mut self,
        event: &SplitInputEvent,
    ) -> Result<SplitPaneOutcome, SplitDragMachineError> {
        let transition = self.drag.apply_event(event)?;
        let commit = match transition.effect {
            SplitDragEffect::DragMoved {
                container_width,
                desired_fraction,
                ..
            } => {
                self.container_width = Some(container_width);
                let decision = self.constraints.decide(
                    desired_fraction,
                    container_width,
                    self.state.fraction(),
                );
                Some(self.state.commit(decision))
            }
            _ => None,
        };
        Ok(SplitPaneOutcome { transition, commit })
    }

    /// Reclamp after the container changed size. Runs in any drag state.
    pub fn container_resized(&mut self, width: f64) -> FractionCommit {
        self.container_width = Some(width);
        reclamp(&mut self.state, width, self.constraints)
    }

    /// Abort an active drag without a host event.
    pub fn force_cancel(&mut self) -> Option<SplitDragTransition> {
        self.drag.force_cancel()
    }

    /// Pane and divider regions for `container`.
    #[must_use]
    pub fn layout(&self, container: Bounds) -> SplitLayout {
        SplitLayout::compute(
            self.state.fraction(),
            self.constraints,
            container,
            self.divider_extent,
        )
    }

    #[must_use]
    pub const fn divider_affordance(&self) -> DividerAffordance {
        DividerAffordance::new(self.drag.is_dragging())
    }
}

#[cfg(test)]
mod tests {
    use super::SplitPane;
    use crate::config::{SplitConfigError, SplitPaneConfig};
    use crate::drag::{SplitInputEvent, SplitInputEventKind};
    use crate::fraction::{ClampReason, SplitConstraints};
    use splitpane_core::{Bounds, Point, PointerButton, PointerId};

    fn pane(min: f64) -> SplitPane {
        SplitPane::new(
            SplitPaneConfig::default()
                .with_min_left(min)
                .with_min_right(min),
        )
        .expect("valid config")
    }

    fn down(sequence: u64) -> SplitInputEvent {
        SplitInputEvent::new(
            sequence,
            SplitInputEventKind::PointerDown {
                pointer_id: PointerId::new(1),
                button: PointerButton::Primary,
                position: Point::new(500.0, 0.0),
            },
        )
    }

    fn mv(sequence: u64, x: f64, width: f64) -> SplitInputEvent {
        SplitInputEvent::new(
            sequence,
            SplitInputEventKind::PointerMove {
                pointer_id: PointerId::new(1),
                position: Point::new(x, 0.0),
                container: Bounds::from_size(width, 300.0),
            },
        )
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = SplitPane::new(SplitPaneConfig::default().with_initial_fraction(2.0))
            .expect_err("fraction out of range");
        assert_eq!(err, SplitConfigError::InvalidInitialFraction { value: 2.0 });
    }

    #[test]
    fn move_uses_width_measured_for_that_event() {
        let mut pane = pane(0.0);
        pane.apply_event(&down(1)).expect("valid event");
        let a = pane.apply_event(&mv(2, 300.0, 1000.0)).expect("valid event");
        assert_eq!(a.commit.map(|c| c.fraction), Some(0.3));
        let b = pane.apply_event(&mv(3, 300.0, 600.0)).expect("valid event");
        assert_eq!(b.commit.map(|c| c.fraction), Some(0.5));
    }

    #[test]
    fn constraint_change_applies_to_next_move() {
        let mut pane = pane(100.0);
        pane.apply_event(&down(1)).expect("valid event");
        pane.set_constraints(SplitConstraints::new(400.0, 100.0));
        let outcome = pane.apply_event(&mv(2, 200.0, 1000.0)).expect("valid event");
        let commit = outcome.commit.expect("move commits");
        assert_eq!(commit.fraction, 0.4);
        assert_eq!(commit.reason, ClampReason::ClampedToLower);
    }

    #[test]
    fn constraint_change_reclamps_against_last_width() {
        let mut pane = pane(100.0);
        assert_eq!(pane.set_constraints(SplitConstraints::new(600.0, 100.0)), None);
        assert_eq!(pane.fraction(), 0.5);

        pane.container_resized(1000.0);
        assert_eq!(pane.fraction(), 0.6);

        let commit = pane
            .set_constraints(SplitConstraints::new(100.0, 750.0))
            .expect("width is known");
        assert_eq!(commit.fraction, 0.25);
        assert_eq!(commit.reason, ClampReason::ClampedToUpper);
        assert!(pane.constraints().window(1000.0).contains(pane.fraction()));
    }

    #[test]
    fn constraint_change_during_drag_uses_width_of_last_move() {
        let mut pane = pane(0.0);
        pane.apply_event(&down(1)).expect("valid event");
        pane.apply_event(&mv(2, 200.0, 800.0)).expect("valid event");
        assert_eq!(pane.container_width(), Some(800.0));

        pane.set_constraints(SplitConstraints::new(400.0, 0.0));
        assert_eq!(pane.fraction(), 0.5);
        assert!(pane.is_dragging());
    }

    #[test]
    fn zero_width_move_keeps_fraction_finite() {
        let mut pane = pane(0.0);
        pane.apply_event(&down(1)).expect("valid event");
        let outcome = pane.apply_event(&mv(2, 0.0, 0.0)).expect("valid event");
        let commit = outcome.commit.expect("move commits");
        assert_eq!(commit.reason, ClampReason::RejectedNonFinite);
        assert_eq!(pane.fraction(), 0.5);
    }

    #[test]
    fn suppression_and_affordance_follow_drag() {
        let mut pane = pane(0.0);
        assert!(!pane.suppresses_default());
        assert!(!pane.divider_affordance().active);
        pane.apply_event(&down(1)).expect("valid event");
        assert!(pane.suppresses_default());
        assert!(pane.divider_affordance().active);
        pane.force_cancel();
        assert!(!pane.suppresses_default());
    }

    #[test]
    fn layout_tracks_committed_fraction() {
        let mut pane = pane(0.0);
        pane.apply_event(&down(1)).expect("valid event");
        pane.apply_event(&mv(2, 250.0, 1000.0)).expect("valid event");
        let layout = pane.layout(Bounds::from_size(1000.0, 300.0));
        assert_eq!(layout.leading.width, 250.0);
        assert_eq!(layout.trailing.width, 750.0);
    }
}
