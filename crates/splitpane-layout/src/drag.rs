#![forbid(unsafe_code)]

//! Divider drag lifecycle.
//!
//! [`SplitDragMachine`] tracks one pointer-drag gesture on the divider. It is
//! host-agnostic: adapters translate raw pointer notifications into
//! [`SplitInputEvent`] values and feed them in delivery order.

use std::fmt;

use serde::{Deserialize, Serialize};
use splitpane_core::{Bounds, Point, PointerButton, PointerId};

/// Canonical cancel reasons for the drag lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitCancelReason {
    /// Host reported `pointercancel`.
    PointerCancel,
    /// Host reported `lostpointercapture`.
    LostPointerCapture,
    /// The owning primitive is being torn down.
    Teardown,
}

/// Semantic drag input kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SplitInputEventKind {
    PointerDown {
        pointer_id: PointerId,
        button: PointerButton,
        position: Point,
    },
    /// Pointer moved; `container` is the container box measured for this event.
    PointerMove {
        pointer_id: PointerId,
        position: Point,
        container: Bounds,
    },
    PointerUp {
        pointer_id: PointerId,
        button: PointerButton,
        position: Point,
    },
    /// `pointer_id: None` cancels whichever pointer is active.
    Cancel {
        pointer_id: Option<PointerId>,
        reason: SplitCancelReason,
    },
}

/// Sequenced semantic input event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitInputEvent {
    pub sequence: u64,
    #[serde(flatten)]
    pub kind: SplitInputEventKind,
}

impl SplitInputEvent {
    #[must_use]
    pub const fn new(sequence: u64, kind: SplitInputEventKind) -> Self {
        Self { sequence, kind }
    }
}

/// Drag lifecycle state.
///
/// ```text
/// Idle -> Dragging -> Idle   (up / cancel / lost capture)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SplitDragState {
    #[default]
    Idle,
    Dragging {
        pointer_id: PointerId,
        origin: Point,
        current: Point,
        started_sequence: u64,
    },
}

impl SplitDragState {
    /// Pointer that owns the active gesture.
    #[must_use]
    pub const fn pointer_id(&self) -> Option<PointerId> {
        match self {
            Self::Idle => None,
            Self::Dragging { pointer_id, .. } => Some(*pointer_id),
        }
    }
}

/// Why an event was accepted without changing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitDragNoopReason {
    IdleWithoutActiveDrag,
    ActiveDragAlreadyInProgress,
    PointerMismatch,
}

/// Effect emitted by one lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum SplitDragEffect {
    DragStarted {
        pointer_id: PointerId,
        origin: Point,
    },
    /// Pointer moved; `desired_fraction` is unclamped and may be non-finite
    /// when the container has no width.
    DragMoved {
        pointer_id: PointerId,
        previous: Point,
        current: Point,
        container_width: f64,
        desired_fraction: f64,
    },
    Released {
        pointer_id: PointerId,
        origin: Point,
        end: Point,
    },
    Canceled {
        pointer_id: PointerId,
        reason: SplitCancelReason,
    },
    Noop {
        reason: SplitDragNoopReason,
    },
}

/// One state-machine transition with deterministic telemetry fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitDragTransition {
    pub transition_id: u64,
    pub sequence: u64,
    pub from: SplitDragState,
    pub to: SplitDragState,
    pub effect: SplitDragEffect,
}

/// Runtime lifecycle machine for divider drags.
///
/// The first pointer to go down wins; further pointer-downs are no-ops until
/// it is released or canceled.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplitDragMachine {
    state: SplitDragState,
    transition_counter: u64,
    last_sequence: u64,
}

impl SplitDragMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SplitDragState {
        self.state
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, SplitDragState::Dragging { .. })
    }

    /// Sequence number of the last accepted event (`0` before any).
    #[must_use]
    pub const fn last_sequence(&self) -> u64 {
        self.last_sequence
    }

    /// Unconditionally return to `Idle`.
    ///
    /// Used on teardown paths where no host event is available. Returns
    /// `None` when already idle.
    pub fn force_cancel(&mut self) -> Option<SplitDragTransition> {
        let from = self.state;
        let SplitDragState::Dragging { pointer_id, .. } = from else {
            return None;
        };
        self.state = SplitDragState::Idle;
        self.transition_counter = self.transition_counter.saturating_add(1);
        Some(SplitDragTransition {
            transition_id: self.transition_counter,
            sequence: self.last_sequence,
            from,
            to: SplitDragState::Idle,
            effect: SplitDragEffect::Canceled {
                pointer_id,
                reason: SplitCancelReason::Teardown,
            },
        })
    }

    /// Apply one semantic input event.
    ///
    /// Events must arrive with strictly increasing non-zero sequence numbers;
    /// anything else is rejected and leaves the state untouched.
    pub fn apply_event(
        &mut self,
        event: &SplitInputEvent,
    ) -> Result<SplitDragTransition, SplitDragMachineError> {
        if event.sequence == 0 {
            return Err(SplitDragMachineError::ZeroSequence);
        }
        if event.sequence <= self.last_sequence {
            return Err(SplitDragMachineError::OutOfOrderSequence {
                sequence: event.sequence,
                last: self.last_sequence,
            });
        }
        self.last_sequence = event.sequence;

        let from = self.state;
        let effect = match (self.state, event.kind) {
            (
                SplitDragState::Idle,
                SplitInputEventKind::PointerDown {
                    pointer_id,
                    position,
                    ..
                },
            ) => {
                self.state = SplitDragState::Dragging {
                    pointer_id,
                    origin: position,
                    current: position,
                    started_sequence: event.sequence,
                };
                SplitDragEffect::DragStarted {
                    pointer_id,
                    origin: position,
                }
            }
            (SplitDragState::Idle, _) => SplitDragEffect::Noop {
                reason: SplitDragNoopReason::IdleWithoutActiveDrag,
            },
            (SplitDragState::Dragging { .. }, SplitInputEventKind::PointerDown { .. }) => {
                SplitDragEffect::Noop {
                    reason: SplitDragNoopReason::ActiveDragAlreadyInProgress,
                }
            }
            (
                SplitDragState::Dragging {
                    pointer_id,
                    origin,
                    current,
                    started_sequence,
                },
                SplitInputEventKind::PointerMove {
                    pointer_id: incoming,
                    position,
                    container,
                },
            ) => {
                if incoming != pointer_id {
                    SplitDragEffect::Noop {
                        reason: SplitDragNoopReason::PointerMismatch,
                    }
                } else {
                    self.state = SplitDragState::Dragging {
                        pointer_id,
                        origin,
                        current: position,
                        started_sequence,
                    };
                    SplitDragEffect::DragMoved {
                        pointer_id,
                        previous: current,
                        current: position,
                        container_width: container.width,
                        desired_fraction: container.relative_x(position) / container.width,
                    }
                }
            }
            (
                SplitDragState::Dragging {
                    pointer_id, origin, ..
                },
                SplitInputEventKind::PointerUp {
                    pointer_id: incoming,
                    position,
                    ..
                },
            ) => {
                if incoming != pointer_id {
                    SplitDragEffect::Noop {
                        reason: SplitDragNoopReason::PointerMismatch,
                    }
                } else {
                    self.state = SplitDragState::Idle;
                    SplitDragEffect::Released {
                        pointer_id,
                        origin,
                        end: position,
                    }
                }
            }
            (
                SplitDragState::Dragging { pointer_id, .. },
                SplitInputEventKind::Cancel {
                    pointer_id: incoming,
                    reason,
                },
            ) => {
                if incoming.is_some_and(|id| id != pointer_id) {
                    SplitDragEffect::Noop {
                        reason: SplitDragNoopReason::PointerMismatch,
                    }
                } else {
                    self.state = SplitDragState::Idle;
                    SplitDragEffect::Canceled { pointer_id, reason }
                }
            }
        };

        self.transition_counter = self.transition_counter.saturating_add(1);
        Ok(SplitDragTransition {
            transition_id: self.transition_counter,
            sequence: event.sequence,
            from,
            to: self.state,
            effect,
        })
    }
}

/// Host ordering violations detected by the lifecycle machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDragMachineError {
    ZeroSequence,
    OutOfOrderSequence { sequence: u64, last: u64 },
}

impl fmt::Display for SplitDragMachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSequence => write!(f, "event sequence must be > 0"),
            Self::OutOfOrderSequence { sequence, last } => write!(
                f,
                "event sequence {sequence} is not after last accepted sequence {last}"
            ),
        }
    }
}

impl std::error::Error for SplitDragMachineError {}

#[cfg(test)]
mod tests {
    use super::{
        SplitCancelReason, SplitDragEffect, SplitDragMachine, SplitDragMachineError,
        SplitDragNoopReason, SplitDragState, SplitInputEvent, SplitInputEventKind,
    };
    use splitpane_core::{Bounds, Point, PointerButton, PointerId};

    fn container() -> Bounds {
        Bounds::new(100.0, 0.0, 1000.0, 400.0)
    }

    fn down(sequence: u64, id: u32, x: f64) -> SplitInputEvent {
        SplitInputEvent::new(
            sequence,
            SplitInputEventKind::PointerDown {
                pointer_id: PointerId::new(id),
                button: PointerButton::Primary,
                position: Point::new(x, 10.0),
            },
        )
    }

    fn mv(sequence: u64, id: u32, x: f64) -> SplitInputEvent {
        SplitInputEvent::new(
            sequence,
            SplitInputEventKind::PointerMove {
                pointer_id: PointerId::new(id),
                position: Point::new(x, 10.0),
                container: container(),
            },
        )
    }

    fn up(sequence: u64, id: u32, x: f64) -> SplitInputEvent {
        SplitInputEvent::new(
            sequence,
            SplitInputEventKind::PointerUp {
                pointer_id: PointerId::new(id),
                button: PointerButton::Primary,
                position: Point::new(x, 10.0),
            },
        )
    }

    #[test]
    fn pointer_down_starts_dragging() {
        let mut machine = SplitDragMachine::new();
        let transition = machine.apply_event(&down(1, 7, 600.0)).expect("valid event");
        assert_eq!(transition.from, SplitDragState::Idle);
        assert!(machine.is_dragging());
        assert_eq!(machine.state().pointer_id(), Some(PointerId::new(7)));
        assert!(matches!(transition.effect, SplitDragEffect::DragStarted { .. }));
    }

    #[test]
    fn move_reports_desired_fraction_relative_to_leading_edge() {
        let mut machine = SplitDragMachine::new();
        machine.apply_event(&down(1, 7, 600.0)).expect("valid event");
        let transition = machine.apply_event(&mv(2, 7, 400.0)).expect("valid event");
        let SplitDragEffect::DragMoved {
            desired_fraction,
            container_width,
            ..
        } = transition.effect
        else {
            unreachable!("expected DragMoved, got {:?}", transition.effect);
        };
        assert_eq!(desired_fraction, 0.3);
        assert_eq!(container_width, 1000.0);
    }

    #[test]
    fn second_pointer_down_is_ignored() {
        let mut machine = SplitDragMachine::new();
        machine.apply_event(&down(1, 1, 600.0)).expect("valid event");
        let transition = machine.apply_event(&down(2, 2, 300.0)).expect("valid event");
        assert_eq!(
            transition.effect,
            SplitDragEffect::Noop {
                reason: SplitDragNoopReason::ActiveDragAlreadyInProgress
            }
        );
        assert_eq!(machine.state().pointer_id(), Some(PointerId::new(1)));

        let foreign = machine.apply_event(&mv(3, 2, 200.0)).expect("valid event");
        assert_eq!(
            foreign.effect,
            SplitDragEffect::Noop {
                reason: SplitDragNoopReason::PointerMismatch
            }
        );
    }

    #[test]
    fn pointer_up_returns_to_idle_and_later_moves_are_noops() {
        let mut machine = SplitDragMachine::new();
        machine.apply_event(&down(1, 3, 600.0)).expect("valid event");
        let released = machine.apply_event(&up(2, 3, 650.0)).expect("valid event");
        assert!(matches!(released.effect, SplitDragEffect::Released { .. }));
        assert_eq!(machine.state(), SplitDragState::Idle);

        let after = machine.apply_event(&mv(3, 3, 700.0)).expect("valid event");
        assert_eq!(
            after.effect,
            SplitDragEffect::Noop {
                reason: SplitDragNoopReason::IdleWithoutActiveDrag
            }
        );
    }

    #[test]
    fn cancel_without_pointer_id_cancels_active_drag() {
        let mut machine = SplitDragMachine::new();
        machine.apply_event(&down(1, 9, 600.0)).expect("valid event");
        let cancel = SplitInputEvent::new(
            2,
            SplitInputEventKind::Cancel {
                pointer_id: None,
                reason: SplitCancelReason::PointerCancel,
            },
        );
        let transition = machine.apply_event(&cancel).expect("valid event");
        assert_eq!(
            transition.effect,
            SplitDragEffect::Canceled {
                pointer_id: PointerId::new(9),
                reason: SplitCancelReason::PointerCancel
            }
        );
        assert!(!machine.is_dragging());
    }

    #[test]
    fn duplicate_cancel_is_idempotent_noop() {
        let mut machine = SplitDragMachine::new();
        machine.apply_event(&down(1, 9, 600.0)).expect("valid event");
        for sequence in [2, 3] {
            machine
                .apply_event(&SplitInputEvent::new(
                    sequence,
                    SplitInputEventKind::Cancel {
                        pointer_id: Some(PointerId::new(9)),
                        reason: SplitCancelReason::PointerCancel,
                    },
                ))
                .expect("valid event");
        }
        assert_eq!(machine.state(), SplitDragState::Idle);
    }

    #[test]
    fn stale_or_zero_sequence_is_rejected_without_mutation() {
        let mut machine = SplitDragMachine::new();
        assert_eq!(
            machine.apply_event(&down(0, 1, 10.0)),
            Err(SplitDragMachineError::ZeroSequence)
        );
        machine.apply_event(&down(5, 1, 10.0)).expect("valid event");
        let before = machine.state();
        assert_eq!(
            machine.apply_event(&up(5, 1, 10.0)),
            Err(SplitDragMachineError::OutOfOrderSequence {
                sequence: 5,
                last: 5
            })
        );
        assert_eq!(machine.state(), before);
    }

    #[test]
    fn force_cancel_only_reports_when_active() {
        let mut machine = SplitDragMachine::new();
        assert!(machine.force_cancel().is_none());
        machine.apply_event(&down(1, 4, 10.0)).expect("valid event");
        let transition = machine.force_cancel().expect("active drag should cancel");
        assert_eq!(
            transition.effect,
            SplitDragEffect::Canceled {
                pointer_id: PointerId::new(4),
                reason: SplitCancelReason::Teardown
            }
        );
        assert!(machine.force_cancel().is_none());
    }

    #[test]
    fn transition_ids_are_monotonic() {
        let mut machine = SplitDragMachine::new();
        let a = machine.apply_event(&down(1, 1, 10.0)).expect("valid event");
        let b = machine.apply_event(&mv(2, 1, 20.0)).expect("valid event");
        let c = machine.apply_event(&up(3, 1, 20.0)).expect("valid event");
        assert!(a.transition_id < b.transition_id && b.transition_id < c.transition_id);
    }
}
