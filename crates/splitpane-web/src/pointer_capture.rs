#![forbid(unsafe_code)]

//! Deterministic pointer-capture adapter for divider drags.
//!
//! This module bridges raw pointer lifecycle signals into
//! [`splitpane_layout::SplitInputEvent`] values applied to an owned
//! [`SplitPane`], while enforcing:
//! - one active pointer at a time,
//! - explicit capture acquire/release commands for hosts, and
//! - cancellation on interruption paths (pointer-cancel, lost capture, teardown).
//!
//! The adapter never talks to a host itself; see [`crate::mount`] for that.

use splitpane_core::{Bounds, Point, PointerButton, PointerId, SurfaceId};
use splitpane_layout::{
    ClampReason, FractionCommit, SplitCancelReason, SplitConfigError, SplitConstraints,
    SplitDragTransition, SplitInputEvent, SplitInputEventKind, SplitPane, SplitPaneConfig,
};
use tracing::{debug, trace, warn};

/// Adapter configuration for divider pointer-capture handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPointerCaptureConfig {
    /// Button required to begin a drag.
    pub activation_button: PointerButton,
}

impl Default for SplitPointerCaptureConfig {
    fn default() -> Self {
        Self {
            activation_button: PointerButton::Primary,
        }
    }
}

/// Capture for the dragging pointer. `acknowledged` flips once the host
/// confirms it holds capture; only then is a release owed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragPointer {
    pointer_id: PointerId,
    acknowledged: bool,
}

impl DragPointer {
    fn release(self) -> Option<SplitCaptureCommand> {
        self.acknowledged.then_some(SplitCaptureCommand::Release {
            surface: SurfaceId::Divider,
            pointer_id: self.pointer_id,
        })
    }
}

/// What a host signal was about, recorded on every dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Signal {
    phase: SplitPointerLifecyclePhase,
    pointer_id: Option<PointerId>,
    position: Option<Point>,
}

impl Signal {
    pub(crate) const fn new(
        phase: SplitPointerLifecyclePhase,
        pointer_id: Option<PointerId>,
        position: Option<Point>,
    ) -> Self {
        Self {
            phase,
            pointer_id,
            position,
        }
    }
}

/// Host command emitted by the adapter for pointer-capture control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitCaptureCommand {
    Acquire {
        surface: SurfaceId,
        pointer_id: PointerId,
    },
    Release {
        surface: SurfaceId,
        pointer_id: PointerId,
    },
}

/// Lifecycle phase recorded for one adapter dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPointerLifecyclePhase {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerCancel,
    LostPointerCapture,
    CaptureAcquired,
    Teardown,
}

/// Why a lifecycle signal was dropped without touching the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPointerIgnoredReason {
    ButtonNotAllowed,
    ActivePointerAlreadyInProgress,
    NoActivePointer,
    PointerMismatch,
    MachineRejectedEvent,
    /// The owning mount already tore down its host registrations.
    Disposed,
}

/// Outcome category for one lifecycle dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPointerLogOutcome {
    SemanticForwarded,
    CaptureStateUpdated,
    Ignored(SplitPointerIgnoredReason),
}

/// Structured lifecycle log record for one adapter dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPointerLogEntry {
    pub phase: SplitPointerLifecyclePhase,
    pub sequence: Option<u64>,
    pub pointer_id: Option<PointerId>,
    pub position: Option<Point>,
    pub capture_command: Option<SplitCaptureCommand>,
    pub outcome: SplitPointerLogOutcome,
}

/// Result of one pointer lifecycle dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitPointerDispatch {
    pub semantic_event: Option<SplitInputEvent>,
    pub transition: Option<SplitDragTransition>,
    /// Fraction commit produced by an accepted move.
    pub commit: Option<FractionCommit>,
    pub capture_command: Option<SplitCaptureCommand>,
    /// Host should suppress the platform default for this signal (text
    /// selection, native drag).
    pub prevent_default: bool,
    pub log: SplitPointerLogEntry,
}

impl SplitPointerDispatch {
    /// Bare dispatch for `signal`; the `with_*` steps fill in the rest.
    fn record(signal: Signal, outcome: SplitPointerLogOutcome) -> Self {
        Self {
            semantic_event: None,
            transition: None,
            commit: None,
            capture_command: None,
            prevent_default: false,
            log: SplitPointerLogEntry {
                phase: signal.phase,
                sequence: None,
                pointer_id: signal.pointer_id,
                position: signal.position,
                capture_command: None,
                outcome,
            },
        }
    }

    pub(crate) fn ignored(signal: Signal, reason: SplitPointerIgnoredReason) -> Self {
        trace!(
            target: "splitpane_web::pointer",
            phase = ?signal.phase,
            pointer_id = signal.pointer_id.map(PointerId::get),
            reason = ?reason,
            "pointer signal ignored"
        );
        Self::record(signal, SplitPointerLogOutcome::Ignored(reason))
    }

    fn with_transition(mut self, transition: SplitDragTransition) -> Self {
        self.log.sequence = Some(transition.sequence);
        self.transition = Some(transition);
        self
    }

    fn with_capture_command(mut self, command: Option<SplitCaptureCommand>) -> Self {
        self.capture_command = command;
        self.log.capture_command = command;
        self
    }

    /// Whether the signal reached the drag machine.
    #[must_use]
    pub const fn is_forwarded(&self) -> bool {
        matches!(self.log.outcome, SplitPointerLogOutcome::SemanticForwarded)
    }
}

/// Deterministic pointer-capture adapter for divider drags.
///
/// Owns the [`SplitPane`] it drives and returns capture commands that hosts
/// wire to their platform's pointer-capture API (for the DOM,
/// `setPointerCapture()` / `releasePointerCapture()` on the divider).
#[derive(Debug, Clone)]
pub struct SplitPointerCaptureAdapter {
    pane: SplitPane,
    config: SplitPointerCaptureConfig,
    dragging: Option<DragPointer>,
    next_sequence: u64,
}

impl SplitPointerCaptureAdapter {
    /// Construct an adapter around a freshly validated split.
    pub fn new(
        split: SplitPaneConfig,
        config: SplitPointerCaptureConfig,
    ) -> Result<Self, SplitConfigError> {
        Ok(Self::from_pane(SplitPane::new(split)?, config))
    }

    /// Construct an adapter around an existing split.
    ///
    /// Any drag already in progress on `pane` is abandoned.
    #[must_use]
    pub fn from_pane(mut pane: SplitPane, config: SplitPointerCaptureConfig) -> Self {
        pane.force_cancel();
        let next_sequence = pane.last_sequence().saturating_add(1);
        Self {
            pane,
            config,
            dragging: None,
            next_sequence,
        }
    }

    #[must_use]
    pub const fn config(&self) -> SplitPointerCaptureConfig {
        self.config
    }

    /// The split this adapter drives.
    #[must_use]
    pub const fn pane(&self) -> &SplitPane {
        &self.pane
    }

    /// Committed split fraction.
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.pane.fraction()
    }

    #[must_use]
    pub fn active_pointer_id(&self) -> Option<PointerId> {
        self.dragging.map(|drag| drag.pointer_id)
    }

    /// Whether the host acknowledged capture for the active pointer.
    #[must_use]
    pub fn capture_acquired_for_active(&self) -> bool {
        self.dragging.is_some_and(|drag| drag.acknowledged)
    }

    /// Replace the minimum extents, reclamping against the last width the
    /// split saw. See [`SplitPane::set_constraints`].
    pub fn set_constraints(&mut self, constraints: SplitConstraints) -> Option<FractionCommit> {
        let commit = self.pane.set_constraints(constraints)?;
        warn_if_rejected(&commit, self.pane.container_width().unwrap_or(0.0));
        Some(commit)
    }

    /// Handle pointer-down on the divider.
    pub fn pointer_down(
        &mut self,
        pointer_id: PointerId,
        button: PointerButton,
        position: Point,
    ) -> SplitPointerDispatch {
        let signal = Signal::new(
            SplitPointerLifecyclePhase::PointerDown,
            Some(pointer_id),
            Some(position),
        );
        if button != self.config.activation_button {
            return SplitPointerDispatch::ignored(
                signal,
                SplitPointerIgnoredReason::ButtonNotAllowed,
            );
        }
        if self.dragging.is_some() {
            return SplitPointerDispatch::ignored(
                signal,
                SplitPointerIgnoredReason::ActivePointerAlreadyInProgress,
            );
        }

        let acquire = SplitCaptureCommand::Acquire {
            surface: SurfaceId::Divider,
            pointer_id,
        };
        let dispatch = self.forward(
            signal,
            SplitInputEventKind::PointerDown {
                pointer_id,
                button,
                position,
            },
            Some(acquire),
        );
        if dispatch.is_forwarded() {
            self.dragging = Some(DragPointer {
                pointer_id,
                acknowledged: false,
            });
        }
        dispatch
    }

    /// Mark pointer capture as successfully acquired by the host.
    pub fn capture_acquired(&mut self, pointer_id: PointerId) -> SplitPointerDispatch {
        let signal = Signal::new(
            SplitPointerLifecyclePhase::CaptureAcquired,
            Some(pointer_id),
            None,
        );
        let mut drag = match self.drag_for(signal, Some(pointer_id)) {
            Ok(drag) => drag,
            Err(ignored) => return ignored,
        };
        drag.acknowledged = true;
        self.dragging = Some(drag);
        debug!(
            target: "splitpane_web::pointer",
            pointer_id = pointer_id.get(),
            "pointer capture acknowledged"
        );
        SplitPointerDispatch::record(signal, SplitPointerLogOutcome::CaptureStateUpdated)
    }

    /// Handle pointer-move with the container bounds measured for this event.
    pub fn pointer_move(
        &mut self,
        pointer_id: PointerId,
        position: Point,
        container: Bounds,
    ) -> SplitPointerDispatch {
        let signal = Signal::new(
            SplitPointerLifecyclePhase::PointerMove,
            Some(pointer_id),
            Some(position),
        );
        if let Err(ignored) = self.drag_for(signal, Some(pointer_id)) {
            return ignored;
        }
        self.forward(
            signal,
            SplitInputEventKind::PointerMove {
                pointer_id,
                position,
                container,
            },
            None,
        )
    }

    /// Handle pointer-up and release capture for the active pointer.
    ///
    /// Any button ends the drag.
    pub fn pointer_up(
        &mut self,
        pointer_id: PointerId,
        button: PointerButton,
        position: Point,
    ) -> SplitPointerDispatch {
        let signal = Signal::new(
            SplitPointerLifecyclePhase::PointerUp,
            Some(pointer_id),
            Some(position),
        );
        let drag = match self.drag_for(signal, Some(pointer_id)) {
            Ok(drag) => drag,
            Err(ignored) => return ignored,
        };
        let dispatch = self.forward(
            signal,
            SplitInputEventKind::PointerUp {
                pointer_id,
                button,
                position,
            },
            drag.release(),
        );
        if dispatch.is_forwarded() {
            self.dragging = None;
        }
        dispatch
    }

    /// Handle pointer-cancel events. `None` cancels whichever pointer is active.
    pub fn pointer_cancel(&mut self, pointer_id: Option<PointerId>) -> SplitPointerDispatch {
        self.cancel_drag(
            Signal::new(SplitPointerLifecyclePhase::PointerCancel, pointer_id, None),
            SplitCancelReason::PointerCancel,
        )
    }

    /// Handle `lostpointercapture`; cancels without commanding a release.
    pub fn lost_pointer_capture(&mut self, pointer_id: PointerId) -> SplitPointerDispatch {
        self.cancel_drag(
            Signal::new(
                SplitPointerLifecyclePhase::LostPointerCapture,
                Some(pointer_id),
                None,
            ),
            SplitCancelReason::LostPointerCapture,
        )
    }

    /// Abort any active drag because the owner is going away.
    pub fn teardown(&mut self) -> SplitPointerDispatch {
        let signal = Signal::new(SplitPointerLifecyclePhase::Teardown, None, None);
        let Some(drag) = self.dragging.take() else {
            return SplitPointerDispatch::ignored(
                signal,
                SplitPointerIgnoredReason::NoActivePointer,
            );
        };
        let signal = Signal {
            pointer_id: Some(drag.pointer_id),
            ..signal
        };
        let Some(transition) = self.pane.force_cancel() else {
            return SplitPointerDispatch::ignored(
                signal,
                SplitPointerIgnoredReason::MachineRejectedEvent,
            );
        };
        let release = drag.release();
        debug!(
            target: "splitpane_web::pointer",
            pointer_id = drag.pointer_id.get(),
            sequence = transition.sequence,
            release = release.is_some(),
            "drag canceled on teardown"
        );
        SplitPointerDispatch::record(signal, SplitPointerLogOutcome::SemanticForwarded)
            .with_transition(transition)
            .with_capture_command(release)
    }

    /// Reclamp after the container changed to `width`.
    pub fn container_resized(&mut self, width: f64) -> FractionCommit {
        let commit = self.pane.container_resized(width);
        warn_if_rejected(&commit, width);
        trace!(
            target: "splitpane_web::pointer",
            width,
            fraction = commit.fraction,
            changed = commit.changed(),
            "container reclamped"
        );
        commit
    }

    /// The active drag, provided `pointer_id` (when given) owns it.
    fn drag_for(
        &self,
        signal: Signal,
        pointer_id: Option<PointerId>,
    ) -> Result<DragPointer, SplitPointerDispatch> {
        let Some(drag) = self.dragging else {
            return Err(SplitPointerDispatch::ignored(
                signal,
                SplitPointerIgnoredReason::NoActivePointer,
            ));
        };
        match pointer_id {
            Some(id) if id != drag.pointer_id => Err(SplitPointerDispatch::ignored(
                signal,
                SplitPointerIgnoredReason::PointerMismatch,
            )),
            _ => Ok(drag),
        }
    }

    fn cancel_drag(&mut self, signal: Signal, reason: SplitCancelReason) -> SplitPointerDispatch {
        let drag = match self.drag_for(signal, signal.pointer_id) {
            Ok(drag) => drag,
            Err(ignored) => return ignored,
        };
        // A lost capture has nothing left to release.
        let release = match reason {
            SplitCancelReason::LostPointerCapture => None,
            _ => drag.release(),
        };
        let dispatch = self.forward(
            Signal {
                pointer_id: Some(drag.pointer_id),
                ..signal
            },
            SplitInputEventKind::Cancel {
                pointer_id: Some(drag.pointer_id),
                reason,
            },
            release,
        );
        if dispatch.is_forwarded() {
            self.dragging = None;
        }
        dispatch
    }

    fn forward(
        &mut self,
        signal: Signal,
        kind: SplitInputEventKind,
        capture_command: Option<SplitCaptureCommand>,
    ) -> SplitPointerDispatch {
        let event = SplitInputEvent::new(self.next_sequence(), kind);
        let outcome = match self.pane.apply_event(&event) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(
                    target: "splitpane_web::pointer",
                    phase = ?signal.phase,
                    %error,
                    "drag machine rejected pointer signal"
                );
                return SplitPointerDispatch::ignored(
                    signal,
                    SplitPointerIgnoredReason::MachineRejectedEvent,
                );
            }
        };
        if let (Some(commit), SplitInputEventKind::PointerMove { container, .. }) =
            (outcome.commit, kind)
        {
            warn_if_rejected(&commit, container.width);
        }
        debug!(
            target: "splitpane_web::pointer",
            phase = ?signal.phase,
            pointer_id = signal.pointer_id.map(PointerId::get),
            sequence = event.sequence,
            effect = ?outcome.transition.effect,
            fraction = self.pane.fraction(),
            "pointer signal forwarded"
        );

        let mut dispatch =
            SplitPointerDispatch::record(signal, SplitPointerLogOutcome::SemanticForwarded)
                .with_transition(outcome.transition)
                .with_capture_command(capture_command);
        dispatch.semantic_event = Some(event);
        dispatch.commit = outcome.commit;
        dispatch.prevent_default = matches!(
            signal.phase,
            SplitPointerLifecyclePhase::PointerDown | SplitPointerLifecyclePhase::PointerMove
        );
        dispatch
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        sequence
    }
}

fn warn_if_rejected(commit: &FractionCommit, width: f64) {
    if commit.reason == ClampReason::RejectedNonFinite {
        warn!(
            target: "splitpane_web::pointer",
            width,
            kept = commit.fraction,
            "non-finite split fraction rejected"
        );
    }
}
