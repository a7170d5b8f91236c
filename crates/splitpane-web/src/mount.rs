#![forbid(unsafe_code)]

//! Scoped lifetime of one split attached to a host.
//!
//! [`SplitPaneMount::mount`] registers the window pointer listeners and the
//! container resize observer; [`SplitPaneMount::dispose`] (or dropping the
//! mount) cancels any active drag, releases capture, and deregisters both
//! exactly once. A disposed mount ignores pointer signals, so nothing can
//! take pointer capture after its registrations are gone.

use splitpane_core::{Point, PointerButton, PointerId, SurfaceId};
use splitpane_layout::{
    DividerAffordance, FractionCommit, SplitConfigError, SplitConstraints, SplitLayout, SplitPane,
    SplitPaneConfig,
};
use tracing::{Span, debug, debug_span};

use crate::host::{ListenerToken, ObserverToken, SplitPaneHost};
use crate::pointer_capture::{
    Signal, SplitCaptureCommand, SplitPointerCaptureAdapter, SplitPointerCaptureConfig,
    SplitPointerDispatch, SplitPointerIgnoredReason, SplitPointerLifecyclePhase,
};

#[derive(Debug)]
struct Registration {
    listeners: ListenerToken,
    observer: ObserverToken,
}

/// A split mounted on a host.
#[derive(Debug)]
pub struct SplitPaneMount<H: SplitPaneHost> {
    host: H,
    adapter: SplitPointerCaptureAdapter,
    registration: Option<Registration>,
    span: Span,
}

impl<H: SplitPaneHost> SplitPaneMount<H> {
    /// Mount with the default pointer-capture configuration.
    pub fn mount(host: H, config: SplitPaneConfig) -> Result<Self, SplitConfigError> {
        Self::mount_with(host, config, SplitPointerCaptureConfig::default())
    }

    /// Validate `config`, register host listeners, and reclamp the initial
    /// fraction against the current container width.
    pub fn mount_with(
        mut host: H,
        config: SplitPaneConfig,
        capture: SplitPointerCaptureConfig,
    ) -> Result<Self, SplitConfigError> {
        let adapter = SplitPointerCaptureAdapter::new(config, capture)?;
        let span = debug_span!(
            "split_pane.mount",
            min_left = config.min_left,
            min_right = config.min_right
        );
        let registration = {
            let _guard = span.enter();
            let listeners = host.add_window_pointer_listeners();
            let observer = host.observe_resize(SurfaceId::Container);
            debug!(
                target: "splitpane_web::mount",
                listeners = listeners.get(),
                observer = observer.get(),
                "split pane mounted"
            );
            Registration {
                listeners,
                observer,
            }
        };
        let mut mount = Self {
            host,
            adapter,
            registration: Some(registration),
            span,
        };
        mount.container_resized();
        Ok(mount)
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub const fn adapter(&self) -> &SplitPointerCaptureAdapter {
        &self.adapter
    }

    #[must_use]
    pub const fn pane(&self) -> &SplitPane {
        self.adapter.pane()
    }

    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.adapter.fraction()
    }

    /// False once [`Self::dispose`] has run.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.registration.is_some()
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.adapter.pane().is_dragging()
    }

    /// Replace the minimum extents and reclamp against the container width
    /// measured now.
    pub fn set_constraints(&mut self, constraints: SplitConstraints) -> FractionCommit {
        self.adapter.set_constraints(constraints);
        self.container_resized()
    }

    /// Regions for the current container bounds.
    #[must_use]
    pub fn layout(&self) -> SplitLayout {
        self.adapter.pane().layout(self.host.container_bounds())
    }

    #[must_use]
    pub const fn divider_affordance(&self) -> DividerAffordance {
        self.adapter.pane().divider_affordance()
    }

    /// Divider `pointerdown`. Requests capture and, when the host grants it
    /// synchronously, records the acknowledgement.
    pub fn pointer_down(
        &mut self,
        pointer_id: PointerId,
        button: PointerButton,
        position: Point,
    ) -> SplitPointerDispatch {
        let _guard = self.span.enter();
        if let Some(ignored) = self.disposed(
            SplitPointerLifecyclePhase::PointerDown,
            Some(pointer_id),
            Some(position),
        ) {
            return ignored;
        }
        let dispatch = self.adapter.pointer_down(pointer_id, button, position);
        execute(&mut self.host, &mut self.adapter, dispatch.capture_command);
        dispatch
    }

    /// Late capture acknowledgement (`gotpointercapture`).
    pub fn capture_acquired(&mut self, pointer_id: PointerId) -> SplitPointerDispatch {
        let _guard = self.span.enter();
        if let Some(ignored) = self.disposed(
            SplitPointerLifecyclePhase::CaptureAcquired,
            Some(pointer_id),
            None,
        ) {
            return ignored;
        }
        self.adapter.capture_acquired(pointer_id)
    }

    /// Window `pointermove`. Container bounds are measured for every event.
    pub fn pointer_move(&mut self, pointer_id: PointerId, position: Point) -> SplitPointerDispatch {
        let _guard = self.span.enter();
        if let Some(ignored) = self.disposed(
            SplitPointerLifecyclePhase::PointerMove,
            Some(pointer_id),
            Some(position),
        ) {
            return ignored;
        }
        let container = self.host.container_bounds();
        self.adapter.pointer_move(pointer_id, position, container)
    }

    /// Window `pointerup`.
    pub fn pointer_up(
        &mut self,
        pointer_id: PointerId,
        button: PointerButton,
        position: Point,
    ) -> SplitPointerDispatch {
        let _guard = self.span.enter();
        if let Some(ignored) = self.disposed(
            SplitPointerLifecyclePhase::PointerUp,
            Some(pointer_id),
            Some(position),
        ) {
            return ignored;
        }
        let dispatch = self.adapter.pointer_up(pointer_id, button, position);
        execute(&mut self.host, &mut self.adapter, dispatch.capture_command);
        dispatch
    }

    /// `pointercancel`.
    pub fn pointer_cancel(&mut self, pointer_id: Option<PointerId>) -> SplitPointerDispatch {
        let _guard = self.span.enter();
        if let Some(ignored) =
            self.disposed(SplitPointerLifecyclePhase::PointerCancel, pointer_id, None)
        {
            return ignored;
        }
        let dispatch = self.adapter.pointer_cancel(pointer_id);
        execute(&mut self.host, &mut self.adapter, dispatch.capture_command);
        dispatch
    }

    /// `lostpointercapture`.
    pub fn lost_pointer_capture(&mut self, pointer_id: PointerId) -> SplitPointerDispatch {
        let _guard = self.span.enter();
        if let Some(ignored) = self.disposed(
            SplitPointerLifecyclePhase::LostPointerCapture,
            Some(pointer_id),
            None,
        ) {
            return ignored;
        }
        self.adapter.lost_pointer_capture(pointer_id)
    }

    /// Resize observer callback. Reclamps against the measured width.
    pub fn container_resized(&mut self) -> FractionCommit {
        let _guard = self.span.enter();
        let width = self.host.container_bounds().width;
        self.adapter.container_resized(width)
    }

    /// Cancel any active drag and deregister host listeners.
    ///
    /// Returns `true` for the call that actually tore down; later calls (and
    /// the eventual drop) do nothing.
    pub fn dispose(&mut self) -> bool {
        let Some(registration) = self.registration.take() else {
            return false;
        };
        let _guard = self.span.enter();
        let dispatch = self.adapter.teardown();
        execute(&mut self.host, &mut self.adapter, dispatch.capture_command);
        let listeners = registration.listeners.get();
        let observer = registration.observer.get();
        self.host
            .remove_window_pointer_listeners(registration.listeners);
        self.host.unobserve_resize(registration.observer);
        debug!(
            target: "splitpane_web::mount",
            listeners,
            observer,
            canceled_drag = dispatch.transition.is_some(),
            "split pane disposed"
        );
        true
    }

    fn disposed(
        &self,
        phase: SplitPointerLifecyclePhase,
        pointer_id: Option<PointerId>,
        position: Option<Point>,
    ) -> Option<SplitPointerDispatch> {
        (!self.is_mounted()).then(|| {
            SplitPointerDispatch::ignored(
                Signal::new(phase, pointer_id, position),
                SplitPointerIgnoredReason::Disposed,
            )
        })
    }
}

impl<H: SplitPaneHost> Drop for SplitPaneMount<H> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn execute<H: SplitPaneHost>(
    host: &mut H,
    adapter: &mut SplitPointerCaptureAdapter,
    command: Option<SplitCaptureCommand>,
) {
    match command {
        Some(SplitCaptureCommand::Acquire {
            surface,
            pointer_id,
        }) => {
            if host.acquire_pointer_capture(surface, pointer_id) {
                adapter.capture_acquired(pointer_id);
            }
        }
        Some(SplitCaptureCommand::Release {
            surface,
            pointer_id,
        }) => host.release_pointer_capture(surface, pointer_id),
        None => {}
    }
}
