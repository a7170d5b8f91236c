#![forbid(unsafe_code)]

//! Host collaborator contract.
//!
//! A host owns the platform side of a mounted split: the divider and container
//! surfaces, window-scoped pointer listeners, and the container resize
//! observer. Registration handles are move-only so each one can be handed back
//! exactly once.

use splitpane_core::{Bounds, PointerId, SurfaceId};

/// Handle for a window-scoped pointer move/up listener registration.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ListenerToken(u64);

impl ListenerToken {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// Handle for a container resize observation.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ObserverToken(u64);

impl ObserverToken {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// Platform operations a mounted split needs from its host.
pub trait SplitPaneHost {
    /// Route all events for `pointer_id` to `surface`.
    ///
    /// Returns `false` when the platform refused (for example, the pointer is
    /// no longer active).
    fn acquire_pointer_capture(&mut self, surface: SurfaceId, pointer_id: PointerId) -> bool;

    fn release_pointer_capture(&mut self, surface: SurfaceId, pointer_id: PointerId);

    /// Current container box in the same coordinate space as pointer positions.
    fn container_bounds(&self) -> Bounds;

    fn add_window_pointer_listeners(&mut self) -> ListenerToken;

    fn remove_window_pointer_listeners(&mut self, token: ListenerToken);

    fn observe_resize(&mut self, surface: SurfaceId) -> ObserverToken;

    fn unobserve_resize(&mut self, token: ObserverToken);
}

impl<H: SplitPaneHost + ?Sized> SplitPaneHost for &mut H {
    fn acquire_pointer_capture(&mut self, surface: SurfaceId, pointer_id: PointerId) -> bool {
        (**self).acquire_pointer_capture(surface, pointer_id)
    }

    fn release_pointer_capture(&mut self, surface: SurfaceId, pointer_id: PointerId) {
        (**self).release_pointer_capture(surface, pointer_id);
    }

    fn container_bounds(&self) -> Bounds {
        (**self).container_bounds()
    }

    fn add_window_pointer_listeners(&mut self) -> ListenerToken {
        (**self).add_window_pointer_listeners()
    }

    fn remove_window_pointer_listeners(&mut self, token: ListenerToken) {
        (**self).remove_window_pointer_listeners(token);
    }

    fn observe_resize(&mut self, surface: SurfaceId) -> ObserverToken {
        (**self).observe_resize(surface)
    }

    fn unobserve_resize(&mut self, token: ObserverToken) {
        (**self).unobserve_resize(token);
    }
}
