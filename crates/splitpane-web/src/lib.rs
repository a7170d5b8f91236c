#![forbid(unsafe_code)]

//! `splitpane-web` connects a [`splitpane_layout::SplitPane`] to an
//! event-driven host such as a browser page.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment pushes pointer and resize
//!   signals; this crate never touches a platform API directly.
//! - **Explicit capture**: pointer capture is requested and released through
//!   commands the host executes, never implicitly.
//! - **Scoped registration**: window listeners and the resize observer live
//!   exactly as long as a [`SplitPaneMount`].
//!
//! This crate intentionally does not bind to `wasm-bindgen`; a DOM host
//! implements [`SplitPaneHost`] on top of `web-sys` handles.

pub mod host;
pub mod mount;
pub mod pointer_capture;

pub use host::{ListenerToken, ObserverToken, SplitPaneHost};
pub use mount::SplitPaneMount;
pub use pointer_capture::{
    SplitCaptureCommand, SplitPointerCaptureAdapter, SplitPointerCaptureConfig,
    SplitPointerDispatch, SplitPointerIgnoredReason, SplitPointerLifecyclePhase,
    SplitPointerLogEntry, SplitPointerLogOutcome,
};
