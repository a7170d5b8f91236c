#![forbid(unsafe_code)]

//! Core: geometry and pointer primitives shared by the split layout engine
//! and its host adapters.
//!
//! # Role in splitpane
//! `splitpane-core` owns the vocabulary every other crate speaks: container
//! [`Bounds`](geometry::Bounds), pointer [`Point`](geometry::Point)s, and the
//! pointer identifiers/buttons delivered by a host event source. It performs
//! no I/O and holds no state.

pub mod event;
pub mod geometry;

pub use event::{PointerButton, PointerId, SurfaceId};
pub use geometry::{Bounds, Point};
