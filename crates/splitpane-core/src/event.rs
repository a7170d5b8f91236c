#![forbid(unsafe_code)]

//! Pointer vocabulary delivered by host event sources.

use std::fmt;

/// Host-assigned pointer identifier (DOM `PointerEvent.pointerId`).
///
/// Any value is accepted; hosts differ on whether `0` is used for the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PointerId(u32);

impl PointerId {
    /// Wrap a raw host pointer identifier.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for PointerId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pointer button reported with down/up notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code.
    ///
    /// Returns `None` for auxiliary buttons (back/forward) and unknown codes.
    #[must_use]
    pub const fn from_dom_button(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Host surfaces owned by one split primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SurfaceId {
    /// Bounding box hosting both panes and the divider.
    Container,
    /// The draggable divider affordance.
    Divider,
}
