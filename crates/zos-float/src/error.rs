//! Error types for the interaction engine
//!
//! None of these are fatal. Public entry points log them and report a
//! `bool`/`Option`; the `try_*` variants hand them to callers that want the
//! reason.

use crate::input::GestureKind;
use crate::window::{ContainerId, WindowId};

/// Reasons a gesture could not start.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// The window is not registered with the engine.
    #[error("window {0} is not registered")]
    UnknownWindow(WindowId),

    /// Another gesture is still in progress (single pointer device).
    #[error("a session is already active on window {active}, rejected start on window {requested}")]
    AlreadyActive { active: WindowId, requested: WindowId },

    /// The window has no handles bound for this gesture.
    #[error("window {window} has no {gesture} handles bound")]
    NotBound { window: WindowId, gesture: GestureKind },

    /// The pointer-down did not come from the primary button.
    #[error("pointer button {0} is not the primary button")]
    NonPrimaryButton(u8),

    /// The surface could not measure the window.
    #[error("window {0} could not be measured")]
    UnmeasuredWindow(WindowId),

    /// The surface could not measure the window's container.
    #[error("container {0} could not be measured")]
    UnmeasuredContainer(ContainerId),
}

/// Reasons a registry operation was refused.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// A window with this id is already open.
    #[error("window {0} is already open")]
    AlreadyOpen(WindowId),

    /// The window is not registered with the engine.
    #[error("window {0} is not registered")]
    UnknownWindow(WindowId),

    /// Opening the window would need a stacking rank past `u32::MAX`.
    #[error("no stacking rank left for window {0}")]
    RankOverflow(WindowId),
}

/// A resize direction symbol outside `e, w, n, s, se, sw, ne, nw`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown resize direction: {0:?}")]
pub struct ParseDirectionError(pub String);
