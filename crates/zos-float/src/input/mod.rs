//! Input state for gestures
//!
//! Provides the session snapshot, pointer event types, move coalescing, the
//! commands handed to the host and the controller driving all of them.

mod session;
mod pointer;
mod coalesce;
mod command;
mod controller;

pub use session::{GestureKind, Session};
pub use pointer::{HandleTarget, PointerEvent, PointerKind};
pub use coalesce::MoveCoalescer;
pub use command::{GeometryCommand, InputResult};
pub use controller::InteractionController;
