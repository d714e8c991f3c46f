//! Window-side state: handle directions, per-window handles and stacking
//!
//! Windows are created and rendered by the host; this module only tracks
//! what the interaction engine needs to know about them.

mod direction;
mod handle;
mod stack;

pub use direction::{Direction, HorizontalEdge, VerticalEdge};
pub use handle::{ContainerId, Features, WindowHandle, WindowOptions};
pub use stack::StackOrder;

/// Unique window identifier
pub type WindowId = u64;
