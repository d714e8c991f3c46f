//! Drag and resize computation
//!
//! Both engines are pure functions of the gesture's starting snapshot and
//! the total pointer displacement since the gesture began. Nothing is
//! accumulated between frames, so replaying a pointer position always yields
//! the same geometry.

mod drag;
mod resize;

pub use drag::{compute_drag_position, drag_bounds, DragOutcome};
pub use resize::{compute_resize, displacement_limits, DisplacementLimits, ResizeOutcome};
