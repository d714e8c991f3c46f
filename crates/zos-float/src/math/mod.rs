//! Core geometry types for floating windows
//!
//! Plain value types: points, sizes, rectangles and the clamp ranges the
//! drag and resize engines work with. No behavior beyond arithmetic.

mod vec2;
mod size;
mod rect;
mod range;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;
pub use range::{ClampRange, ClampRange2D};
