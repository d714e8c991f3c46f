//! Resize engine: edge and corner resizes with a minimum-size floor
//!
//! A resize works in three steps:
//! 1. total pointer displacement since the gesture started,
//! 2. clamp of that displacement per axis, using the pointer limits captured
//!    at gesture start,
//! 3. new size from the clamped displacement, floored at the minimum size,
//!    with only the dragged edges moving.
//!
//! The edge opposite the dragged handle is held numerically fixed: each
//! moved offset is `initial_offset - (new_size - initial_size)`.

use crate::geometry::{EdgeOffsets, WindowGeometry};
use crate::input::GeometryCommand;
use crate::math::{ClampRange, Size, Vec2};
use crate::window::{Direction, HorizontalEdge, VerticalEdge};

/// Size and edge offsets produced by a resize frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResizeOutcome {
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl ResizeOutcome {
    /// Outcome that leaves the window unchanged
    fn unchanged(initial: &WindowGeometry) -> Self {
        Self {
            width: initial.width,
            height: initial.height,
            left: initial.left,
            top: initial.top,
            right: initial.right,
            bottom: initial.bottom,
        }
    }

    /// Geometry command for this outcome
    pub fn into_command(self) -> GeometryCommand {
        GeometryCommand::new(
            Size::new(self.width, self.height),
            EdgeOffsets::new(self.left, self.top, self.right, self.bottom),
        )
    }
}

/// Allowed pointer displacement per axis for one handle
///
/// `None` means the axis is not moved by the handle and is left unclamped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplacementLimits {
    pub x: Option<ClampRange>,
    pub y: Option<ClampRange>,
}

/// Displacement limits for a handle, from the gesture's starting snapshot
pub fn displacement_limits(
    initial: &WindowGeometry,
    direction: Direction,
    initial_pointer: Vec2,
    min_size: Size,
) -> DisplacementLimits {
    let limits = &initial.mouse_limits;
    let (limit_x, limit_y) = if direction.is_corner() {
        (limits.limit_xy.x, limits.limit_xy.y)
    } else {
        (limits.limit_x, limits.limit_y)
    };

    let x = direction.horizontal().map(|edge| {
        let shrink = min_size.width - initial.width;
        match edge {
            HorizontalEdge::East => ClampRange::new(shrink, limit_x.max - initial_pointer.x),
            HorizontalEdge::West => ClampRange::new(limit_x.min - initial_pointer.x, -shrink),
        }
    });

    let y = direction.vertical().map(|edge| {
        let shrink = min_size.height - initial.height;
        match edge {
            VerticalEdge::South => ClampRange::new(shrink, limit_y.max - initial_pointer.y),
            VerticalEdge::North => ClampRange::new(limit_y.min - initial_pointer.y, -shrink),
        }
    });

    DisplacementLimits { x, y }
}

/// Compute a resize frame
pub fn compute_resize(
    initial: &WindowGeometry,
    direction: Direction,
    initial_pointer: Vec2,
    current_pointer: Vec2,
    min_size: Size,
) -> ResizeOutcome {
    let raw = current_pointer.displacement_from(initial_pointer);
    let limits = displacement_limits(initial, direction, initial_pointer, min_size);
    let dx = limits.x.map_or(raw.x, |range| range.clamp(raw.x));
    let dy = limits.y.map_or(raw.y, |range| range.clamp(raw.y));

    let mut out = ResizeOutcome::unchanged(initial);

    match direction.horizontal() {
        Some(HorizontalEdge::East) => {
            out.width = min_size.width.max(initial.width + dx);
            out.right = initial.right - (out.width - initial.width);
        }
        Some(HorizontalEdge::West) => {
            out.width = min_size.width.max(initial.width - dx);
            out.left = initial.left - (out.width - initial.width);
        }
        None => {}
    }

    match direction.vertical() {
        Some(VerticalEdge::South) => {
            out.height = min_size.height.max(initial.height + dy);
            out.bottom = initial.bottom - (out.height - initial.height);
        }
        Some(VerticalEdge::North) => {
            out.height = min_size.height.max(initial.height - dy);
            out.top = initial.top - (out.height - initial.height);
        }
        None => {}
    }

    out
}
