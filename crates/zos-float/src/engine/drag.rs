//! Drag engine: container-clamped window moves

use crate::geometry::{EdgeOffsets, WindowGeometry};
use crate::input::GeometryCommand;
use crate::math::{ClampRange, ClampRange2D, Rect, Size, Vec2};

/// New top-left of a dragged window, relative to its container
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragOutcome {
    pub left: f32,
    pub top: f32,
}

impl DragOutcome {
    /// Full geometry command for a window of `size` at this position
    pub fn into_command(self, size: Size, container: &Rect) -> GeometryCommand {
        GeometryCommand::new(
            size,
            EdgeOffsets::from_top_left(self.left, self.top, size, container),
        )
    }
}

/// Viewport-space range for the top-left corner of a window of `window_size`
///
/// When the window is larger than the container the range is inverted and
/// the top-left bound wins.
pub fn drag_bounds(container: &Rect, window_size: Size) -> ClampRange2D {
    ClampRange2D::new(
        ClampRange::new(container.x, container.right() - window_size.width),
        ClampRange::new(container.y, container.bottom() - window_size.height),
    )
}

/// Compute the clamped position of a dragged window
pub fn compute_drag_position(
    initial: &WindowGeometry,
    initial_pointer: Vec2,
    current_pointer: Vec2,
    container: Rect,
    window_size: Size,
) -> DragOutcome {
    let displacement = current_pointer.displacement_from(initial_pointer);
    let candidate = initial.top_left_in(&container) + displacement;

    let bounds = drag_bounds(&container, window_size);
    let x = bounds.x.clamp(candidate.x);
    let y = bounds.y.clamp(candidate.y);

    DragOutcome {
        left: x - container.x,
        top: y - container.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MouseLimits;

    fn container() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    fn initial() -> WindowGeometry {
        WindowGeometry::new(
            Size::new(200.0, 150.0),
            EdgeOffsets::new(100.0, 100.0, 500.0, 350.0),
            MouseLimits::from_container(&container(), 5.0, 5.0),
        )
    }

    #[test]
    fn test_drag_without_clamp() {
        let start = Vec2::new(150.0, 110.0);
        let out = compute_drag_position(
            &initial(),
            start,
            start + Vec2::new(50.0, 20.0),
            container(),
            Size::new(200.0, 150.0),
        );
        assert!((out.left - 150.0).abs() < 0.001);
        assert!((out.top - 120.0).abs() < 0.001);
    }

    #[test]
    fn test_drag_clamps_to_bottom_right() {
        let start = Vec2::new(150.0, 110.0);
        let out = compute_drag_position(
            &initial(),
            start,
            Vec2::new(5000.0, 5000.0),
            container(),
            Size::new(200.0, 150.0),
        );
        assert!((out.left - 600.0).abs() < 0.001);
        assert!((out.top - 450.0).abs() < 0.001);
    }

    #[test]
    fn test_drag_clamps_to_top_left() {
        let start = Vec2::new(150.0, 110.0);
        let out = compute_drag_position(
            &initial(),
            start,
            Vec2::new(-900.0, -900.0),
            container(),
            Size::new(200.0, 150.0),
        );
        assert!((out.left).abs() < 0.001);
        assert!((out.top).abs() < 0.001);
    }

    #[test]
    fn test_drag_in_offset_container() {
        let container = Rect::new(40.0, 60.0, 800.0, 600.0);
        let initial = WindowGeometry::new(
            Size::new(200.0, 150.0),
            EdgeOffsets::new(100.0, 100.0, 500.0, 350.0),
            MouseLimits::from_container(&container, 5.0, 5.0),
        );
        let start = Vec2::new(190.0, 170.0);
        let out = compute_drag_position(
            &initial,
            start,
            start + Vec2::new(-30.0, 45.0),
            container,
            initial.size(),
        );
        assert!((out.left - 70.0).abs() < 0.001);
        assert!((out.top - 145.0).abs() < 0.001);
    }

    #[test]
    fn test_window_larger_than_container_pins_top_left() {
        let small = Rect::new(0.0, 0.0, 150.0, 100.0);
        let start = Vec2::new(10.0, 10.0);
        let out = compute_drag_position(
            &initial(),
            start,
            Vec2::new(60.0, 80.0),
            small,
            Size::new(200.0, 150.0),
        );
        assert!((out.left).abs() < 0.001);
        assert!((out.top).abs() < 0.001);
    }

    #[test]
    fn test_outcome_command_keeps_offsets_complementary() {
        let cmd = DragOutcome {
            left: 150.0,
            top: 120.0,
        }
        .into_command(Size::new(200.0, 150.0), &container());
        assert!((cmd.right - 450.0).abs() < 0.001);
        assert!((cmd.bottom - 330.0).abs() < 0.001);
        assert!((cmd.width - 200.0).abs() < 0.001);
    }
}
