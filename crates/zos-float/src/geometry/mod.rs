//! Window geometry snapshots
//!
//! A window's placement is expressed as offsets from the four edges of its
//! bounding container. [`WindowGeometry`] is the snapshot taken once at the
//! start of a gesture; every frame of that gesture is computed from it.

mod normalize;

use serde::{Deserialize, Serialize};

use crate::math::{ClampRange, ClampRange2D, Rect, Size, Vec2};

pub use normalize::{normalize, Normalized};

/// Offsets of a window's edges from its container's edges
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeOffsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeOffsets {
    /// Create offsets from explicit values
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Offsets of `window` relative to `container`, both in viewport space
    pub fn between(window: &Rect, container: &Rect) -> Self {
        Self::from_top_left(
            window.x - container.x,
            window.y - container.y,
            window.size(),
            container,
        )
    }

    /// Offsets for a window of `size` whose top-left sits at `(left, top)`
    /// inside `container`; right and bottom are the complements.
    pub fn from_top_left(left: f32, top: f32, size: Size, container: &Rect) -> Self {
        Self {
            left,
            top,
            right: container.width - (left + size.width),
            bottom: container.height - (top + size.height),
        }
    }
}

/// Placement representation a window is in before normalization
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Placement {
    /// Positioned by a centering transform (freshly opened windows)
    CenterAnchored,
    /// Positioned by explicit edge offsets
    EdgeAnchored(EdgeOffsets),
}

impl Placement {
    /// Classify a measured window
    pub fn detect(center_anchored: bool, window: &Rect, container: &Rect) -> Self {
        if center_anchored {
            Placement::CenterAnchored
        } else {
            Placement::EdgeAnchored(EdgeOffsets::between(window, container))
        }
    }

    /// Whether a centering transform is active
    #[inline]
    pub fn is_center_anchored(&self) -> bool {
        matches!(self, Placement::CenterAnchored)
    }
}

/// Pointer-coordinate limits derived from the container at gesture start
///
/// Each range is the span of viewport coordinates the pointer may reach
/// before the moved edge would cross the container edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MouseLimits {
    /// Horizontal limit for `e`/`w` handles
    pub limit_x: ClampRange,
    /// Vertical limit for `n`/`s` handles
    pub limit_y: ClampRange,
    /// Limits for corner handles
    pub limit_xy: ClampRange2D,
}

impl MouseLimits {
    /// Derive limits from a container rectangle
    pub fn from_container(container: &Rect, edge_margin: f32, corner_margin: f32) -> Self {
        let inset = |margin: f32| {
            ClampRange2D::new(
                ClampRange::new(container.x + margin, container.right() - margin),
                ClampRange::new(container.y + margin, container.bottom() - margin),
            )
        };
        let edges = inset(edge_margin);

        Self {
            limit_x: edges.x,
            limit_y: edges.y,
            limit_xy: inset(corner_margin),
        }
    }
}

/// Snapshot of a window's geometry at gesture start
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowGeometry {
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub mouse_limits: MouseLimits,
}

impl WindowGeometry {
    /// Build a snapshot from a size and edge offsets
    pub fn new(size: Size, offsets: EdgeOffsets, mouse_limits: MouseLimits) -> Self {
        Self {
            width: size.width,
            height: size.height,
            left: offsets.left,
            top: offsets.top,
            right: offsets.right,
            bottom: offsets.bottom,
            mouse_limits,
        }
    }

    /// Window size
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Edge offsets
    #[inline]
    pub fn offsets(&self) -> EdgeOffsets {
        EdgeOffsets::new(self.left, self.top, self.right, self.bottom)
    }

    /// Top-left corner in viewport space, given the container it was measured in
    #[inline]
    pub fn top_left_in(&self, container: &Rect) -> Vec2 {
        Vec2::new(container.x + self.left, container.y + self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_between_rects() {
        let container = Rect::new(0.0, 0.0, 800.0, 600.0);
        let window = Rect::new(100.0, 100.0, 200.0, 150.0);
        let offsets = EdgeOffsets::between(&window, &container);
        assert_eq!(offsets, EdgeOffsets::new(100.0, 100.0, 500.0, 350.0));
    }

    #[test]
    fn test_offsets_in_translated_container() {
        let container = Rect::new(50.0, 20.0, 800.0, 600.0);
        let window = Rect::new(150.0, 120.0, 200.0, 150.0);
        let offsets = EdgeOffsets::between(&window, &container);
        assert_eq!(offsets, EdgeOffsets::new(100.0, 100.0, 500.0, 350.0));
    }

    #[test]
    fn test_mouse_limits_from_container() {
        let container = Rect::new(10.0, 20.0, 800.0, 600.0);
        let limits = MouseLimits::from_container(&container, 5.0, 9.0);

        assert_eq!(limits.limit_x, ClampRange::new(15.0, 805.0));
        assert_eq!(limits.limit_y, ClampRange::new(25.0, 615.0));
        assert_eq!(limits.limit_xy.x, ClampRange::new(19.0, 801.0));
        assert_eq!(limits.limit_xy.y, ClampRange::new(29.0, 611.0));
    }

    #[test]
    fn test_detect_placement() {
        let container = Rect::new(0.0, 0.0, 800.0, 600.0);
        let window = Rect::new(300.0, 225.0, 200.0, 150.0);

        assert!(Placement::detect(true, &window, &container).is_center_anchored());
        assert_eq!(
            Placement::detect(false, &window, &container),
            Placement::EdgeAnchored(EdgeOffsets::new(300.0, 225.0, 300.0, 225.0))
        );
    }

    #[test]
    fn test_geometry_top_left_in_container() {
        let container = Rect::new(50.0, 20.0, 800.0, 600.0);
        let geometry = WindowGeometry::new(
            Size::new(200.0, 150.0),
            EdgeOffsets::new(100.0, 100.0, 500.0, 350.0),
            MouseLimits::default(),
        );
        assert_eq!(geometry.top_left_in(&container), Vec2::new(150.0, 120.0));
        assert_eq!(geometry.size(), Size::new(200.0, 150.0));
    }
}
