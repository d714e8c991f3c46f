//! Coordinate normalizer
//!
//! Windows may be positioned by a centering transform or by edge offsets.
//! All gesture math works in edge offsets, so the first gesture on a
//! center-anchored window converts it. The host must drop the transform and
//! apply the derived offsets in the same tick or the window visibly jumps.

use crate::config::EngineConfig;
use crate::math::{Rect, Size, Vec2};
use super::{EdgeOffsets, MouseLimits, Placement, WindowGeometry};

/// Result of normalizing a measured window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalized {
    /// Edge-offset snapshot of the window
    pub geometry: WindowGeometry,
    /// Always [`Placement::EdgeAnchored`]
    pub placement: Placement,
    /// The window was center-anchored and must be re-anchored by the host
    pub reanchor: bool,
}

/// Convert a measured window into edge-offset form
///
/// A window that was never laid out (empty rectangle) degrades to a
/// zero-size window at the container origin; the first resize frame lifts it
/// back to the minimum size.
pub fn normalize(
    placement: Placement,
    window: Rect,
    container: Rect,
    config: &EngineConfig,
) -> Normalized {
    let mouse_limits =
        MouseLimits::from_container(&container, config.edge_margin, config.corner_margin);

    let (size, offsets) = if window.is_empty() {
        (Size::ZERO, EdgeOffsets::from_top_left(0.0, 0.0, Size::ZERO, &container))
    } else {
        let size = window.size();
        let offsets = match placement {
            Placement::CenterAnchored => {
                let center = window.center();
                let top_left = Vec2::new(
                    center.x - window.width / 2.0 - container.x,
                    center.y - window.height / 2.0 - container.y,
                );
                EdgeOffsets::from_top_left(top_left.x, top_left.y, size, &container)
            }
            Placement::EdgeAnchored(offsets) => offsets,
        };
        (size, offsets)
    };

    Normalized {
        geometry: WindowGeometry::new(size, offsets, mouse_limits),
        placement: Placement::EdgeAnchored(offsets),
        reanchor: placement.is_center_anchored(),
    }
}
