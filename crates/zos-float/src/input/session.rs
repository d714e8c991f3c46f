//! Gesture session state

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::{compute_drag_position, compute_resize};
use crate::geometry::WindowGeometry;
use crate::math::{Rect, Size, Vec2};
use crate::window::{Direction, WindowId};
use super::GeometryCommand;

/// Kind of gesture a session drives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    /// Moving the window by its drag area
    Drag,
    /// Resizing the window from an edge or corner
    Resize(Direction),
}

impl GestureKind {
    /// Resize direction, if this is a resize
    #[inline]
    pub fn direction(self) -> Option<Direction> {
        match self {
            GestureKind::Resize(direction) => Some(direction),
            GestureKind::Drag => None,
        }
    }

    /// Short name used in logs and messages
    pub fn name(self) -> &'static str {
        match self {
            GestureKind::Drag => "drag",
            GestureKind::Resize(_) => "resize",
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One gesture between pointer-down and pointer-up
///
/// Everything a frame needs is captured here at pointer-down and never
/// re-measured, so a gesture stays self-consistent even if the container
/// changes under it.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    /// Window being manipulated
    pub window_id: WindowId,
    /// What the gesture does
    pub gesture: GestureKind,
    /// Window geometry at gesture start
    pub initial_geometry: WindowGeometry,
    /// Pointer position at gesture start (viewport coords)
    pub initial_pointer: Vec2,
    /// Container rectangle at gesture start (viewport coords)
    pub container: Rect,
    /// Minimum size in effect for this gesture
    pub min_size: Size,
    /// Last geometry handed to the host
    pub last_applied: Option<GeometryCommand>,
}

impl Session {
    /// Check if this is a drag session
    #[inline]
    pub fn is_drag(&self) -> bool {
        matches!(self.gesture, GestureKind::Drag)
    }

    /// Check if this is a resize session
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self.gesture, GestureKind::Resize(_))
    }

    /// Geometry for the pointer at `pointer`
    pub fn compute(&self, pointer: Vec2) -> GeometryCommand {
        match self.gesture {
            GestureKind::Drag => {
                let snapshot = self.initial_geometry.size();
                // Unlaid-out windows take the minimum size on their first frame.
                let size = if snapshot.is_empty() {
                    snapshot.at_least(self.min_size)
                } else {
                    snapshot
                };
                compute_drag_position(
                    &self.initial_geometry,
                    self.initial_pointer,
                    pointer,
                    self.container,
                    size,
                )
                .into_command(size, &self.container)
            }
            GestureKind::Resize(direction) => compute_resize(
                &self.initial_geometry,
                direction,
                self.initial_pointer,
                pointer,
                self.min_size,
            )
            .into_command(),
        }
    }

    /// Geometry the window currently has: the last applied frame, or the
    /// starting snapshot if no frame was applied yet
    pub fn current_geometry(&self) -> GeometryCommand {
        self.last_applied
            .unwrap_or_else(|| GeometryCommand::from_geometry(&self.initial_geometry))
    }
}
