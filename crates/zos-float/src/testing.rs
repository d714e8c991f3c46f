//! In-memory surface for tests and headless hosts.
//!
//! Applying a command moves the stored window rectangle the way a browser
//! would after the styles are written, so later measurements see the result.

use std::collections::HashMap;

use crate::input::{GeometryCommand, GestureKind};
use crate::math::{Rect, Size, Vec2};
use crate::surface::{GeometrySink, ViewportQuery};
use crate::window::{ContainerId, WindowId};

/// A window as the memory surface lays it out.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryWindow {
    /// Bounding rectangle in viewport coordinates
    pub rect: Rect,
    /// Container the window is laid out in
    pub container: ContainerId,
    /// Whether a centering transform is active
    pub center_anchored: bool,
    /// Gesture the host is currently showing feedback for
    pub gesture: Option<GestureKind>,
}

/// HashMap-backed surface.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    windows: HashMap<WindowId, MemoryWindow>,
    containers: HashMap<ContainerId, Rect>,
    applied: Vec<(WindowId, GeometryCommand)>,
    transitions: Vec<(WindowId, Option<GestureKind>)>,
    ranks: HashMap<WindowId, u32>,
}

impl MemorySurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a container.
    pub fn add_container(&mut self, id: ContainerId, rect: Rect) {
        self.containers.insert(id, rect);
    }

    /// Change a container's rectangle (e.g. the page was resized).
    pub fn set_container_rect(&mut self, id: ContainerId, rect: Rect) {
        self.containers.insert(id, rect);
    }

    /// Lay out a window centered in its container, as hosts do on open.
    pub fn add_centered_window(&mut self, id: WindowId, container: ContainerId, width: f32, height: f32) {
        let center = self
            .containers
            .get(&container)
            .map(|c| c.center())
            .unwrap_or(Vec2::ZERO);
        let size = Size::new(width, height);
        let rect = Rect::from_pos_size(center - Vec2::new(width / 2.0, height / 2.0), size);
        self.windows.insert(
            id,
            MemoryWindow {
                rect,
                container,
                center_anchored: true,
                gesture: None,
            },
        );
    }

    /// Lay out a window at explicit edge offsets from its container origin.
    pub fn add_window_at(&mut self, id: WindowId, container: ContainerId, rect_in_container: Rect) {
        let origin = self
            .containers
            .get(&container)
            .map(|c| c.position())
            .unwrap_or(Vec2::ZERO);
        let rect = Rect::from_pos_size(
            origin + rect_in_container.position(),
            rect_in_container.size(),
        );
        self.windows.insert(
            id,
            MemoryWindow {
                rect,
                container,
                center_anchored: false,
                gesture: None,
            },
        );
    }

    /// Move a window to another container and center it there.
    pub fn recenter_in(&mut self, id: WindowId, container: ContainerId) {
        if let Some(size) = self.windows.get(&id).map(|w| w.rect.size()) {
            self.add_centered_window(id, container, size.width, size.height);
        }
    }

    /// Laid-out state of a window.
    pub fn window(&self, id: WindowId) -> Option<&MemoryWindow> {
        self.windows.get(&id)
    }

    /// Every command applied so far, oldest first.
    pub fn applied(&self) -> &[(WindowId, GeometryCommand)] {
        &self.applied
    }

    /// Every session transition reported so far, oldest first.
    pub fn transitions(&self) -> &[(WindowId, Option<GestureKind>)] {
        &self.transitions
    }

    /// Last stacking rank reported for a window.
    pub fn rank(&self, id: WindowId) -> Option<u32> {
        self.ranks.get(&id).copied()
    }
}

impl ViewportQuery for MemorySurface {
    fn window_rect(&self, window: WindowId) -> Option<Rect> {
        self.windows.get(&window).map(|w| w.rect)
    }

    fn container_rect(&self, container: ContainerId) -> Option<Rect> {
        self.containers.get(&container).copied()
    }

    fn is_center_anchored(&self, window: WindowId) -> bool {
        self.windows
            .get(&window)
            .map(|w| w.center_anchored)
            .unwrap_or(false)
    }
}

impl GeometrySink for MemorySurface {
    fn apply(&mut self, window: WindowId, command: &GeometryCommand) {
        self.applied.push((window, *command));

        let Some(entry) = self.windows.get_mut(&window) else {
            return;
        };
        let origin = self
            .containers
            .get(&entry.container)
            .map(|c| c.position())
            .unwrap_or(Vec2::ZERO);

        if command.clear_anchor {
            entry.center_anchored = false;
        }
        entry.rect = Rect::from_pos_size(
            origin + Vec2::new(command.left, command.top),
            Size::new(command.width, command.height),
        );
    }

    fn session_changed(&mut self, window: WindowId, gesture: Option<GestureKind>) {
        self.transitions.push((window, gesture));
        if let Some(entry) = self.windows.get_mut(&window) {
            entry.gesture = gesture;
        }
    }

    fn recenter(&mut self, window: WindowId, container: ContainerId) {
        self.recenter_in(window, container);
    }

    fn rank_changed(&mut self, window: WindowId, rank: u32) {
        self.ranks.insert(window, rank);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_window_layout() {
        let mut surface = MemorySurface::new();
        surface.add_container(1, Rect::new(0.0, 0.0, 800.0, 600.0));
        surface.add_centered_window(10, 1, 200.0, 150.0);

        assert_eq!(surface.window_rect(10), Some(Rect::new(300.0, 225.0, 200.0, 150.0)));
        assert!(surface.is_center_anchored(10));
    }

    #[test]
    fn test_apply_moves_window_and_clears_anchor() {
        let mut surface = MemorySurface::new();
        surface.add_container(1, Rect::new(20.0, 10.0, 800.0, 600.0));
        surface.add_centered_window(10, 1, 200.0, 150.0);

        let mut cmd = GeometryCommand {
            width: 250.0,
            height: 150.0,
            top: 40.0,
            right: 450.0,
            bottom: 410.0,
            left: 100.0,
            clear_anchor: false,
        };
        surface.apply(10, &cmd);
        assert!(surface.is_center_anchored(10));

        cmd.clear_anchor = true;
        surface.apply(10, &cmd);
        assert!(!surface.is_center_anchored(10));
        assert_eq!(surface.window_rect(10), Some(Rect::new(120.0, 50.0, 250.0, 150.0)));
        assert_eq!(surface.applied().len(), 2);
    }

    #[test]
    fn test_unknown_window_is_unmeasured() {
        let surface = MemorySurface::new();
        assert_eq!(surface.window_rect(1), None);
        assert_eq!(surface.container_rect(1), None);
        assert!(!surface.is_center_anchored(1));
    }
}
