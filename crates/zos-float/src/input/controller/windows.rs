//! Window registry, handle binding and stacking

use tracing::{debug, warn};

use crate::error::RegistryError;
use crate::math::Size;
use crate::surface::Surface;
use crate::window::{ContainerId, StackOrder, WindowHandle, WindowId, WindowOptions};
use super::InteractionController;

impl<S: Surface> InteractionController<S> {
    /// Register a window; it opens on top of the stack
    pub fn try_open_window(
        &mut self,
        id: WindowId,
        container: ContainerId,
        options: WindowOptions,
    ) -> Result<u32, RegistryError> {
        if self.windows.contains_key(&id) {
            return Err(RegistryError::AlreadyOpen(id));
        }
        let rank = self.stack.push(id).ok_or(RegistryError::RankOverflow(id))?;
        self.windows.insert(id, WindowHandle::new(id, container, options));
        self.surface.rank_changed(id, rank);
        debug!(window = id, container, rank, "window opened");
        Ok(rank)
    }

    /// Register a window; returns `false` (and logs) if it cannot be opened
    pub fn open_window(&mut self, id: WindowId, container: ContainerId, options: WindowOptions) -> bool {
        match self.try_open_window(id, container, options) {
            Ok(_) => true,
            Err(err) => {
                warn!(window = id, error = %err, "window not opened");
                false
            }
        }
    }

    /// Forget a window
    ///
    /// A gesture in progress on it is cancelled without an end notification
    /// and the windows above it move down one rank.
    pub fn close_window(&mut self, id: WindowId) -> bool {
        if self.windows.remove(&id).is_none() {
            warn!(window = id, error = %RegistryError::UnknownWindow(id), "window not closed");
            return false;
        }
        self.cancel_session_for(id);
        if let Some(removed) = self.stack.remove(id) {
            self.publish_ranks_from(removed);
        }
        debug!(window = id, "window closed");
        true
    }

    /// Forget every window; returns how many were closed
    pub fn close_all(&mut self) -> usize {
        self.cancel_session();
        let count = self.windows.len();
        self.windows.clear();
        self.stack = StackOrder::new(self.config.base_rank);
        count
    }

    /// Move a window to another container
    ///
    /// Cancels a gesture in progress on it; the host re-centers the window
    /// in its new container.
    pub fn reassign_container(&mut self, id: WindowId, container: ContainerId) -> bool {
        let Some(handle) = self.windows.get_mut(&id) else {
            warn!(window = id, error = %RegistryError::UnknownWindow(id), "container not reassigned");
            return false;
        };
        handle.container = container;
        self.cancel_session_for(id);
        self.surface.recenter(id, container);
        debug!(window = id, container, "window reassigned");
        true
    }

    /// Bind the drag area
    pub fn bind_drag(&mut self, id: WindowId) -> bool {
        self.set_drag(id, true)
    }

    /// Unbind the drag area, cancelling a drag in progress
    pub fn unbind_drag(&mut self, id: WindowId) -> bool {
        self.set_drag(id, false)
    }

    /// Bind the resize handles
    pub fn bind_resize(&mut self, id: WindowId) -> bool {
        self.set_resize(id, true)
    }

    /// Unbind the resize handles, cancelling a resize in progress
    pub fn unbind_resize(&mut self, id: WindowId) -> bool {
        self.set_resize(id, false)
    }

    fn set_drag(&mut self, id: WindowId, bound: bool) -> bool {
        let Some(handle) = self.windows.get_mut(&id) else {
            return false;
        };
        handle.features.drag = bound;
        if !bound && self.session.as_ref().is_some_and(|s| s.window_id == id && s.is_drag()) {
            self.cancel_session();
        }
        true
    }

    fn set_resize(&mut self, id: WindowId, bound: bool) -> bool {
        let Some(handle) = self.windows.get_mut(&id) else {
            return false;
        };
        handle.features.resize = bound;
        if !bound && self.session.as_ref().is_some_and(|s| s.window_id == id && s.is_resize()) {
            self.cancel_session();
        }
        true
    }

    /// Override the minimum size of one window
    ///
    /// Takes effect from the next gesture.
    pub fn set_min_size(&mut self, id: WindowId, min_size: Option<Size>) -> bool {
        match self.windows.get_mut(&id) {
            Some(handle) => {
                handle.min_size = min_size;
                true
            }
            None => false,
        }
    }

    /// Promote a window to the top of the stack
    ///
    /// Returns `false` if it is unknown or already on top.
    pub fn bring_to_front(&mut self, id: WindowId) -> bool {
        let Some(previous) = self.stack.rank(id) else {
            return false;
        };
        let raised = self.stack.bring_to_front(id);
        if raised {
            self.publish_ranks_from(previous);
            debug!(window = id, rank = ?self.stack.rank(id), "window raised");
        }
        raised
    }

    /// Report every rank at or above `from` to the surface
    fn publish_ranks_from(&mut self, from: u32) {
        for id in self.stack.ordered() {
            if let Some(rank) = self.stack.rank(id).filter(|&rank| rank >= from) {
                self.surface.rank_changed(id, rank);
            }
        }
    }

    /// Rank of a window
    #[inline]
    pub fn rank(&self, id: WindowId) -> Option<u32> {
        self.stack.rank(id)
    }

    /// Stacking order
    #[inline]
    pub fn stack(&self) -> &StackOrder {
        &self.stack
    }

    /// Get a registered window
    #[inline]
    pub fn window(&self, id: WindowId) -> Option<&WindowHandle> {
        self.windows.get(&id)
    }

    /// Registered windows, back to front
    pub fn windows(&self) -> Vec<&WindowHandle> {
        self.stack
            .ordered()
            .into_iter()
            .filter_map(|id| self.windows.get(&id))
            .collect()
    }

    /// Number of registered windows
    #[inline]
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Check if a window is registered
    #[inline]
    pub fn has_window(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::EngineConfig;
    use crate::error::RegistryError;
    use crate::input::{GestureKind, InteractionController};
    use crate::math::{Rect, Size, Vec2};
    use crate::testing::MemorySurface;
    use crate::window::{Direction, Features, WindowOptions};

    fn options() -> WindowOptions {
        WindowOptions {
            features: Features::ALL,
            min_size: None,
        }
    }

    fn controller_with(ids: &[u64]) -> InteractionController<MemorySurface> {
        let mut surface = MemorySurface::new();
        surface.add_container(1, Rect::new(0.0, 0.0, 800.0, 600.0));
        surface.add_container(2, Rect::new(0.0, 0.0, 400.0, 400.0));
        let mut controller = InteractionController::new(surface, EngineConfig::default());
        for &id in ids {
            controller.surface_mut().add_centered_window(id, 1, 200.0, 150.0);
            controller.open_window(id, 1, options());
        }
        controller
    }

    #[test]
    fn test_open_assigns_top_rank() {
        let c = controller_with(&[1, 2, 3]);
        assert_eq!(c.rank(1), Some(1000));
        assert_eq!(c.rank(2), Some(1001));
        assert_eq!(c.rank(3), Some(1002));
        assert_eq!(c.window_count(), 3);
    }

    #[test]
    fn test_open_duplicate() {
        let mut c = controller_with(&[1]);
        assert_eq!(c.try_open_window(1, 1, options()), Err(RegistryError::AlreadyOpen(1)));
        assert!(!c.open_window(1, 1, options()));
        assert_eq!(c.window_count(), 1);
    }

    #[test]
    fn test_open_refuses_rank_overflow() {
        let config = EngineConfig {
            base_rank: u32::MAX,
            ..EngineConfig::default()
        };
        let mut c = InteractionController::new(MemorySurface::new(), config);
        assert_eq!(c.try_open_window(1, 1, options()), Ok(u32::MAX));
        assert_eq!(c.try_open_window(2, 1, options()), Err(RegistryError::RankOverflow(2)));
        assert!(!c.open_window(3, 1, options()));
        assert_eq!(c.window_count(), 1);
        assert!(!c.has_window(2));
        assert!(c.stack().is_dense());
    }

    #[test]
    fn test_surface_ranks_follow_stack() {
        let mut c = controller_with(&[1, 2, 3]);
        assert_eq!(c.surface().rank(1), Some(1000));
        assert_eq!(c.surface().rank(3), Some(1002));

        assert!(c.bring_to_front(1));
        for id in [1, 2, 3] {
            assert_eq!(c.surface().rank(id), c.rank(id));
        }

        assert!(c.close_window(2));
        assert_eq!(c.surface().rank(3), Some(1000));
        assert_eq!(c.surface().rank(1), Some(1001));
    }

    #[test]
    fn test_close_compacts_ranks() {
        let mut c = controller_with(&[1, 2, 3]);
        assert!(c.close_window(1));
        assert_eq!(c.rank(2), Some(1000));
        assert_eq!(c.rank(3), Some(1001));
        assert!(c.stack().is_dense());
        assert!(!c.close_window(1));
    }

    #[test]
    fn test_close_cancels_session() {
        let mut c = controller_with(&[1]);
        assert!(c.start_session(1, GestureKind::Drag, Vec2::new(400.0, 240.0)));
        assert!(c.close_window(1));
        assert!(!c.is_active());
        assert_eq!(c.surface().transitions().last(), Some(&(1, None)));
    }

    #[test]
    fn test_close_all() {
        let mut c = controller_with(&[1, 2]);
        assert_eq!(c.close_all(), 2);
        assert_eq!(c.window_count(), 0);
        assert!(c.stack().is_empty());
    }

    #[test]
    fn test_reassign_recenters_and_cancels() {
        let mut c = controller_with(&[1]);
        c.start_session(1, GestureKind::Resize(Direction::Se), Vec2::new(500.0, 375.0));
        assert!(c.reassign_container(1, 2));
        assert!(!c.is_active());
        assert_eq!(c.window(1).unwrap().container, 2);
        assert!(c.surface().window(1).unwrap().center_anchored);
        assert!(!c.reassign_container(9, 2));
    }

    #[test]
    fn test_unbind_cancels_matching_gesture_only() {
        let mut c = controller_with(&[1]);
        c.start_session(1, GestureKind::Drag, Vec2::new(400.0, 240.0));
        c.unbind_resize(1);
        assert!(c.is_active());
        c.unbind_drag(1);
        assert!(!c.is_active());
        assert!(!c.start_session(1, GestureKind::Drag, Vec2::new(400.0, 240.0)));
        c.bind_drag(1);
        assert!(c.start_session(1, GestureKind::Drag, Vec2::new(400.0, 240.0)));
    }

    #[test]
    fn test_per_window_min_size() {
        let mut c = controller_with(&[1]);
        c.set_min_size(1, Some(Size::new(180.0, 120.0)));
        c.start_session(1, GestureKind::Resize(Direction::Se), Vec2::new(500.0, 375.0));
        let cmd = c.compute_frame(Vec2::new(0.0, 0.0)).unwrap();
        assert!((cmd.width - 180.0).abs() < 0.001);
        assert!((cmd.height - 120.0).abs() < 0.001);
    }

    #[test]
    fn test_windows_back_to_front() {
        let mut c = controller_with(&[1, 2, 3]);
        c.bring_to_front(1);
        let ids: Vec<u64> = c.windows().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(!c.bring_to_front(1));
    }
}
