//! Gesture lifecycle: start, frames, end and forced cancellation

use tracing::{debug, trace, warn};

use crate::error::SessionError;
use crate::geometry::{normalize, Placement};
use crate::input::{GeometryCommand, GestureKind, Session};
use crate::math::Vec2;
use crate::notify::{GeometryEvent, Notification};
use crate::surface::Surface;
use crate::window::WindowId;
use super::InteractionController;

impl<S: Surface> InteractionController<S> {
    /// Start a drag or resize gesture on a window
    ///
    /// Snapshots the window geometry, container rectangle and pointer
    /// position. A center-anchored window is rewritten into edge offsets
    /// before anything else happens.
    pub fn try_start_session(
        &mut self,
        id: WindowId,
        gesture: GestureKind,
        pointer: Vec2,
    ) -> Result<(), SessionError> {
        if let Some(active) = &self.session {
            return Err(SessionError::AlreadyActive {
                active: active.window_id,
                requested: id,
            });
        }

        let handle = self.windows.get(&id).ok_or(SessionError::UnknownWindow(id))?;
        if !handle.features.allows(gesture) {
            return Err(SessionError::NotBound { window: id, gesture });
        }
        let container_id = handle.container;
        let min_size = handle.min_size_or(self.config.min_size);

        let window_rect = self
            .surface
            .window_rect(id)
            .ok_or(SessionError::UnmeasuredWindow(id))?;
        let container = self
            .surface
            .container_rect(container_id)
            .ok_or(SessionError::UnmeasuredContainer(container_id))?;

        let placement = Placement::detect(self.surface.is_center_anchored(id), &window_rect, &container);
        let normalized = normalize(placement, window_rect, container, &self.config);
        if normalized.reanchor {
            let command = GeometryCommand::from_geometry(&normalized.geometry).with_clear_anchor();
            self.surface.apply(id, &command);
        }

        self.moves.clear();
        self.session = Some(Session {
            window_id: id,
            gesture,
            initial_geometry: normalized.geometry,
            initial_pointer: pointer,
            container,
            min_size,
            last_applied: None,
        });
        self.surface.session_changed(id, Some(gesture));

        debug!(window = id, gesture = ?gesture, reanchored = normalized.reanchor, "session started");
        Ok(())
    }

    /// Start a gesture; returns `false` (and logs) if a precondition fails
    pub fn start_session(&mut self, id: WindowId, gesture: GestureKind, pointer: Vec2) -> bool {
        match self.try_start_session(id, gesture, pointer) {
            Ok(()) => true,
            Err(err) => {
                warn!(window = id, gesture = ?gesture, error = %err, "session not started");
                false
            }
        }
    }

    /// Rewrite a center-anchored window into edge offsets without starting a
    /// gesture
    ///
    /// Returns the command applied, or `None` if the window was already
    /// edge-anchored or could not be measured.
    pub fn normalize_window(&mut self, id: WindowId) -> Option<GeometryCommand> {
        let container_id = self.windows.get(&id)?.container;
        if !self.surface.is_center_anchored(id) {
            return None;
        }
        let window_rect = self.surface.window_rect(id)?;
        let container = self.surface.container_rect(container_id)?;

        let normalized = normalize(Placement::CenterAnchored, window_rect, container, &self.config);
        let command = GeometryCommand::from_geometry(&normalized.geometry).with_clear_anchor();
        self.surface.apply(id, &command);
        Some(command)
    }

    /// Geometry the active session would produce for `pointer`
    ///
    /// Pure: nothing is applied or emitted.
    pub fn compute_frame(&self, pointer: Vec2) -> Option<GeometryCommand> {
        self.session.as_ref().map(|session| session.compute(pointer))
    }

    /// Record a pointer move for the next frame
    ///
    /// Returns `false` when no session is active; stray moves are ignored.
    pub fn pointer_move(&mut self, pointer: Vec2) -> bool {
        if self.session.is_none() {
            return false;
        }
        if self.moves.push(pointer) {
            trace!(x = pointer.x, y = pointer.y, "coalesced pointer move");
        }
        true
    }

    /// Render the latest pending move, if any
    ///
    /// Call once per display refresh. Returns the applied command.
    pub fn frame(&mut self) -> Option<GeometryCommand> {
        let pointer = self.moves.take()?;
        let session = self.session.as_mut()?;

        let command = session.compute(pointer);
        session.last_applied = Some(command);
        let (id, gesture) = (session.window_id, session.gesture);

        self.surface.apply(id, &command);
        self.notifier
            .emit(Notification::Changed(GeometryEvent::new(id, gesture, &command)));

        trace!(
            window = id,
            width = command.width,
            height = command.height,
            left = command.left,
            top = command.top,
            "frame applied"
        );
        Some(command)
    }

    /// Finish the active gesture normally
    ///
    /// A move still waiting for its frame is applied first. Emits the end
    /// notification and returns the final geometry.
    pub fn end_session(&mut self) -> Option<GeometryCommand> {
        if self.session.is_none() {
            return None;
        }
        self.frame();

        let session = self.session.take()?;
        let final_geometry = session.current_geometry();
        self.moves.clear();
        self.surface.session_changed(session.window_id, None);
        self.notifier.emit(Notification::Ended(GeometryEvent::new(
            session.window_id,
            session.gesture,
            &final_geometry,
        )));

        debug!(window = session.window_id, gesture = ?session.gesture, "session ended");
        Some(final_geometry)
    }

    /// Force-terminate the active gesture without an end notification
    pub fn cancel_session(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        self.moves.clear();
        self.surface.session_changed(session.window_id, None);

        debug!(window = session.window_id, gesture = ?session.gesture, "session cancelled");
        true
    }

    /// Cancel the active gesture if it belongs to `id`
    pub(crate) fn cancel_session_for(&mut self, id: WindowId) -> bool {
        match &self.session {
            Some(session) if session.window_id == id => self.cancel_session(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::EngineConfig;
    use crate::error::SessionError;
    use crate::input::{GestureKind, InteractionController};
    use crate::math::{Rect, Vec2};
    use crate::testing::MemorySurface;
    use crate::window::{Direction, Features, WindowOptions};

    fn controller() -> InteractionController<MemorySurface> {
        let mut surface = MemorySurface::new();
        surface.add_container(1, Rect::new(0.0, 0.0, 800.0, 600.0));
        surface.add_window_at(7, 1, Rect::new(100.0, 100.0, 200.0, 150.0));

        let mut controller = InteractionController::new(surface, EngineConfig::default());
        controller.open_window(
            7,
            1,
            WindowOptions {
                features: Features::ALL,
                min_size: None,
            },
        );
        controller
    }

    #[test]
    fn test_second_start_rejected() {
        let mut c = controller();
        assert!(c.start_session(7, GestureKind::Drag, Vec2::new(150.0, 110.0)));

        let err = c
            .try_start_session(7, GestureKind::Resize(Direction::Se), Vec2::new(300.0, 250.0))
            .unwrap_err();
        assert_eq!(err, SessionError::AlreadyActive { active: 7, requested: 7 });
        assert!(c.session().unwrap().is_drag());
    }

    #[test]
    fn test_unbound_feature_rejected() {
        let mut c = controller();
        c.unbind_resize(7);
        let err = c
            .try_start_session(7, GestureKind::Resize(Direction::E), Vec2::ZERO)
            .unwrap_err();
        assert!(matches!(err, SessionError::NotBound { window: 7, .. }));
        assert!(!c.is_active());
    }

    #[test]
    fn test_frame_without_move_is_none() {
        let mut c = controller();
        c.start_session(7, GestureKind::Drag, Vec2::new(150.0, 110.0));
        assert!(c.frame().is_none());
    }

    #[test]
    fn test_moves_coalesce_to_latest() {
        let mut c = controller();
        c.start_session(7, GestureKind::Drag, Vec2::new(150.0, 110.0));
        c.pointer_move(Vec2::new(160.0, 110.0));
        c.pointer_move(Vec2::new(170.0, 110.0));
        c.pointer_move(Vec2::new(200.0, 130.0));
        assert_eq!(c.coalesced_moves(), 2);

        let cmd = c.frame().unwrap();
        assert!((cmd.left - 150.0).abs() < 0.001);
        assert!((cmd.top - 120.0).abs() < 0.001);
        assert_eq!(c.coalesced_moves(), 0);
        assert_eq!(c.surface().applied().len(), 1);
    }

    #[test]
    fn test_compute_frame_is_pure() {
        let mut c = controller();
        c.start_session(7, GestureKind::Resize(Direction::E), Vec2::new(300.0, 150.0));
        let a = c.compute_frame(Vec2::new(340.0, 150.0)).unwrap();
        let b = c.compute_frame(Vec2::new(340.0, 150.0)).unwrap();
        assert_eq!(a, b);
        assert!((a.width - 240.0).abs() < 0.001);
        assert!(c.surface().applied().is_empty());
    }

    #[test]
    fn test_end_flushes_pending_move() {
        let mut c = controller();
        c.start_session(7, GestureKind::Drag, Vec2::new(150.0, 110.0));
        c.pointer_move(Vec2::new(170.0, 110.0));

        let last = c.end_session().unwrap();
        assert!((last.left - 120.0).abs() < 0.001);
        assert!(!c.is_active());
        assert!(!c.has_pending_frame());
    }

    #[test]
    fn test_cancel_without_session() {
        let mut c = controller();
        assert!(!c.cancel_session());
        assert!(c.end_session().is_none());
    }
}
