//! Raw pointer event routing

use tracing::{debug, warn};

use crate::error::SessionError;
use crate::input::{GestureKind, HandleTarget, InputResult, PointerEvent, PointerKind};
use crate::math::Vec2;
use crate::surface::Surface;
use crate::window::WindowId;
use super::InteractionController;

impl<S: Surface> InteractionController<S> {
    /// Handle one pointer event
    ///
    /// Moves and ups are expected from document-wide listeners, so they are
    /// ignored when no gesture is active.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> InputResult {
        match event.kind {
            PointerKind::Down { window, target } => {
                self.handle_pointer_down(window, target, event.position, event.button)
            }
            PointerKind::Move => {
                if self.pointer_move(event.position) {
                    InputResult::Handled
                } else {
                    InputResult::Unhandled
                }
            }
            PointerKind::Up => {
                if self.end_session().is_some() {
                    InputResult::Handled
                } else {
                    InputResult::Unhandled
                }
            }
        }
    }

    /// Handle pointer-down on a window target
    fn handle_pointer_down(
        &mut self,
        window: WindowId,
        target: HandleTarget,
        position: Vec2,
        button: u8,
    ) -> InputResult {
        if button != self.config.primary_button {
            debug!(window, error = %SessionError::NonPrimaryButton(button), "pointer-down ignored");
            return InputResult::Unhandled;
        }

        if let Some(active) = &self.session {
            let err = SessionError::AlreadyActive {
                active: active.window_id,
                requested: window,
            };
            warn!(error = %err, "pointer-down during active session");
            return InputResult::Rejected {
                reason: err.to_string(),
            };
        }

        if !self.has_window(window) {
            return InputResult::Unhandled;
        }

        self.bring_to_front(window);

        let gesture = match target {
            HandleTarget::Body => return InputResult::Handled,
            HandleTarget::DragArea => GestureKind::Drag,
            HandleTarget::Resize(direction) => GestureKind::Resize(direction),
        };

        match self.try_start_session(window, gesture, position) {
            Ok(()) => InputResult::Handled,
            Err(err) => {
                warn!(window, gesture = ?gesture, error = %err, "session not started");
                InputResult::Rejected {
                    reason: err.to_string(),
                }
            }
        }
    }
}
