//! Pointer events fed to the controller

use crate::math::Vec2;
use crate::window::{Direction, WindowId};

/// Which part of a window a pointer-down landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleTarget {
    /// The drag area (usually the header)
    DragArea,
    /// A resize handle
    Resize(Direction),
    /// Anywhere else on the window
    Body,
}

/// Kind of pointer event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerKind {
    /// Button pressed on a window
    Down {
        window: WindowId,
        target: HandleTarget,
    },
    /// Pointer moved anywhere
    Move,
    /// Button released anywhere
    Up,
}

/// A pointer event in viewport coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Vec2,
    /// Button code (0 = primary)
    pub button: u8,
}

impl PointerEvent {
    /// Pointer-down on a window target
    pub fn down(window: WindowId, target: HandleTarget, x: f32, y: f32, button: u8) -> Self {
        Self {
            kind: PointerKind::Down { window, target },
            position: Vec2::new(x, y),
            button,
        }
    }

    /// Pointer move
    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Move,
            position: Vec2::new(x, y),
            button: 0,
        }
    }

    /// Pointer-up
    pub fn up(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Up,
            position: Vec2::new(x, y),
            button: 0,
        }
    }
}
