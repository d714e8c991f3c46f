//! Latest-wins coalescing of pointer moves
//!
//! Moves can arrive faster than the display refreshes. Only the most recent
//! position matters for the next frame, since every frame is computed from
//! the gesture's start rather than from the previous frame.

use crate::math::Vec2;

/// Holds at most one pending pointer position
#[derive(Clone, Debug, Default)]
pub struct MoveCoalescer {
    /// Latest position not yet rendered
    pending: Option<Vec2>,
    /// Moves dropped since the last take
    dropped: u32,
}

impl MoveCoalescer {
    /// Create an empty coalescer
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move; returns `true` if it replaced a pending one
    pub fn push(&mut self, position: Vec2) -> bool {
        let replaced = self.pending.replace(position).is_some();
        if replaced {
            self.dropped += 1;
        }
        replaced
    }

    /// Take the latest pending position for this frame
    pub fn take(&mut self) -> Option<Vec2> {
        self.dropped = 0;
        self.pending.take()
    }

    /// Whether a move is waiting for the next frame
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Moves superseded since the last take
    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Discard any pending move
    pub fn clear(&mut self) {
        self.pending = None;
        self.dropped = 0;
    }
}
