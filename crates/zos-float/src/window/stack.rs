//! Stacking order over open windows
//!
//! Ranks are dense: with `n` windows open the rank set is always exactly
//! `base..base + n`, one rank per window. Promotion moves a window to the top
//! rank and shifts every window that was above it down by one. A push that
//! would need a rank past `u32::MAX` is refused.

use std::collections::HashMap;

use super::WindowId;

/// Dense rank assignment for open windows (higher = on top)
#[derive(Clone, Debug)]
pub struct StackOrder {
    /// Rank of the bottom-most window
    base: u32,
    /// Current rank by window
    ranks: HashMap<WindowId, u32>,
}

impl StackOrder {
    /// Create an empty stack whose bottom rank is `base`
    pub fn new(base: u32) -> Self {
        Self {
            base,
            ranks: HashMap::new(),
        }
    }

    /// Bottom rank
    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Number of ranked windows
    #[inline]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether no window is ranked
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Rank of a window
    #[inline]
    pub fn rank(&self, id: WindowId) -> Option<u32> {
        self.ranks.get(&id).copied()
    }

    /// Highest rank currently held
    pub fn top_rank(&self) -> Option<u32> {
        let above_base = self.ranks.len().checked_sub(1)?;
        self.rank_at(above_base)
    }

    /// Rank `offset` places above the base, if it fits in a `u32`
    fn rank_at(&self, offset: usize) -> Option<u32> {
        u32::try_from(offset)
            .ok()
            .and_then(|offset| self.base.checked_add(offset))
    }

    /// Window holding the top rank
    pub fn topmost(&self) -> Option<WindowId> {
        let top = self.top_rank()?;
        self.ranks
            .iter()
            .find(|(_, &rank)| rank == top)
            .map(|(&id, _)| id)
    }

    /// Place a newly opened window on top and return its rank
    ///
    /// Pushing a window that is already ranked leaves the order untouched.
    /// Returns `None`, without ranking the window, when the next rank would
    /// overflow.
    pub fn push(&mut self, id: WindowId) -> Option<u32> {
        if let Some(rank) = self.rank(id) {
            return Some(rank);
        }
        let rank = self.rank_at(self.ranks.len())?;
        self.ranks.insert(id, rank);
        Some(rank)
    }

    /// Remove a window, closing the gap it leaves
    pub fn remove(&mut self, id: WindowId) -> Option<u32> {
        let removed = self.ranks.remove(&id)?;
        for rank in self.ranks.values_mut() {
            if *rank > removed {
                *rank -= 1;
            }
        }
        Some(removed)
    }

    /// Promote a window to the top rank
    ///
    /// Returns `false` when the window is unknown or already on top.
    pub fn bring_to_front(&mut self, id: WindowId) -> bool {
        let (current, top) = match (self.rank(id), self.top_rank()) {
            (Some(current), Some(top)) => (current, top),
            _ => return false,
        };
        if current == top {
            return false;
        }

        for (&other, rank) in self.ranks.iter_mut() {
            if other == id {
                *rank = top;
            } else if *rank > current {
                *rank -= 1;
            }
        }
        true
    }

    /// Windows ordered back to front
    pub fn ordered(&self) -> Vec<WindowId> {
        let mut entries: Vec<(WindowId, u32)> =
            self.ranks.iter().map(|(&id, &rank)| (id, rank)).collect();
        entries.sort_by_key(|&(_, rank)| rank);
        entries.into_iter().map(|(id, _)| id).collect()
    }

    /// Check the dense-rank invariant
    pub fn is_dense(&self) -> bool {
        let mut ranks: Vec<u32> = self.ranks.values().copied().collect();
        ranks.sort_unstable();
        ranks
            .iter()
            .enumerate()
            .all(|(i, &rank)| self.rank_at(i) == Some(rank))
    }
}
