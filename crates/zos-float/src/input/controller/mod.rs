//! Interaction controller gluing pointer events to the engines
//!
//! This module is split into focused submodules:
//! - `session`: gesture start, per-frame application, end and cancellation
//! - `pointer`: raw pointer-down/move/up routing
//! - `windows`: window registry, handle binding and stacking

mod session;
mod pointer;
mod windows;

use std::collections::HashMap;

use crate::config::EngineConfig;
use crate::input::{MoveCoalescer, Session};
use crate::notify::NotificationEmitter;
use crate::surface::Surface;
use crate::window::{StackOrder, WindowHandle, WindowId};

/// Single-threaded state machine for floating window gestures
///
/// Owns everything the engine tracks:
/// - Registered windows and their bound handles
/// - Stacking order
/// - The (at most one) active drag or resize session
/// - Pending pointer moves awaiting the next frame
/// - Notification listeners
///
/// Measurement and presentation go through the host [`Surface`].
pub struct InteractionController<S: Surface> {
    /// Host surface
    pub(crate) surface: S,
    /// Engine tunables
    pub(crate) config: EngineConfig,
    /// Registered windows
    pub(crate) windows: HashMap<WindowId, WindowHandle>,
    /// Stacking order of registered windows
    pub(crate) stack: StackOrder,
    /// Active gesture, if any
    pub(crate) session: Option<Session>,
    /// Latest pointer position not yet rendered
    pub(crate) moves: MoveCoalescer,
    /// Geometry listeners
    pub(crate) notifier: NotificationEmitter,
}

impl<S: Surface> InteractionController<S> {
    /// Create a controller over a host surface
    pub fn new(surface: S, config: EngineConfig) -> Self {
        let stack = StackOrder::new(config.base_rank);
        Self {
            surface,
            config,
            windows: HashMap::new(),
            stack,
            session: None,
            moves: MoveCoalescer::new(),
            notifier: NotificationEmitter::new(),
        }
    }

    /// Host surface
    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable host surface
    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Engine configuration
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Notification listeners
    #[inline]
    pub fn notifier_mut(&mut self) -> &mut NotificationEmitter {
        &mut self.notifier
    }

    /// Active session, if any
    #[inline]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Check if a gesture is in progress
    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Check if a pointer move is waiting for the next frame
    #[inline]
    pub fn has_pending_frame(&self) -> bool {
        self.moves.is_pending()
    }

    /// Pointer moves superseded before they were rendered
    #[inline]
    pub fn coalesced_moves(&self) -> u32 {
        self.moves.dropped()
    }

    /// Give back the host surface
    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S: Surface + Default> Default for InteractionController<S> {
    fn default() -> Self {
        Self::new(S::default(), EngineConfig::default())
    }
}
