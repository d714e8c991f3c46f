//! Host surface: measurement in, geometry out
//!
//! The engine never touches presentation. It asks a [`ViewportQuery`] where
//! things are and hands finished numbers to a [`GeometrySink`].

use crate::input::{GeometryCommand, GestureKind};
use crate::math::Rect;
use crate::window::{ContainerId, WindowId};

/// Measures windows and containers in viewport coordinates
pub trait ViewportQuery {
    /// Current bounding rectangle of a window's movable element
    fn window_rect(&self, window: WindowId) -> Option<Rect>;

    /// Current bounding rectangle of a container
    fn container_rect(&self, container: ContainerId) -> Option<Rect>;

    /// Whether the window is currently placed by a centering transform
    fn is_center_anchored(&self, window: WindowId) -> bool;
}

/// Reflects computed geometry onto the visible window
pub trait GeometrySink {
    /// Apply a geometry command to a window
    fn apply(&mut self, window: WindowId, command: &GeometryCommand);

    /// A gesture started (`Some`) or stopped (`None`) on a window
    ///
    /// Hosts attach and detach their document-wide move/up listeners here.
    fn session_changed(&mut self, _window: WindowId, _gesture: Option<GestureKind>) {}

    /// Lay a window out centered in a new container
    fn recenter(&mut self, _window: WindowId, _container: ContainerId) {}

    /// A window's stacking rank was assigned or changed
    ///
    /// Called on open, on raise and after a close compacts the ranks above
    /// the closed window.
    fn rank_changed(&mut self, _window: WindowId, _rank: u32) {}
}

/// A host that can both measure and apply
pub trait Surface: ViewportQuery + GeometrySink {}

impl<T: ViewportQuery + GeometrySink> Surface for T {}
