//! Per-window handle state

use serde::{Deserialize, Serialize};

use crate::input::GestureKind;
use crate::math::Size;
use super::WindowId;

/// Identifier of a bounding container, resolved by the host surface
pub type ContainerId = u64;

/// Which interaction handles are bound on a window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    /// Header drag area is bound
    pub drag: bool,
    /// Edge and corner resize handles are bound
    pub resize: bool,
}

impl Features {
    /// Both drag and resize bound
    pub const ALL: Features = Features {
        drag: true,
        resize: true,
    };

    /// Whether the handles for `gesture` are bound
    #[inline]
    pub fn allows(self, gesture: GestureKind) -> bool {
        match gesture {
            GestureKind::Drag => self.drag,
            GestureKind::Resize(_) => self.resize,
        }
    }
}

/// Options for registering a window
#[derive(Clone, Debug, Default)]
pub struct WindowOptions {
    /// Handles to bind on open
    pub features: Features,
    /// Minimum size override (None = engine default)
    pub min_size: Option<Size>,
}

/// A floating window known to the engine
#[derive(Clone, Debug, PartialEq)]
pub struct WindowHandle {
    /// Unique identifier
    pub id: WindowId,
    /// Bounding container the window lives in
    pub container: ContainerId,
    /// Bound handles
    pub features: Features,
    /// Minimum size override
    pub min_size: Option<Size>,
}

impl WindowHandle {
    /// Create a handle from registration options
    pub fn new(id: WindowId, container: ContainerId, options: WindowOptions) -> Self {
        Self {
            id,
            container,
            features: options.features,
            min_size: options.min_size,
        }
    }

    /// Minimum size for this window, falling back to `default`
    #[inline]
    pub fn min_size_or(&self, default: Size) -> Size {
        self.min_size.unwrap_or(default)
    }
}
