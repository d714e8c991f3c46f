//! Geometry commands and input results

use serde::{Deserialize, Serialize};

use crate::geometry::{EdgeOffsets, WindowGeometry};
use crate::math::Size;

/// Numeric geometry for the host to reflect onto a window
///
/// `width`/`height` size the window's content; the four offsets place it
/// inside its container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryCommand {
    pub width: f32,
    pub height: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
    /// Drop the centering transform before applying the offsets
    pub clear_anchor: bool,
}

impl GeometryCommand {
    /// Command from a size and edge offsets
    pub fn new(size: Size, offsets: EdgeOffsets) -> Self {
        Self {
            width: size.width,
            height: size.height,
            top: offsets.top,
            right: offsets.right,
            bottom: offsets.bottom,
            left: offsets.left,
            clear_anchor: false,
        }
    }

    /// Command that reproduces a snapshot unchanged
    pub fn from_geometry(geometry: &WindowGeometry) -> Self {
        Self::new(geometry.size(), geometry.offsets())
    }

    /// Same geometry, flagged to clear the centering transform
    #[inline]
    pub fn with_clear_anchor(mut self) -> Self {
        self.clear_anchor = true;
        self
    }

    /// Size carried by this command
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Edge offsets carried by this command
    #[inline]
    pub fn offsets(&self) -> EdgeOffsets {
        EdgeOffsets::new(self.left, self.top, self.right, self.bottom)
    }
}

/// Result of pointer event handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was consumed by the engine
    Handled,
    /// Input is not for the engine (pass through)
    Unhandled,
    /// Input was for the engine but a precondition failed
    Rejected {
        /// Human-readable reason
        reason: String,
    },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled)
    }

    /// Check if input was rejected
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, InputResult::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MouseLimits;

    #[test]
    fn test_command_from_geometry() {
        let geometry = WindowGeometry::new(
            Size::new(200.0, 150.0),
            EdgeOffsets::new(100.0, 100.0, 500.0, 350.0),
            MouseLimits::default(),
        );
        let cmd = GeometryCommand::from_geometry(&geometry);

        assert_eq!(cmd.size(), geometry.size());
        assert_eq!(cmd.offsets(), geometry.offsets());
        assert!(!cmd.clear_anchor);
        assert!(cmd.with_clear_anchor().clear_anchor);
    }

    #[test]
    fn test_input_result_serializes_tagged() {
        let json = serde_json::to_string(&InputResult::Handled).unwrap();
        assert_eq!(json, r#"{"type":"handled"}"#);

        let rejected = InputResult::Rejected {
            reason: "busy".to_string(),
        };
        assert!(rejected.is_rejected());
        assert!(!rejected.is_handled());
        let json = serde_json::to_string(&rejected).unwrap();
        assert_eq!(json, r#"{"type":"rejected","reason":"busy"}"#);
    }
}
