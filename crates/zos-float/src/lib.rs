//! Floating Window Interaction Engine for Zero OS
//!
//! This crate provides the geometry core behind floating windows:
//! - Dragging a window by its header, clamped to its container
//! - Resizing from any of eight edges and corners with a minimum size
//! - Stacking order with dense ranks and bring-to-front
//! - Per-frame coalescing of pointer moves
//! - Change and end notifications for listeners
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`, clamp ranges)
//! - [`geometry`]: Edge-offset snapshots and the coordinate normalizer
//! - [`engine`]: Pure drag and resize computations
//! - [`window`]: Directions, per-window handles and stacking order
//! - [`input`]: Sessions, pointer events and the interaction controller
//! - [`notify`]: Geometry notifications
//! - [`surface`]: Traits the host implements to measure and apply
//! - [`testing`]: In-memory surface
//!
//! ## Example
//!
//! ```rust
//! use zos_float::testing::MemorySurface;
//! use zos_float::{
//!     EngineConfig, Features, HandleTarget, InteractionController, PointerEvent, Rect,
//!     WindowOptions,
//! };
//!
//! let mut surface = MemorySurface::new();
//! surface.add_container(1, Rect::new(0.0, 0.0, 800.0, 600.0));
//! surface.add_window_at(7, 1, Rect::new(100.0, 100.0, 200.0, 150.0));
//!
//! let mut controller = InteractionController::new(surface, EngineConfig::default());
//! controller.open_window(7, 1, WindowOptions { features: Features::ALL, min_size: None });
//!
//! controller.handle_pointer(PointerEvent::down(7, HandleTarget::DragArea, 150.0, 110.0, 0));
//! controller.handle_pointer(PointerEvent::moved(200.0, 130.0));
//! let frame = controller.frame().unwrap();
//! assert_eq!((frame.left, frame.top), (150.0, 120.0));
//! controller.handle_pointer(PointerEvent::up(200.0, 130.0));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: The engine never touches presentation; hosts measure and apply
//! 2. **Snapshot Math**: Every frame is computed from the gesture's start, never from the last frame
//! 3. **One Pointer**: At most one drag or resize is active at a time
//! 4. **Never Fatal**: Precondition violations are logged no-ops

pub mod math;
pub mod geometry;
pub mod engine;
pub mod window;
pub mod input;
pub mod notify;
pub mod surface;
pub mod testing;

mod config;
mod error;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{ClampRange, ClampRange2D, Rect, Size, Vec2};
pub use geometry::{normalize, EdgeOffsets, MouseLimits, Normalized, Placement, WindowGeometry};
pub use engine::{compute_drag_position, compute_resize, DragOutcome, ResizeOutcome};
pub use window::{ContainerId, Direction, Features, StackOrder, WindowHandle, WindowId, WindowOptions};
pub use input::{
    GeometryCommand, GestureKind, HandleTarget, InputResult, InteractionController, PointerEvent,
    PointerKind, Session,
};
pub use notify::{GeometryEvent, ListenerId, Notification, NotificationEmitter};
pub use surface::{GeometrySink, Surface, ViewportQuery};

pub use config::EngineConfig;
pub use error::{ParseDirectionError, RegistryError, SessionError};
