//! WASM exports for the floating window engine
//!
//! This module provides wasm-bindgen exports for the InteractionController,
//! backed by a surface that measures and styles DOM elements directly.
//! Pointer listeners stay on the JS side: call `pointer_move` from a
//! document-wide `pointermove` and `frame` from `requestAnimationFrame`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::EngineConfig;
use crate::input::{
    GeometryCommand, GestureKind, HandleTarget, InputResult, InteractionController, PointerEvent,
};
use crate::math::{Rect, Vec2};
use crate::notify::Notification;
use crate::surface::{GeometrySink, ViewportQuery};
use crate::window::{ContainerId, Direction, Features, WindowId, WindowOptions};

const DRAGGING_CLASS: &str = "float-dragging";
const RESIZING_CLASS: &str = "float-resizing";
const CENTER_TRANSFORM: &str = "translate(-50%, -50%)";

/// Surface over DOM elements looked up by id
pub struct DomSurface {
    document: Document,
    /// Window id -> id of the positioned element
    windows: HashMap<WindowId, String>,
    /// Container id -> element id
    containers: HashMap<ContainerId, String>,
}

impl DomSurface {
    /// Create a surface over the current document
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self {
            document,
            windows: HashMap::new(),
            containers: HashMap::new(),
        })
    }

    fn element(&self, element_id: &str) -> Option<Element> {
        self.document.get_element_by_id(element_id)
    }

    fn window_element(&self, window: WindowId) -> Option<HtmlElement> {
        let element_id = self.windows.get(&window)?;
        self.element(element_id)?.dyn_into::<HtmlElement>().ok()
    }

    fn set_style(element: &HtmlElement, property: &str, value: &str) {
        if element.style().set_property(property, value).is_err() {
            tracing::warn!(property, value, "style not applied");
        }
    }

    fn remove_style(element: &HtmlElement, property: &str) {
        if element.style().remove_property(property).is_err() {
            tracing::warn!(property, "style not removed");
        }
    }
}

fn measure(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

fn px(value: f32) -> String {
    format!("{}px", value)
}

impl ViewportQuery for DomSurface {
    fn window_rect(&self, window: WindowId) -> Option<Rect> {
        let element_id = self.windows.get(&window)?;
        self.element(element_id).map(|e| measure(&e))
    }

    fn container_rect(&self, container: ContainerId) -> Option<Rect> {
        let element_id = self.containers.get(&container)?;
        self.element(element_id).map(|e| measure(&e))
    }

    fn is_center_anchored(&self, window: WindowId) -> bool {
        let Some(element) = self.windows.get(&window).and_then(|id| self.element(id)) else {
            return false;
        };
        let transform = web_sys::window()
            .and_then(|w| w.get_computed_style(&element).ok().flatten())
            .and_then(|style| style.get_property_value("transform").ok())
            .unwrap_or_default();
        !transform.is_empty() && transform != "none"
    }
}

impl GeometrySink for DomSurface {
    fn apply(&mut self, window: WindowId, command: &GeometryCommand) {
        let Some(element) = self.window_element(window) else {
            return;
        };
        if command.clear_anchor {
            Self::set_style(&element, "transform", "none");
        }
        Self::set_style(&element, "width", &px(command.width));
        Self::set_style(&element, "height", &px(command.height));
        Self::set_style(&element, "top", &px(command.top));
        Self::set_style(&element, "right", &px(command.right));
        Self::set_style(&element, "bottom", &px(command.bottom));
        Self::set_style(&element, "left", &px(command.left));
    }

    fn session_changed(&mut self, window: WindowId, gesture: Option<GestureKind>) {
        let Some(element) = self.window_element(window) else {
            return;
        };
        let classes = element.class_list();
        let result = match gesture {
            Some(GestureKind::Drag) => classes.add_1(DRAGGING_CLASS),
            Some(GestureKind::Resize(_)) => classes.add_1(RESIZING_CLASS),
            None => classes.remove_2(DRAGGING_CLASS, RESIZING_CLASS),
        };
        if result.is_err() {
            tracing::warn!(window, "session class not updated");
        }
    }

    fn recenter(&mut self, window: WindowId, container: ContainerId) {
        let Some(element) = self.window_element(window) else {
            return;
        };
        let Some(target) = self.containers.get(&container).and_then(|id| self.element(id)) else {
            return;
        };
        if target.append_child(&element).is_err() {
            tracing::warn!(window, container, "window not moved");
            return;
        }
        for property in ["right", "bottom"] {
            Self::remove_style(&element, property);
        }
        Self::set_style(&element, "top", "50%");
        Self::set_style(&element, "left", "50%");
        Self::set_style(&element, "transform", CENTER_TRANSFORM);
    }

    fn rank_changed(&mut self, window: WindowId, rank: u32) {
        if let Some(element) = self.window_element(window) {
            Self::set_style(&element, "z-index", &rank.to_string());
        }
    }
}

fn result_json(result: &InputResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
}

/// Floating window controller for WASM - wraps InteractionController with JS-friendly API
#[wasm_bindgen]
pub struct FloatController {
    controller: InteractionController<DomSurface>,
    notifications: Rc<RefCell<Vec<Notification>>>,
}

#[wasm_bindgen]
impl FloatController {
    /// Create a controller; `config_json` may override any `EngineConfig` field
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<FloatController, JsValue> {
        let config = match config_json {
            Some(json) => serde_json::from_str::<EngineConfig>(&json)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => EngineConfig::default(),
        };
        let surface = DomSurface::new().ok_or_else(|| JsValue::from_str("no document"))?;

        let notifications = Rc::new(RefCell::new(Vec::new()));
        let mut controller = InteractionController::new(surface, config);
        let sink = Rc::clone(&notifications);
        controller
            .notifier_mut()
            .subscribe(move |n| sink.borrow_mut().push(*n));

        Ok(Self {
            controller,
            notifications,
        })
    }

    // =========================================================================
    // Containers & Windows
    // =========================================================================

    /// Register a container element
    #[wasm_bindgen]
    pub fn add_container(&mut self, id: u64, element_id: &str) {
        self.controller
            .surface_mut()
            .containers
            .insert(id, element_id.to_string());
    }

    /// Register a window element inside a container
    #[wasm_bindgen]
    pub fn open_window(
        &mut self,
        id: u64,
        element_id: &str,
        container: u64,
        drag: bool,
        resize: bool,
    ) -> bool {
        if self.controller.has_window(id) {
            tracing::warn!(window = id, "window already open");
            return false;
        }
        self.controller
            .surface_mut()
            .windows
            .insert(id, element_id.to_string());
        let options = WindowOptions {
            features: Features { drag, resize },
            min_size: None,
        };
        let opened = self.controller.open_window(id, container, options);
        if !opened {
            self.controller.surface_mut().windows.remove(&id);
        }
        opened
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: u64) -> bool {
        let closed = self.controller.close_window(id);
        if closed {
            self.controller.surface_mut().windows.remove(&id);
        }
        closed
    }

    /// Move a window into another container and re-center it
    #[wasm_bindgen]
    pub fn move_to_container(&mut self, id: u64, container: u64) -> bool {
        self.controller.reassign_container(id, container)
    }

    /// Bring a window to the front
    #[wasm_bindgen]
    pub fn bring_to_front(&mut self, id: u64) -> bool {
        self.controller.bring_to_front(id)
    }

    /// Get a window's rank
    #[wasm_bindgen]
    pub fn rank(&self, id: u64) -> Option<u32> {
        self.controller.rank(id)
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Pointer-down on a window body; raises it. Returns the `InputResult` as JSON
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, id: u64, x: f32, y: f32, button: u8) -> String {
        self.down(id, HandleTarget::Body, x, y, button)
    }

    /// Pointer-down on a drag area. Returns the `InputResult` as JSON
    #[wasm_bindgen]
    pub fn start_drag(&mut self, id: u64, x: f32, y: f32, button: u8) -> String {
        self.down(id, HandleTarget::DragArea, x, y, button)
    }

    /// Pointer-down on a resize handle (`e`, `w`, `n`, `s`, `se`, ...).
    /// Returns the `InputResult` as JSON
    #[wasm_bindgen]
    pub fn start_resize(&mut self, id: u64, direction: &str, x: f32, y: f32, button: u8) -> String {
        match direction.parse::<Direction>() {
            Ok(direction) => self.down(id, HandleTarget::Resize(direction), x, y, button),
            Err(err) => {
                tracing::warn!(window = id, error = %err, "resize not started");
                result_json(&InputResult::Rejected {
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Record a pointer move
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.controller.pointer_move(Vec2::new(x, y))
    }

    /// Apply the latest pending move; call once per animation frame
    #[wasm_bindgen]
    pub fn frame(&mut self) -> bool {
        self.controller.frame().is_some()
    }

    /// Finish the gesture
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> bool {
        self.controller.end_session().is_some()
    }

    /// Abort the gesture without an end notification
    #[wasm_bindgen]
    pub fn cancel(&mut self) -> bool {
        self.controller.cancel_session()
    }

    /// Check if a gesture is in progress
    #[wasm_bindgen]
    pub fn is_active(&self) -> bool {
        self.controller.is_active()
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Take all notifications emitted since the last call, as a JSON array
    #[wasm_bindgen]
    pub fn drain_notifications_json(&mut self) -> String {
        let drained: Vec<Notification> = self.notifications.borrow_mut().drain(..).collect();
        serde_json::to_string(&drained).unwrap_or_else(|_| "[]".to_string())
    }

    /// Take all notifications emitted since the last call, as JS objects
    #[wasm_bindgen]
    pub fn drain_notifications(&mut self) -> Result<JsValue, JsValue> {
        js_sys::JSON::parse(&self.drain_notifications_json())
    }

    fn down(&mut self, id: u64, target: HandleTarget, x: f32, y: f32, button: u8) -> String {
        let result = self
            .controller
            .handle_pointer(PointerEvent::down(id, target, x, y, button));
        result_json(&result)
    }
}
