//! Geometry notifications
//!
//! Listeners hear about every applied frame (`Changed`) and about the end of
//! a gesture that finished normally (`Ended`). A gesture that is cancelled
//! because its window closed or moved to another container emits nothing.

use serde::Serialize;

use crate::input::{GeometryCommand, GestureKind};
use crate::window::WindowId;

/// Geometry reported to listeners
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryEvent {
    pub window_id: WindowId,
    pub gesture: GestureKind,
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: f32,
}

impl GeometryEvent {
    /// Event for a window at the geometry of `command`
    pub fn new(window_id: WindowId, gesture: GestureKind, command: &GeometryCommand) -> Self {
        Self {
            window_id,
            gesture,
            width: command.width,
            height: command.height,
            left: command.left,
            top: command.top,
        }
    }
}

/// Notification emitted by the controller
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Notification {
    /// A frame of a gesture was applied
    Changed(GeometryEvent),
    /// A gesture ended normally
    Ended(GeometryEvent),
}

impl Notification {
    /// Window the notification is about
    #[inline]
    pub fn window_id(&self) -> WindowId {
        self.event().window_id
    }

    /// Payload of the notification
    #[inline]
    pub fn event(&self) -> &GeometryEvent {
        match self {
            Notification::Changed(event) | Notification::Ended(event) => event,
        }
    }

    /// Check if this is an end notification
    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self, Notification::Ended(_))
    }
}

/// Handle returned by [`NotificationEmitter::subscribe`]
pub type ListenerId = u64;

type Listener = Box<dyn FnMut(&Notification)>;

/// Fan-out of notifications to registered listeners
#[derive(Default)]
pub struct NotificationEmitter {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: ListenerId,
}

impl NotificationEmitter {
    /// Create an emitter with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Notification) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns `false` if it was not registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners
    #[inline]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver a notification to every listener in subscription order
    pub fn emit(&mut self, notification: Notification) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&notification);
        }
    }
}

impl std::fmt::Debug for NotificationEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationEmitter")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn event() -> GeometryEvent {
        GeometryEvent {
            window_id: 3,
            gesture: GestureKind::Drag,
            width: 200.0,
            height: 150.0,
            left: 10.0,
            top: 20.0,
        }
    }

    #[test]
    fn test_emit_reaches_all_listeners() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = NotificationEmitter::new();

        let a = Rc::clone(&seen);
        emitter.subscribe(move |n| a.borrow_mut().push(("a", *n)));
        let b = Rc::clone(&seen);
        emitter.subscribe(move |n| b.borrow_mut().push(("b", *n)));

        emitter.emit(Notification::Changed(event()));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, "a");
        assert_eq!(seen[1].0, "b");
        assert_eq!(seen[0].1.window_id(), 3);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut emitter = NotificationEmitter::new();
        let c = Rc::clone(&count);
        let id = emitter.subscribe(move |_| *c.borrow_mut() += 1);

        emitter.emit(Notification::Ended(event()));
        assert!(emitter.unsubscribe(id));
        assert!(!emitter.unsubscribe(id));
        emitter.emit(Notification::Ended(event()));

        assert_eq!(*count.borrow(), 1);
        assert_eq!(emitter.listener_count(), 0);
    }

    #[test]
    fn test_notification_json() {
        let json = serde_json::to_value(Notification::Ended(event())).unwrap();
        assert_eq!(json["type"], "ended");
        assert_eq!(json["windowId"], 3);
        assert_eq!(json["gesture"], "drag");
        assert_eq!(json["width"], 200.0);
    }
}
