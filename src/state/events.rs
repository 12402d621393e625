//! Events Module - Host pointer signals and listener registry
//!
//! The thread-local listener registry plays the role of the window/document:
//! components subscribe to pointer signals here and receive a cleanup closure
//! that removes the registration again.
//!
//! # API
//!
//! - `on(kind, fn)` - Subscribe to one kind of pointer signal
//! - `on_pointer_move`, `on_pointer_down`, `on_pointer_up` - Shorthands
//! - `on_pointer_enter`, `on_pointer_leave` - Window enter/leave
//! - `on_resize(fn)` - Display surface resize
//! - `dispatch(event)` - Deliver a pointer signal to its listeners
//! - `dispatch_resize(viewport)` - Deliver a resize
//!
//! # Example
//!
//! ```ignore
//! use folio_cursor::state::events::{self, PointerEvent};
//!
//! let cleanup = events::on_pointer_move(|event| {
//!     println!("Pointer at ({}, {})", event.x, event.y);
//! });
//!
//! events::dispatch(PointerEvent::move_to(10, 4));
//! cleanup();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::{Point, Viewport};

// =============================================================================
// TYPES
// =============================================================================

/// Pointer signal kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Move,
    Down,
    Up,
    /// Pointer entered the window.
    Enter,
    /// Pointer left the window.
    Leave,
}

/// Pointer button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    #[default]
    None,
}

/// A pointer signal from the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub button: PointerButton,
    /// X coordinate (0-indexed)
    pub x: u16,
    /// Y coordinate (0-indexed)
    pub y: u16,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, button: PointerButton, x: u16, y: u16) -> Self {
        Self { kind, button, x, y }
    }

    /// Create a pointer move event
    pub fn move_to(x: u16, y: u16) -> Self {
        Self::new(PointerKind::Move, PointerButton::None, x, y)
    }

    /// Create a pointer down event
    pub fn down(button: PointerButton, x: u16, y: u16) -> Self {
        Self::new(PointerKind::Down, button, x, y)
    }

    /// Create a pointer up event
    pub fn up(button: PointerButton, x: u16, y: u16) -> Self {
        Self::new(PointerKind::Up, button, x, y)
    }

    /// Create a window enter event
    pub fn enter() -> Self {
        Self::new(PointerKind::Enter, PointerButton::None, 0, 0)
    }

    /// Create a window leave event
    pub fn leave() -> Self {
        Self::new(PointerKind::Leave, PointerButton::None, 0, 0)
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

/// Handler for pointer signals.
pub type PointerHandler = Rc<dyn Fn(&PointerEvent)>;

/// Handler for display surface resizes.
pub type ResizeHandler = Rc<dyn Fn(Viewport)>;

struct ListenerRegistry {
    pointer: Vec<(usize, PointerKind, PointerHandler)>,
    resize: Vec<(usize, ResizeHandler)>,
    next_id: usize,
}

impl ListenerRegistry {
    fn new() -> Self {
        Self {
            pointer: Vec::new(),
            resize: Vec::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

thread_local! {
    static REGISTRY: RefCell<ListenerRegistry> = RefCell::new(ListenerRegistry::new());
}

// =============================================================================
// PUBLIC API - REGISTRATION
// =============================================================================

/// Register a listener for one kind of pointer signal. Returns cleanup function.
pub fn on<F>(kind: PointerKind, handler: F) -> impl FnOnce()
where
    F: Fn(&PointerEvent) + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.pointer.push((id, kind, Rc::new(handler)));
        id
    });
    tracing::debug!(id, ?kind, "pointer listener registered");

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            reg.pointer.retain(|(listener_id, _, _)| *listener_id != id);
        });
        tracing::debug!(id, ?kind, "pointer listener removed");
    }
}

/// Register a pointer move listener. Returns cleanup function.
pub fn on_pointer_move<F>(handler: F) -> impl FnOnce()
where
    F: Fn(&PointerEvent) + 'static,
{
    on(PointerKind::Move, handler)
}

/// Register a pointer down listener. Returns cleanup function.
pub fn on_pointer_down<F>(handler: F) -> impl FnOnce()
where
    F: Fn(&PointerEvent) + 'static,
{
    on(PointerKind::Down, handler)
}

/// Register a pointer up listener. Returns cleanup function.
pub fn on_pointer_up<F>(handler: F) -> impl FnOnce()
where
    F: Fn(&PointerEvent) + 'static,
{
    on(PointerKind::Up, handler)
}

/// Register a window enter listener. Returns cleanup function.
pub fn on_pointer_enter<F>(handler: F) -> impl FnOnce()
where
    F: Fn(&PointerEvent) + 'static,
{
    on(PointerKind::Enter, handler)
}

/// Register a window leave listener. Returns cleanup function.
pub fn on_pointer_leave<F>(handler: F) -> impl FnOnce()
where
    F: Fn(&PointerEvent) + 'static,
{
    on(PointerKind::Leave, handler)
}

/// Register a resize listener. Returns cleanup function.
pub fn on_resize<F>(handler: F) -> impl FnOnce()
where
    F: Fn(Viewport) + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.resize.push((id, Rc::new(handler)));
        id
    });
    tracing::debug!(id, "resize listener registered");

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            reg.resize.retain(|(listener_id, _)| *listener_id != id);
        });
        tracing::debug!(id, "resize listener removed");
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Dispatch a pointer signal to every listener of its kind.
/// Returns the number of listeners invoked.
///
/// Handlers are collected before any runs, so a handler may register or
/// remove listeners; changes take effect from the next dispatch.
pub fn dispatch(event: PointerEvent) -> usize {
    let handlers: Vec<PointerHandler> = REGISTRY.with(|reg| {
        reg.borrow()
            .pointer
            .iter()
            .filter(|(_, kind, _)| *kind == event.kind)
            .map(|(_, _, handler)| handler.clone())
            .collect()
    });

    tracing::trace!(kind = ?event.kind, x = event.x, y = event.y, listeners = handlers.len(), "dispatch");

    for handler in &handlers {
        handler(&event);
    }
    handlers.len()
}

/// Dispatch a resize to every resize listener.
/// Returns the number of listeners invoked.
pub fn dispatch_resize(viewport: Viewport) -> usize {
    let handlers: Vec<ResizeHandler> = REGISTRY.with(|reg| {
        reg.borrow()
            .resize
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect()
    });

    tracing::trace!(width = viewport.width, height = viewport.height, listeners = handlers.len(), "dispatch resize");

    for handler in &handlers {
        handler(viewport);
    }
    handlers.len()
}

/// Number of registered listeners (pointer and resize).
pub fn listener_count() -> usize {
    REGISTRY.with(|reg| {
        let reg = reg.borrow();
        reg.pointer.len() + reg.resize.len()
    })
}

// =============================================================================
// CLEANUP
// =============================================================================

/// Remove all listeners and reset ids (for testing)
pub fn reset_events() {
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.pointer.clear();
        reg.resize.clear();
        reg.next_id = 0;
    });
}

// =============================================================================
// TESTS
// =============================================================================
