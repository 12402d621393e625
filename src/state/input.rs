//! Input Module - Event conversion and polling
//!
//! Bridges crossterm's event system with the pointer event bus.
//!
//! Terminals report no pointer enter/leave, so focus changes stand in for
//! them: losing focus is the pointer leaving the window, gaining focus is it
//! coming back.
//!
//! # API
//!
//! - `convert_mouse_event` - Convert crossterm MouseEvent to a PointerEvent
//! - `convert_event` - Convert any crossterm Event to a HostEvent
//! - `poll_event` - Non-blocking event check with timeout
//! - `read_event` - Blocking event read
//! - `route_event` - Dispatch event onto the bus
//! - `enable_capture` / `disable_capture` - Mouse capture and focus reporting
//!
//! # Example
//!
//! ```ignore
//! use folio_cursor::state::input::{poll_event, route_event};
//! use std::time::Duration;
//!
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         route_event(event);
//!     }
//! }
//! ```

use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
    Event as CrosstermEvent, KeyEvent, MouseButton as CrosstermMouseButton,
    MouseEvent as CrosstermMouseEvent, MouseEventKind, poll, read,
};
use crossterm::execute;
use std::io::stdout;
use std::time::Duration;

use super::events::{self, PointerButton, PointerEvent, PointerKind};
use crate::types::Viewport;

// =============================================================================
// HOST EVENT ENUM
// =============================================================================

/// Unified host event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Pointer signal (move, down, up, enter, leave)
    Pointer(PointerEvent),
    /// Display surface resized
    Resize(Viewport),
    /// Keyboard input, passed through untouched
    Key(KeyEvent),
    /// No event or unhandled event type
    None,
}

// =============================================================================
// CONVERSION
// =============================================================================

/// Convert crossterm MouseEvent to a PointerEvent.
///
/// Drags are movements with a button held; scrolling is not a pointer
/// signal and yields `None`.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> Option<PointerEvent> {
    let (kind, button) = match event.kind {
        MouseEventKind::Moved => (PointerKind::Move, PointerButton::None),
        MouseEventKind::Drag(btn) => (PointerKind::Move, convert_mouse_button(btn)),
        MouseEventKind::Down(btn) => (PointerKind::Down, convert_mouse_button(btn)),
        MouseEventKind::Up(btn) => (PointerKind::Up, convert_mouse_button(btn)),
        MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => return None,
    };

    Some(PointerEvent::new(kind, button, event.column, event.row))
}

fn convert_mouse_button(btn: CrosstermMouseButton) -> PointerButton {
    match btn {
        CrosstermMouseButton::Left => PointerButton::Left,
        CrosstermMouseButton::Right => PointerButton::Right,
        CrosstermMouseButton::Middle => PointerButton::Middle,
    }
}

/// Convert any crossterm Event to a HostEvent
pub fn convert_event(event: CrosstermEvent) -> HostEvent {
    match event {
        CrosstermEvent::Mouse(mouse) => match convert_mouse_event(mouse) {
            Some(pointer) => HostEvent::Pointer(pointer),
            None => HostEvent::None,
        },
        CrosstermEvent::FocusGained => HostEvent::Pointer(PointerEvent::enter()),
        CrosstermEvent::FocusLost => HostEvent::Pointer(PointerEvent::leave()),
        CrosstermEvent::Resize(w, h) => HostEvent::Resize(Viewport::new(w, h)),
        CrosstermEvent::Key(key) => HostEvent::Key(key),
        _ => HostEvent::None,
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<HostEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<HostEvent> {
    Ok(convert_event(read()?))
}

// =============================================================================
// EVENT ROUTING
// =============================================================================

/// Route an event onto the bus.
/// Returns the number of listeners invoked.
pub fn route_event(event: HostEvent) -> usize {
    match event {
        HostEvent::Pointer(pointer) => events::dispatch(pointer),
        HostEvent::Resize(viewport) => events::dispatch_resize(viewport),
        HostEvent::Key(_) | HostEvent::None => 0,
    }
}

// =============================================================================
// CAPTURE
// =============================================================================

/// Enable mouse capture and focus reporting.
pub fn enable_capture() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture, EnableFocusChange)
}

/// Disable mouse capture and focus reporting.
pub fn disable_capture() -> std::io::Result<()> {
    execute!(stdout(), DisableFocusChange, DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================
