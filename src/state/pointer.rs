//! Pointer Module - Event types and crossterm bridge
//!
//! Converts crossterm's cell-based mouse events into the engine's page-space
//! pointer events and owns mouse-capture setup/teardown. Does NOT own a
//! dispatch registry: each card routes its own events.
//!
//! # API
//!
//! - `PointerEvent` - move/leave/down/up in f32 page coordinates
//! - `convert_mouse_event` - crossterm MouseEvent -> PointerEvent
//! - `poll_event` / `read_event` - event loop plumbing
//! - `enable_mouse` / `disable_mouse` - mouse capture control
//!
//! # Example
//!
//! ```ignore
//! use tiltcard::state::pointer::{poll_event, enable_mouse};
//! use std::time::Duration;
//!
//! enable_mouse()?;
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         card.handle_event(&event);
//!     }
//! }
//! ```

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyModifiers,
    MouseButton as CrosstermMouseButton, MouseEvent as CrosstermMouseEvent, MouseEventKind, poll,
    read,
};
use crossterm::execute;
use std::io::stdout;
use std::time::Duration;

// =============================================================================
// TYPES
// =============================================================================

/// Pointer action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Pointer moved (or dragged) over the page.
    Move,
    /// Pointer left the tracked surface.
    Leave,
    /// Button pressed.
    Down,
    /// Button released.
    Up,
}

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    #[default]
    None,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

/// A pointer event in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Action type.
    pub action: PointerAction,
    /// Button involved (None for plain moves).
    pub button: PointerButton,
    /// X coordinate in page space.
    pub page_x: f32,
    /// Y coordinate in page space.
    pub page_y: f32,
    /// Modifier keys state.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a move event.
    pub fn move_to(page_x: f32, page_y: f32) -> Self {
        Self {
            action: PointerAction::Move,
            button: PointerButton::None,
            page_x,
            page_y,
            modifiers: Modifiers::default(),
        }
    }

    /// Create a leave event. Coordinates are meaningless on leave and set to
    /// zero.
    pub fn leave() -> Self {
        Self {
            action: PointerAction::Leave,
            button: PointerButton::None,
            page_x: 0.0,
            page_y: 0.0,
            modifiers: Modifiers::default(),
        }
    }

    /// Create a left-button down event.
    pub fn down(page_x: f32, page_y: f32) -> Self {
        Self {
            action: PointerAction::Down,
            button: PointerButton::Left,
            page_x,
            page_y,
            modifiers: Modifiers::default(),
        }
    }

    /// Create a left-button up event.
    pub fn up(page_x: f32, page_y: f32) -> Self {
        Self {
            action: PointerAction::Up,
            button: PointerButton::Left,
            page_x,
            page_y,
            modifiers: Modifiers::default(),
        }
    }
}

// =============================================================================
// EVENT CONVERSION
// =============================================================================

/// Convert a crossterm MouseEvent to a PointerEvent.
///
/// Drags count as moves (a pressed button does not change the tilt math).
/// Scroll events have no pointer-pose meaning and yield None.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> Option<PointerEvent> {
    let (action, button) = match event.kind {
        MouseEventKind::Down(btn) => (PointerAction::Down, convert_mouse_button(btn)),
        MouseEventKind::Up(btn) => (PointerAction::Up, convert_mouse_button(btn)),
        MouseEventKind::Moved => (PointerAction::Move, PointerButton::None),
        MouseEventKind::Drag(btn) => (PointerAction::Move, convert_mouse_button(btn)),
        MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => return None,
    };

    Some(PointerEvent {
        action,
        button,
        page_x: event.column as f32,
        page_y: event.row as f32,
        modifiers: convert_modifiers(event.modifiers),
    })
}

/// Convert crossterm MouseButton to PointerButton.
fn convert_mouse_button(btn: CrosstermMouseButton) -> PointerButton {
    match btn {
        CrosstermMouseButton::Left => PointerButton::Left,
        CrosstermMouseButton::Middle => PointerButton::Middle,
        CrosstermMouseButton::Right => PointerButton::Right,
    }
}

/// Convert crossterm KeyModifiers to Modifiers.
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: false, // Not exposed by crossterm
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for a pointer event with timeout.
///
/// Returns None if no event arrived within the timeout, or if the next event
/// was not a pointer event (keyboard and resize events are for the host).
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<PointerEvent>> {
    if poll(timeout)? {
        read_event()
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking), discarding non-pointer events.
pub fn read_event() -> std::io::Result<Option<PointerEvent>> {
    match read()? {
        CrosstermEvent::Mouse(mouse) => Ok(convert_mouse_event(mouse)),
        _ => Ok(None),
    }
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable terminal mouse capture.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable terminal mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn crossterm_event(kind: MouseEventKind, column: u16, row: u16) -> CrosstermMouseEvent {
        CrosstermMouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn test_convert_move() {
        let event = convert_mouse_event(crossterm_event(MouseEventKind::Moved, 12, 7))
            .expect("moves convert");
        assert_eq!(event.action, PointerAction::Move);
        assert_eq!(event.button, PointerButton::None);
        assert_eq!(event.page_x, 12.0);
        assert_eq!(event.page_y, 7.0);
    }

    #[test]
    fn test_convert_drag_is_move() {
        let event = convert_mouse_event(crossterm_event(
            MouseEventKind::Drag(CrosstermMouseButton::Left),
            3,
            4,
        ))
        .expect("drags convert");
        assert_eq!(event.action, PointerAction::Move);
        assert_eq!(event.button, PointerButton::Left);
    }

    #[test]
    fn test_convert_down_up() {
        let down = convert_mouse_event(crossterm_event(
            MouseEventKind::Down(CrosstermMouseButton::Right),
            1,
            1,
        ))
        .expect("downs convert");
        assert_eq!(down.action, PointerAction::Down);
        assert_eq!(down.button, PointerButton::Right);

        let up = convert_mouse_event(crossterm_event(
            MouseEventKind::Up(CrosstermMouseButton::Middle),
            1,
            1,
        ))
        .expect("ups convert");
        assert_eq!(up.action, PointerAction::Up);
        assert_eq!(up.button, PointerButton::Middle);
    }

    #[test]
    fn test_scroll_ignored() {
        assert!(convert_mouse_event(crossterm_event(MouseEventKind::ScrollUp, 1, 1)).is_none());
        assert!(convert_mouse_event(crossterm_event(MouseEventKind::ScrollDown, 1, 1)).is_none());
    }

    #[test]
    fn test_convert_modifiers() {
        let mut raw = crossterm_event(MouseEventKind::Moved, 0, 0);
        raw.modifiers = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
        let event = convert_mouse_event(raw).expect("moves convert");
        assert!(event.modifiers.ctrl);
        assert!(event.modifiers.shift);
        assert!(!event.modifiers.alt);
    }

    #[test]
    fn test_constructors() {
        let m = PointerEvent::move_to(10.0, 20.0);
        assert_eq!(m.action, PointerAction::Move);

        let l = PointerEvent::leave();
        assert_eq!(l.action, PointerAction::Leave);
        assert_eq!(l.page_x, 0.0);

        assert_eq!(PointerEvent::down(1.0, 2.0).button, PointerButton::Left);
        assert_eq!(PointerEvent::up(1.0, 2.0).action, PointerAction::Up);
    }
}
