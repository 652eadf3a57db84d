//! Mapping crossterm events to board [`Action`]s.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What the user asked for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Main button at terminal position `(x, y)`.
    Place { x: u16, y: u16 },
    /// Secondary button at terminal position `(x, y)`.
    Erase { x: u16, y: u16 },
    /// Start a search.
    Run,
    /// Throw away the board.
    Clear,
    /// Stop the running search.
    Cancel,
    /// Leave the program.
    Quit,
    /// The terminal was resized.
    Resize { width: u16, height: u16 },
}

fn key_action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(' ') => Some(Action::Run),
        KeyCode::Char('c') => Some(Action::Clear),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}

fn mouse_action(me: MouseEvent) -> Option<Action> {
    let (x, y) = (me.column, me.row);
    match me.kind {
        // Dragging paints, as holding the button down did with a pointer.
        MouseEventKind::Down(btn) | MouseEventKind::Drag(btn) => match btn {
            MouseButton::Left => Some(Action::Place { x, y }),
            MouseButton::Right => Some(Action::Erase { x, y }),
            MouseButton::Middle => None,
        },
        _ => None,
    }
}

/// Translate one terminal event. Events with no meaning here yield `None`.
pub fn to_action(ev: &Event) -> Option<Action> {
    match ev {
        Event::Key(key) => key_action(*key),
        Event::Mouse(me) => mouse_action(*me),
        Event::Resize(width, height) => Some(Action::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys() {
        assert_eq!(to_action(&press(KeyCode::Char(' '))), Some(Action::Run));
        assert_eq!(to_action(&press(KeyCode::Char('c'))), Some(Action::Clear));
        assert_eq!(to_action(&press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(to_action(&press(KeyCode::Esc)), Some(Action::Cancel));
        assert_eq!(to_action(&press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(to_action(&ev), Some(Action::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(to_action(&Event::Key(key)), None);
    }

    #[test]
    fn mouse_buttons() {
        assert_eq!(
            to_action(&mouse(MouseEventKind::Down(MouseButton::Left), 4, 2)),
            Some(Action::Place { x: 4, y: 2 })
        );
        assert_eq!(
            to_action(&mouse(MouseEventKind::Drag(MouseButton::Right), 1, 7)),
            Some(Action::Erase { x: 1, y: 7 })
        );
        assert_eq!(
            to_action(&mouse(MouseEventKind::Up(MouseButton::Left), 4, 2)),
            None
        );
        assert_eq!(to_action(&mouse(MouseEventKind::Moved, 0, 0)), None);
    }

    #[test]
    fn resize() {
        assert_eq!(
            to_action(&Event::Resize(80, 24)),
            Some(Action::Resize {
                width: 80,
                height: 24
            })
        );
    }
}
