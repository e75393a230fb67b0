//! Mapping from terminal events to card intents.

use crate::types::{ButtonLayout, UserIntent};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map a left click on one of the buttons to its intent.
pub fn handle_mouse_event(mouse: MouseEvent, layout: &ButtonLayout) -> Option<UserIntent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => layout.hit(mouse.column, mouse.row),
        _ => None,
    }
}

/// Check if key should close the window.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// What the runner should do with one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Intent(UserIntent),
    Quit,
    Resize,
    Ignore,
}

pub fn map_event(event: &Event, layout: &ButtonLayout) -> InputOutcome {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(*key) => InputOutcome::Quit,
        Event::Mouse(mouse) => handle_mouse_event(*mouse, layout)
            .map(InputOutcome::Intent)
            .unwrap_or(InputOutcome::Ignore),
        Event::Resize(_, _) => InputOutcome::Resize,
        _ => InputOutcome::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    fn layout() -> ButtonLayout {
        ButtonLayout {
            dont_know: Rect::new(10, 20, 16, 1),
            know: Rect::new(40, 20, 10, 1),
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_click_buttons() {
        let l = layout();
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 12, 20), &l),
            Some(UserIntent::DontKnow)
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 45, 20), &l),
            Some(UserIntent::Know)
        );
    }

    #[test]
    fn test_click_outside_buttons() {
        let l = layout();
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 30, 20), &l),
            None
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 45, 19), &l),
            None
        );
    }

    #[test]
    fn test_only_left_press_counts() {
        let l = layout();
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 45, 20), &l),
            None
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 45, 20), &l),
            None
        );
        assert_eq!(handle_mouse_event(mouse(MouseEventKind::Moved, 45, 20), &l), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_keys_are_not_intents() {
        let l = layout();
        assert_eq!(
            map_event(&Event::Key(KeyEvent::from(KeyCode::Char(' '))), &l),
            InputOutcome::Ignore
        );
        assert_eq!(
            map_event(&Event::Key(KeyEvent::from(KeyCode::Right)), &l),
            InputOutcome::Ignore
        );
    }

    #[test]
    fn test_map_event() {
        let l = layout();
        assert_eq!(
            map_event(&Event::Key(KeyEvent::from(KeyCode::Char('q'))), &l),
            InputOutcome::Quit
        );
        assert_eq!(map_event(&Event::Resize(80, 24), &l), InputOutcome::Resize);
        assert_eq!(
            map_event(
                &Event::Mouse(mouse(MouseEventKind::Down(MouseButton::Left), 41, 20)),
                &l
            ),
            InputOutcome::Intent(UserIntent::Know)
        );
    }
}
