use crate::ui::session::SessionEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn map_key(key: KeyEvent) -> Option<SessionEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(SessionEvent::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(SessionEvent::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(SessionEvent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(SessionEvent::MoveDown),
        KeyCode::Char('d') | KeyCode::Delete => Some(SessionEvent::DeleteCurrent),
        _ => None,
    }
}
