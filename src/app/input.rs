use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEventKind};

use crate::app::{Message, Model};
use crate::compose::Direction;
use crate::nav::{NavIntent, View};
use crate::session::EditOp;

/// Translate a terminal event into a message for the current view.
pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
    match event {
        Event::Key(key) => handle_key(*key, model),
        Event::Mouse(mouse) => match (model.view, mouse.kind) {
            (View::Preview, MouseEventKind::ScrollDown) => Some(Message::ScrollDown(3)),
            (View::Preview, MouseEventKind::ScrollUp) => Some(Message::ScrollUp(3)),
            _ => None,
        },
        Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
        _ => None,
    }
}

fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
    // Ctrl+C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }
    match model.view {
        View::Parent => handle_parent_key(key),
        View::Editing => handle_editing_key(key),
        View::Preview => handle_preview_key(key, model),
    }
}

fn handle_parent_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('e') => Some(Message::StartWriting),
        KeyCode::Char('p') => Some(Message::Navigate(NavIntent::GoPreview)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        _ => None,
    }
}

fn handle_editing_key(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('p') => Some(Message::Navigate(NavIntent::GoPreview)),
            KeyCode::Char('n') => Some(Message::NewDraft),
            KeyCode::Char('b') => Some(Message::ToggleSidebar),
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Left => Some(Message::Edit(EditOp::MoveWordLeft)),
            KeyCode::Right => Some(Message::Edit(EditOp::MoveWordRight)),
            KeyCode::Home => Some(Message::Edit(EditOp::MoveToStart)),
            KeyCode::End => Some(Message::Edit(EditOp::MoveToEnd)),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Esc => Some(Message::Navigate(NavIntent::GoBack)),
        KeyCode::Enter => Some(Message::Edit(EditOp::InsertNewline)),
        KeyCode::Backspace => Some(Message::Edit(EditOp::DeleteBack)),
        KeyCode::Delete => Some(Message::Edit(EditOp::DeleteForward)),
        KeyCode::Left => Some(Message::Edit(EditOp::Move(Direction::Left))),
        KeyCode::Right => Some(Message::Edit(EditOp::Move(Direction::Right))),
        KeyCode::Up => Some(Message::Edit(EditOp::Move(Direction::Up))),
        KeyCode::Down => Some(Message::Edit(EditOp::Move(Direction::Down))),
        KeyCode::Home => Some(Message::Edit(EditOp::MoveHome)),
        KeyCode::End => Some(Message::Edit(EditOp::MoveEnd)),
        KeyCode::Tab => Some(Message::Edit(EditOp::InsertChar('\t'))),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Message::Edit(EditOp::InsertChar(c)))
        }
        _ => None,
    }
}

fn handle_preview_key(key: KeyEvent, model: &Model) -> Option<Message> {
    let page = model.body_height().max(1);
    match key.code {
        KeyCode::Esc | KeyCode::Char('b') => Some(Message::Navigate(NavIntent::GoBack)),
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Message::ScrollDown(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(Message::ScrollUp(1)),
        KeyCode::Char(' ') | KeyCode::PageDown => Some(Message::ScrollDown(page)),
        KeyCode::PageUp => Some(Message::ScrollUp(page)),
        KeyCode::Char('g') | KeyCode::Home => Some(Message::ScrollUp(usize::MAX)),
        KeyCode::Char('G') | KeyCode::End => Some(Message::ScrollDown(usize::MAX)),
        _ => None,
    }
}
