use super::input::handle_event;
use super::{Message, Model, update};
use crate::compose::Direction;
use crate::entries::PastEntries;
use crate::identity::Identity;
use crate::nav::{NavIntent, View};
use crate::session::EditOp;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

fn create_test_model() -> Model {
    Model::new(Identity::named("Ada"), PastEntries::placeholder(), (80, 24))
}

fn editing_model() -> Model {
    update(create_test_model(), Message::StartWriting)
}

fn type_text(mut model: Model, text: &str) -> Model {
    for ch in text.chars() {
        let op = if ch == '\n' {
            EditOp::InsertNewline
        } else {
            EditOp::InsertChar(ch)
        };
        model = update(model, Message::Edit(op));
    }
    model
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl_key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

#[test]
fn test_start_writing_opens_session() {
    let model = editing_model();
    assert_eq!(model.view, View::Editing);
    assert!(model.session.is_some());
}

#[test]
fn test_start_writing_ignored_outside_parent() {
    let mut model = editing_model();
    model = update(model, Message::Navigate(NavIntent::GoPreview));
    let model = update(model, Message::StartWriting);
    assert_eq!(model.view, View::Preview);
}

#[test]
fn test_typing_commits_every_keystroke() {
    let mut model = editing_model();
    model = update(model, Message::Edit(EditOp::InsertChar('H')));
    assert_eq!(model.store.get().markup(), "H");
    model = update(model, Message::Edit(EditOp::InsertChar('i')));
    assert_eq!(model.store.get().markup(), "Hi");
}

#[test]
fn test_store_holds_latest_across_views() {
    // Type, open the preview, come back, keep typing. The store is the
    // single source of truth throughout.
    let mut model = type_text(editing_model(), "Hi");
    model = update(model, Message::Navigate(NavIntent::GoPreview));
    assert_eq!(model.store.get().markup(), "Hi");

    model = update(model, Message::Navigate(NavIntent::GoBack));
    assert_eq!(model.view, View::Editing);
    model = type_text(model, " there");
    model = update(model, Message::Navigate(NavIntent::GoPreview));
    assert_eq!(model.store.get().markup(), "Hi there");
}

#[test]
fn test_navigation_does_not_touch_store() {
    let mut model = type_text(editing_model(), "untouched");
    let revision = model.store.revision();

    model = update(model, Message::Navigate(NavIntent::GoPreview));
    model = update(model, Message::Navigate(NavIntent::GoBack));
    model = update(model, Message::Navigate(NavIntent::GoBack));
    model = update(model, Message::Navigate(NavIntent::GoPreview));

    assert_eq!(model.store.get().markup(), "untouched");
    assert_eq!(model.store.revision(), revision);
}

#[test]
fn test_back_to_parent_closes_session_but_retains_content() {
    let mut model = type_text(editing_model(), "kept");
    model = update(model, Message::Navigate(NavIntent::GoBack));
    assert_eq!(model.view, View::Parent);
    assert!(model.session.is_none());
    assert_eq!(model.store.get().markup(), "kept");
}

#[test]
fn test_remount_resumes_from_store() {
    let mut model = type_text(editing_model(), "resume me");
    model = update(model, Message::Navigate(NavIntent::GoBack));
    model = update(model, Message::StartWriting);

    let session = model.session.as_ref().unwrap();
    assert_eq!(session.area().markup(), "resume me");
    model = type_text(model, "!");
    assert_eq!(model.store.get().markup(), "resume me!");
}

#[test]
fn test_preview_entered_directly_reads_store() {
    // Jumping straight from the parent page to the preview never opens
    // a session; the preview reads whatever the store holds.
    let model = update(create_test_model(), Message::Navigate(NavIntent::GoPreview));
    assert_eq!(model.view, View::Preview);
    assert!(model.session.is_none());
    assert!(model.store.get().is_empty());
}

#[test]
fn test_new_draft_resets_store_and_session() {
    let mut model = type_text(editing_model(), "old entry");
    model = update(model, Message::NewDraft);
    assert!(model.store.get().is_empty());
    assert!(model.session.as_ref().unwrap().area().markup().is_empty());
    assert_eq!(model.compose_scroll, 0);
}

#[test]
fn test_new_draft_ignored_outside_editing() {
    let mut model = type_text(editing_model(), "safe");
    model = update(model, Message::Navigate(NavIntent::GoPreview));
    model = update(model, Message::NewDraft);
    assert_eq!(model.store.get().markup(), "safe");
}

#[test]
fn test_edits_ignored_outside_editing() {
    let mut model = update(create_test_model(), Message::Navigate(NavIntent::GoPreview));
    model = update(model, Message::Edit(EditOp::InsertChar('x')));
    assert!(model.store.get().is_empty());
}

#[test]
fn test_movement_does_not_bump_revision() {
    let mut model = type_text(editing_model(), "abc");
    let revision = model.store.revision();
    model = update(model, Message::Edit(EditOp::Move(Direction::Left)));
    model = update(model, Message::Edit(EditOp::MoveHome));
    assert_eq!(model.store.revision(), revision);
}

#[test]
fn test_preview_scroll_clamped() {
    let mut model = type_text(editing_model(), "short");
    model = update(model, Message::Navigate(NavIntent::GoPreview));
    model = update(model, Message::ScrollDown(usize::MAX));
    assert_eq!(model.preview_scroll, 0);
    model = update(model, Message::ScrollUp(10));
    assert_eq!(model.preview_scroll, 0);
}

#[test]
fn test_preview_scroll_resets_on_view_change() {
    let mut markup = String::new();
    for i in 0..80 {
        markup.push_str(&format!("line {}\n\n", i));
    }
    let mut model = type_text(editing_model(), &markup);
    model = update(model, Message::Navigate(NavIntent::GoPreview));
    model = update(model, Message::ScrollDown(10));
    assert!(model.preview_scroll > 0);
    model = update(model, Message::Navigate(NavIntent::GoBack));
    model = update(model, Message::Navigate(NavIntent::GoPreview));
    assert_eq!(model.preview_scroll, 0);
}

#[test]
fn test_scroll_ignored_outside_preview() {
    let mut model = type_text(editing_model(), "a\nb\nc");
    model = update(model, Message::ScrollDown(5));
    assert_eq!(model.preview_scroll, 0);
}

#[test]
fn test_toggle_sidebar() {
    let model = editing_model();
    assert!(model.sidebar_visible);
    let model = update(model, Message::ToggleSidebar);
    assert!(!model.sidebar_visible);
    let model = update(model, Message::ToggleSidebar);
    assert!(model.sidebar_visible);
}

#[test]
fn test_resize_updates_dimensions() {
    let model = update(editing_model(), Message::Resize(120, 40));
    assert_eq!(model.width, 120);
    assert_eq!(model.height, 40);
    assert_eq!(model.body_height(), 38);
}

#[test]
fn test_quit_sets_flag() {
    let model = update(create_test_model(), Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_cursor_scrolls_into_view() {
    let mut model = editing_model();
    for i in 0..40 {
        model = type_text(model, &format!("line {}\n", i));
    }
    let cursor_line = model.session.as_ref().unwrap().area().cursor().line;
    assert!(cursor_line >= model.compose_scroll);
    assert!(cursor_line < model.compose_scroll + model.body_height());
}

// ---- Input translation ----

#[test]
fn test_parent_keys() {
    let model = create_test_model();
    assert_eq!(
        handle_event(&key(KeyCode::Enter), &model),
        Some(Message::StartWriting)
    );
    assert_eq!(
        handle_event(&key(KeyCode::Char('p')), &model),
        Some(Message::Navigate(NavIntent::GoPreview))
    );
    assert_eq!(
        handle_event(&key(KeyCode::Char('q')), &model),
        Some(Message::Quit)
    );
}

#[test]
fn test_editing_chars_become_inserts() {
    let model = editing_model();
    assert_eq!(
        handle_event(&key(KeyCode::Char('x')), &model),
        Some(Message::Edit(EditOp::InsertChar('x')))
    );
    assert_eq!(
        handle_event(&key(KeyCode::Enter), &model),
        Some(Message::Edit(EditOp::InsertNewline))
    );
    assert_eq!(
        handle_event(&key(KeyCode::Backspace), &model),
        Some(Message::Edit(EditOp::DeleteBack))
    );
}

#[test]
fn test_editing_escape_goes_back() {
    let model = editing_model();
    assert_eq!(
        handle_event(&key(KeyCode::Esc), &model),
        Some(Message::Navigate(NavIntent::GoBack))
    );
}

#[test]
fn test_editing_control_shortcuts() {
    let model = editing_model();
    assert_eq!(
        handle_event(&ctrl_key('p'), &model),
        Some(Message::Navigate(NavIntent::GoPreview))
    );
    assert_eq!(handle_event(&ctrl_key('n'), &model), Some(Message::NewDraft));
    assert_eq!(
        handle_event(&ctrl_key('b'), &model),
        Some(Message::ToggleSidebar)
    );
}

#[test]
fn test_ctrl_c_quits_everywhere() {
    let parent = create_test_model();
    let editing = editing_model();
    assert_eq!(handle_event(&ctrl_key('c'), &parent), Some(Message::Quit));
    assert_eq!(handle_event(&ctrl_key('c'), &editing), Some(Message::Quit));
}

#[test]
fn test_preview_keys() {
    let mut model = editing_model();
    model = update(model, Message::Navigate(NavIntent::GoPreview));
    assert_eq!(
        handle_event(&key(KeyCode::Char('j')), &model),
        Some(Message::ScrollDown(1))
    );
    assert_eq!(
        handle_event(&key(KeyCode::Esc), &model),
        Some(Message::Navigate(NavIntent::GoBack))
    );
    assert_eq!(
        handle_event(&key(KeyCode::Char('G')), &model),
        Some(Message::ScrollDown(usize::MAX))
    );
}

#[test]
fn test_resize_event_translates() {
    let model = create_test_model();
    assert_eq!(
        handle_event(&Event::Resize(100, 30), &model),
        Some(Message::Resize(100, 30))
    );
}
