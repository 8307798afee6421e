use crate::app::Model;
use crate::nav::{self, NavIntent, View};
use crate::session::{EditOp, EditSession};

/// All possible events and actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Issue a navigation intent to the view router
    Navigate(NavIntent),
    /// Open the editing view from the parent page
    StartWriting,
    /// An operation emitted by the editing surface
    Edit(EditOp),
    /// Discard the current entry and start an empty one
    NewDraft,
    /// Scroll the active view up by n lines
    ScrollUp(usize),
    /// Scroll the active view down by n lines
    ScrollDown(usize),
    /// Toggle the past-entries sidebar
    ToggleSidebar,
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here, one
/// message at a time, each to completion. Navigation never touches the
/// content store; edits reach it only through the session adapter.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::Navigate(intent) => {
            let next = nav::transition(model.view, intent);
            if next != model.view {
                model.preview_scroll = 0;
            }
            model.view = next;
            match model.view {
                // Mount fidelity: entering the editor without an open
                // session seeds the surface from the store.
                View::Editing => model.ensure_session(),
                // Back to the parent ends the editing session. The last
                // committed markup stays in the store.
                View::Parent => model.session = None,
                View::Preview => {}
            }
        }
        Message::StartWriting => {
            if model.view == View::Parent {
                model.view = View::Editing;
                model.ensure_session();
                model.ensure_cursor_visible();
            }
        }
        Message::Edit(op) => {
            if model.view == View::Editing
                && let Some(mut session) = model.session.take()
            {
                session.apply(op, &mut model.store);
                model.session = Some(session);
                model.ensure_cursor_visible();
            }
        }
        Message::NewDraft => {
            if model.view == View::Editing {
                model.store.reset();
                model.session = Some(EditSession::mount(&model.store));
                model.compose_scroll = 0;
            }
        }
        Message::ScrollUp(n) => {
            if model.view == View::Preview {
                model.preview_scroll = model.preview_scroll.saturating_sub(n);
            }
        }
        Message::ScrollDown(n) => {
            if model.view == View::Preview {
                model.preview_scroll = model
                    .preview_scroll
                    .saturating_add(n)
                    .min(model.max_preview_scroll());
            }
        }
        Message::ToggleSidebar => {
            model.sidebar_visible = !model.sidebar_visible;
        }
        Message::Resize(width, height) => {
            model.width = width;
            model.height = height;
            model.clamp_scrolls();
            model.ensure_cursor_visible();
        }
        Message::Redraw => {}
        Message::Quit => {
            model.should_quit = true;
        }
    }
    model
}
