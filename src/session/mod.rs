//! Editing surface adapter.
//!
//! [`EditSession`] is the one-directional bridge between the compose area
//! and the [`ContentStore`](crate::store::ContentStore). It seeds the area
//! from the store exactly once at mount, then translates each edit
//! operation into an area mutation and pushes the area's full markup into
//! the store. The store's value is never re-injected into the area after
//! mount, so no feedback loop can form, and because operations are applied
//! synchronously in emission order the store always reflects the most
//! recent edit.

use tracing::debug;

use crate::compose::{ComposeArea, Direction};
use crate::store::ContentStore;

/// A single change notification or cursor command from the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Type a character at the cursor
    InsertChar(char),
    /// Split the line at the cursor (Enter)
    InsertNewline,
    /// Delete the character before the cursor (Backspace)
    DeleteBack,
    /// Delete the character at the cursor (Delete)
    DeleteForward,
    /// Move the cursor one cell
    Move(Direction),
    /// Move to the beginning of the line (Home)
    MoveHome,
    /// Move to the end of the line (End)
    MoveEnd,
    /// Move one word left (Ctrl+Left)
    MoveWordLeft,
    /// Move one word right (Ctrl+Right)
    MoveWordRight,
    /// Move to the start of the entry (Ctrl+Home)
    MoveToStart,
    /// Move to the end of the entry (Ctrl+End)
    MoveToEnd,
}

/// The mounted editing surface for the current session.
pub struct EditSession {
    area: ComposeArea,
}

impl EditSession {
    /// Mount the editing surface, seeding it from the store's current
    /// buffer. This is the only point where store content flows into the
    /// compose area. The cursor starts at the end of the seeded content
    /// so a resumed session continues where the last one left off.
    pub fn mount(store: &ContentStore) -> Self {
        let mut area = ComposeArea::from_markup(store.get().markup());
        area.move_to_end();
        Self { area }
    }

    /// Apply one operation.
    ///
    /// Content-mutating operations push the area's full serialized markup
    /// into the store; pure cursor movement emits no change notification.
    pub fn apply(&mut self, op: EditOp, store: &mut ContentStore) {
        let changed = match op {
            EditOp::InsertChar(ch) => self.area.insert_char(ch),
            EditOp::InsertNewline => self.area.newline(),
            EditOp::DeleteBack => self.area.delete_back(),
            EditOp::DeleteForward => self.area.delete_forward(),
            EditOp::Move(dir) => {
                self.area.move_cursor(dir);
                false
            }
            EditOp::MoveHome => {
                self.area.move_home();
                false
            }
            EditOp::MoveEnd => {
                self.area.move_end();
                false
            }
            EditOp::MoveWordLeft => {
                self.area.move_word_left();
                false
            }
            EditOp::MoveWordRight => {
                self.area.move_word_right();
                false
            }
            EditOp::MoveToStart => {
                self.area.move_to_start();
                false
            }
            EditOp::MoveToEnd => {
                self.area.move_to_end();
                false
            }
        };
        if changed && store.set(self.area.markup()) {
            debug!(revision = store.revision(), "session committed markup");
        }
    }

    /// The compose area, read-only, for rendering.
    pub const fn area(&self) -> &ComposeArea {
        &self.area
    }
}

impl std::fmt::Debug for EditSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditSession").field("area", &self.area).finish()
    }
}
