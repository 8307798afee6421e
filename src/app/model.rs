use crate::entries::PastEntries;
use crate::identity::Identity;
use crate::nav::View;
use crate::session::EditSession;
use crate::store::ContentStore;

/// The complete application state.
///
/// All state lives here - no global or scattered state. The content store
/// is owned by the model and reached only through explicit handles: the
/// edit session borrows it per change event, the views read it per render.
pub struct Model {
    /// Currently active page
    pub view: View,
    /// Shared content store holding the entry being composed
    pub store: ContentStore,
    /// Mounted editing surface, present while an editing session is open
    pub session: Option<EditSession>,
    /// Resolved display identity (read-only)
    pub identity: Identity,
    /// Past-entry titles shown in the sidebar (read-only)
    pub entries: PastEntries,
    /// Whether the past-entries sidebar is shown in the editing view
    pub sidebar_visible: bool,
    /// First visible line of the compose area
    pub compose_scroll: usize,
    /// First visible line of the preview
    pub preview_scroll: usize,
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Model {
    /// Create a new model with default settings.
    pub fn new(identity: Identity, entries: PastEntries, terminal_size: (u16, u16)) -> Self {
        Self {
            view: View::Parent,
            store: ContentStore::new(),
            session: None,
            identity,
            entries,
            sidebar_visible: true,
            compose_scroll: 0,
            preview_scroll: 0,
            width: terminal_size.0,
            height: terminal_size.1,
            should_quit: false,
        }
    }

    /// Mount an editing session from the store if none is open.
    pub fn ensure_session(&mut self) {
        if self.session.is_none() {
            self.session = Some(EditSession::mount(&self.store));
        }
    }

    /// Rows available for content between the header and status bar.
    pub const fn body_height(&self) -> usize {
        self.height.saturating_sub(2) as usize
    }

    /// Keep the compose cursor inside the visible rows.
    pub fn ensure_cursor_visible(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        let cursor_line = session.area().cursor().line;
        let visible = self.body_height();
        if visible == 0 {
            self.compose_scroll = cursor_line;
            return;
        }
        if cursor_line < self.compose_scroll {
            self.compose_scroll = cursor_line;
        } else if cursor_line >= self.compose_scroll + visible {
            self.compose_scroll = cursor_line + 1 - visible;
        }
    }

    /// Total preview lines for the current markup.
    pub fn preview_line_count(&self) -> usize {
        crate::preview::render_markup(self.store.get().markup()).len()
    }

    pub fn max_preview_scroll(&self) -> usize {
        self.preview_line_count().saturating_sub(self.body_height())
    }

    pub fn clamp_scrolls(&mut self) {
        self.preview_scroll = self.preview_scroll.min(self.max_preview_scroll());
        if let Some(session) = &self.session {
            let max = session.area().line_count().saturating_sub(1);
            self.compose_scroll = self.compose_scroll.min(max);
        } else {
            self.compose_scroll = 0;
        }
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("view", &self.view)
            .field("revision", &self.store.revision())
            .field("session_open", &self.session.is_some())
            .field("sidebar_visible", &self.sidebar_visible)
            .finish_non_exhaustive()
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new(Identity::named(""), PastEntries::placeholder(), (80, 24))
    }
}
