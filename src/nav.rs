//! View navigation.
//!
//! Navigation intents carry no document payload; the destination view
//! reads the shared content store itself at its own render time. The
//! controller issues transitions and never confirms arrival.

/// A request for a view transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// Return to the previous view in the page hierarchy
    GoBack,
    /// Open the preview of the current entry
    GoPreview,
}

/// The currently active page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing page with the past-entries list
    #[default]
    Parent,
    /// The composing surface
    Editing,
    /// Read-only rendering of the committed markup
    Preview,
}

/// Resolve an intent against the current view. Total and pure; content
/// state is out of reach by construction.
pub const fn transition(view: View, intent: NavIntent) -> View {
    match (view, intent) {
        (View::Editing, NavIntent::GoBack) => View::Parent,
        (View::Preview, NavIntent::GoBack) => View::Editing,
        (View::Parent, NavIntent::GoBack) => View::Parent,
        (_, NavIntent::GoPreview) => View::Preview,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_back_returns_to_parent() {
        assert_eq!(transition(View::Editing, NavIntent::GoBack), View::Parent);
    }

    #[test]
    fn test_editing_preview_opens_preview() {
        assert_eq!(transition(View::Editing, NavIntent::GoPreview), View::Preview);
    }

    #[test]
    fn test_preview_back_returns_to_editing() {
        assert_eq!(transition(View::Preview, NavIntent::GoBack), View::Editing);
    }

    #[test]
    fn test_preview_on_preview_is_noop() {
        assert_eq!(transition(View::Preview, NavIntent::GoPreview), View::Preview);
    }

    #[test]
    fn test_parent_back_stays_on_parent() {
        assert_eq!(transition(View::Parent, NavIntent::GoBack), View::Parent);
    }

    #[test]
    fn test_parent_can_open_preview() {
        assert_eq!(transition(View::Parent, NavIntent::GoPreview), View::Preview);
    }
}
