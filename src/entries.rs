//! Past-entries list boundary.
//!
//! An opaque, externally supplied ordered sequence of titles. Jotter
//! renders it and never mutates it; where the titles come from (and
//! whether they are ever stored durably) is the collaborator's concern.

/// Ordered titles of past entries, shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastEntries {
    titles: Vec<String>,
}

impl PastEntries {
    /// Wrap an externally supplied list of titles.
    pub fn from_titles(titles: Vec<String>) -> Self {
        Self { titles }
    }

    /// The built-in placeholder list shown when nothing is supplied.
    pub fn placeholder() -> Self {
        Self::from_titles(vec![
            "My First Entry".to_string(),
            "A Quiet Tuesday".to_string(),
        ])
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

impl Default for PastEntries {
    fn default() -> Self {
        Self::placeholder()
    }
}
