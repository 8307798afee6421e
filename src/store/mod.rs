//! Shared content store.
//!
//! The store is the single authoritative holder of the entry being
//! composed. The compose area keeps its own working copy for cursor and
//! rendering purposes, but only the edit session writes here, and every
//! consumer (counter, preview) reads from here at its own render time.

/// The in-memory representation of the entry being composed.
///
/// `markup` is the full serialized document. The store treats it as an
/// opaque string; the compose and preview layers interpret it as Markdown.
/// Empty is the valid initial state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBuffer {
    markup: String,
}

impl ContentBuffer {
    /// The serialized document.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Character count of the markup, for the live counter.
    pub fn len_chars(&self) -> usize {
        self.markup.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.markup.is_empty()
    }
}

/// Process-wide holder of the active [`ContentBuffer`].
///
/// A plain in-memory register: `get` never fails, `set` replaces the
/// buffer atomically with respect to the single-threaded event loop, and
/// setting an equal value is a no-op. The revision counter increments once
/// per effective change, so consumers (and tests) can observe exactly how
/// many updates a sequence of writes produced.
#[derive(Debug, Default)]
pub struct ContentStore {
    buffer: ContentBuffer,
    revision: u64,
}

impl ContentStore {
    /// Create a store holding the empty initial buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current buffer. Side-effect free.
    pub const fn get(&self) -> &ContentBuffer {
        &self.buffer
    }

    /// Replace the buffer's markup.
    ///
    /// Returns `true` if the value changed. Passing the current value is a
    /// no-op: the revision does not advance and no consumer update is owed.
    pub fn set(&mut self, markup: impl Into<String>) -> bool {
        let markup = markup.into();
        if self.buffer.markup == markup {
            return false;
        }
        self.buffer.markup = markup;
        self.revision += 1;
        true
    }

    /// Number of effective changes since creation or the last reset.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Tear the buffer down to the initial empty state (document switch
    /// or session end).
    pub fn reset(&mut self) {
        self.buffer = ContentBuffer::default();
        self.revision = 0;
    }
}
