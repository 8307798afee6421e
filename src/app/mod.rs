//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::Model;
pub use update::{Message, update};

use crate::entries::PastEntries;
use crate::identity::Identity;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    identity: Identity,
    entries: PastEntries,
    sidebar_visible: bool,
}

impl App {
    /// Create a new application for the given identity.
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            entries: PastEntries::placeholder(),
            sidebar_visible: true,
        }
    }

    /// Supply the externally sourced past-entries list.
    #[must_use]
    pub fn with_entries(mut self, entries: PastEntries) -> Self {
        self.entries = entries;
        self
    }

    /// Set initial sidebar visibility.
    #[must_use]
    pub const fn with_sidebar_visible(mut self, visible: bool) -> Self {
        self.sidebar_visible = visible;
        self
    }
}

#[cfg(test)]
mod tests;
