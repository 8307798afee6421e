// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. store::ContentStore)
    clippy::module_name_repetitions
)]

//! # Jotter
//!
//! A terminal diary composer with live markdown preview.
//!
//! Jotter keeps the entry being written in a single shared content
//! store. The editing surface commits every change to the store, the
//! preview reads from it, and navigation between views never touches
//! it, so the text survives any amount of hopping around.
//!
//! ## Architecture
//!
//! Jotter uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`store`]: Shared content store for the entry in progress
//! - [`compose`]: Rope-backed text area the user types into
//! - [`session`]: Adapter committing edits from the surface to the store
//! - [`nav`]: View transitions driven by navigation intents
//! - [`preview`]: Markdown rendering for the preview view
//! - [`identity`]: Resolved display identity
//! - [`entries`]: Past-entry titles for the sidebar
//! - [`ui`]: Terminal UI components
//! - [`config`]: Persistent flag-file configuration

pub mod app;
pub mod compose;
pub mod config;
pub mod entries;
pub mod identity;
pub mod nav;
pub mod preview;
pub mod session;
pub mod store;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model, update};
    pub use crate::entries::PastEntries;
    pub use crate::identity::Identity;
    pub use crate::nav::{NavIntent, View};
    pub use crate::session::{EditOp, EditSession};
    pub use crate::store::ContentStore;
}
