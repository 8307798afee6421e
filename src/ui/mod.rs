//! Terminal UI components.
//!
//! Rendering is a pure projection of the [`Model`](crate::app::Model):
//! the editing view reads the compose area and the live counter, the
//! preview view reads the shared content store at render time, and the
//! parent view lists past entries.

mod render;
mod status;

pub use render::{render, split_main_columns};

pub const EDITOR_WIDTH_PERCENT: u16 = 70;
pub const SIDEBAR_WIDTH_PERCENT: u16 = 30;
