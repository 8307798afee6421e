//! The compose area: the embedded editing widget.
//!
//! A rope-backed text area with its own cursor state. The rest of the
//! application treats it as a black box with two contracts: it is seeded
//! with a serialized markup string at mount, and it can report its full
//! current markup after every edit.

mod area;

pub use area::{ComposeArea, CursorPos, Direction};
