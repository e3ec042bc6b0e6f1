//! Placement of panel surfaces at the four anchor slots.
//!
//! Each slot has a fixed recipe:
//!
//! - `before_browser`: right after `browser-border-start`; unhides the
//!   window's existing `sidebar-splitter`.
//! - `after_browser`: right before `browser-border-end`, after a lazily
//!   created `sidebar-splitter-end`.
//! - `above_browser`: between `navigator-toolbox` and a lazily created
//!   `sidebar-splitter-above`.
//! - `below_browser`: appended to `browser-panel`, after a lazily created
//!   `sidebar-splitter-below`.
//!
//! Separators are created once per window and stay put when the surface
//! moves elsewhere.

mod recipes;

pub use recipes::{
    anchor_id, locate, place, separator_id, SPLITTER_ABOVE, SPLITTER_BELOW, SPLITTER_END,
};
