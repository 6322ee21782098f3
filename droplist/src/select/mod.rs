//! Dropdown select widget, in single- and multi-select variants.
//!
//! The widget owns only its interaction state (open flag and highlighted
//! row). The selection value itself belongs to the host: it is passed in
//! read-only at build and event-processing time, and requested changes come
//! back as [`SelectChange`] events for the host to apply.

mod events;
mod option;
mod render;
mod state;

pub use events::SelectChange;
pub use option::{OptionValue, Selection, SelectOption};
pub use state::Select;
