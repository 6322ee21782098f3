//! A dropdown/select widget for terminal UIs, with single- and multi-select
//! variants, plus the minimal element/event/render substrate it stands on.
//!
//! The widget follows a controlled-value contract: the host owns the
//! [`Selection`], builds the widget's element tree each frame via
//! [`Select::build`], and applies the [`SelectChange`] events that
//! [`Select::process_events`] emits.

pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod select;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::Buffer;
pub use element::{find_element, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any, hit_test_focusable};
pub use layout::{layout, LayoutResult, Rect};
pub use render::render_to_buffer;
pub use select::{OptionValue, Select, SelectChange, SelectOption, Selection};
pub use terminal::Terminal;
pub use types::*;
