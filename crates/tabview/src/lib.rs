#![forbid(unsafe_code)]

//! Tabview: a scrollable, navigable table viewport for terminal UIs.
//!
//! The crate is split into a pure navigation engine ([`viewport`]), the data
//! it navigates ([`grid`]), input plumbing ([`event`], [`keymap`]) and a
//! renderer that turns a borrowed snapshot into styled lines ([`render`]).
//! [`Table`] ties them together.

pub mod event;
pub mod grid;
pub mod keymap;
pub mod logging;
pub mod render;
pub mod style;
pub mod table;
pub mod text;
pub mod viewport;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace};

pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use grid::{Column, Grid, Row};
pub use keymap::{Action, KeyBinding, KeyMap};
pub use render::{Line, Span, TableView};
pub use style::{Color, Style, Styles};
pub use table::Table;
pub use viewport::{SelectionMode, Viewport};
