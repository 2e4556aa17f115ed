//! src/ui.rs
//!
//! Top-level UI module: layout tree and theme context.

pub mod node;
pub mod theme;

pub use node::{Node, Panel, group, leaf};
pub use theme::ThemeContext;
