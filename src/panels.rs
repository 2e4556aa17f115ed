//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod chart;
pub mod details;
pub mod paragraph;
pub mod table;
pub mod title;

pub use chart::ChartPanel;
pub use details::DetailsPanel;
pub use paragraph::ParagraphPanel;
pub use table::TablePanel;
pub use title::TitlePanel;
