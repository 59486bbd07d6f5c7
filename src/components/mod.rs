//! Reusable UI components

mod analytics_panel;
mod dynamic_table;
mod file_upload;
mod loading;

pub use analytics_panel::*;
pub use dynamic_table::*;
pub use file_upload::*;
pub use loading::*;
