//! Output formatting utilities for the bbw CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by what is being shown:
//!
//! - [`items`] - Filtered item lists
//! - [`calendar`] - Calendar grids and parsed dates
//! - [`helpers`] - Common formatting utilities (truncation, values)

mod calendar;
pub mod helpers;
mod items;

pub use calendar::{
    format_calendar_json, format_calendar_table, format_parsed_json, format_parsed_table,
};
pub use items::{format_items_json, format_items_table, format_no_match, Indexed};
