//! Headless cores for a filterable combo box and a calendar date picker.
//!
//! The two pieces of real logic live in [`filter`] (token-based substring
//! matching over a list of labeled items) and [`calendar`] (a fixed 6x7 day
//! grid for any month). The widget state machines in [`combo_box`] and
//! [`date_picker`] wrap them with open/closed state, input text and change
//! notification, but never render anything.
//!
//! # Quick Start
//!
//! ```
//! use bbwidgets::prelude::*;
//! use chrono::NaiveDate;
//!
//! let items = vec![
//!     SelectItem::new("abcdef", 1),
//!     SelectItem::new("xycd", 2),
//!     SelectItem::new("ab", 3),
//! ];
//! let matched = filter("ab cd", &items);
//! assert_eq!(matched.len(), 1);
//! assert_eq!(matched[0].value, 1);
//!
//! let reference = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
//! let grid = build_grid(reference, FirstWeekDay::Monday);
//! assert_eq!(grid.days().count(), 42);
//! ```

pub mod calendar;
pub mod combo_box;
pub mod config;
pub mod date_picker;
pub mod error;
pub mod filter;
pub mod format;
pub mod item;
pub mod locale;
pub mod notify;
pub mod prelude;
pub mod source;

pub use error::{Error, Result};
