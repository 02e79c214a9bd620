//! Prelude module for convenient imports.
//!
//! ```
//! use bbwidgets::prelude::*;
//!
//! // Now you have access to:
//! // - SelectItem, filter, SearchQuery (combo box filtering)
//! // - build_grid, FirstWeekDay, CalendarGrid, CalendarDay (calendar grids)
//! // - ComboBox, DatePicker (widget state machines)
//! // - DateFormat, DateLocale, FieldMapping, Error, Result
//! ```

// Filtering
pub use crate::filter::{filter, filter_indices, SearchQuery};
pub use crate::item::{exclude_deleted, SelectItem};

// Calendar
pub use crate::calendar::{
    build_grid, first_calendar_date, try_build_grid, CalendarDay, CalendarGrid, FirstWeekDay,
    Week,
};

// Widgets
pub use crate::combo_box::{ComboBox, Key};
pub use crate::date_picker::{DatePicker, DatePickerOptions};
pub use crate::notify::{ChangeSubscribers, SubscriptionId};

// Configuration
pub use crate::config::{CalendarConfig, WidgetConfig};
pub use crate::format::DateFormat;
pub use crate::locale::DateLocale;
pub use crate::source::{collect_items, FieldMapping, ItemAdapter};

// Errors
pub use crate::error::{Error, Result};
