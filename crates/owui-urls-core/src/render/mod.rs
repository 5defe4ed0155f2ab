//! Document renderers. Both take the same inputs so their output stays in sync.

pub mod json;
pub mod markdown;

use chrono::NaiveDate;

/// Date format stamped into every document.
const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
