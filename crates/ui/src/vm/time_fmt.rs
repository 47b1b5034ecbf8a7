use chrono::{DateTime, Utc};

/// Short calendar date, e.g. `Nov 13, 2023`.
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}
