// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only views over a thought list: category filtering and display times.

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

use thoughtbox_core::{ALL_CATEGORY, Thought};

/// Shown in place of a time when the timestamp is out of range.
pub const UNKNOWN_TIME: &str = "--:--";

/// Thoughts whose category equals `selected`, in their original order.
///
/// Selecting [`ALL_CATEGORY`] returns every thought. Matching is exact and
/// case-sensitive.
pub fn filter_by_category<'a>(thoughts: &'a [Thought], selected: &str) -> Vec<&'a Thought> {
    if selected == ALL_CATEGORY {
        return thoughts.iter().collect();
    }
    thoughts.iter().filter(|t| t.category == selected).collect()
}

/// Hour and minute of `timestamp` in the local time zone, e.g. `3:45 PM`.
pub fn format_display_time(timestamp: i64) -> String {
    format_display_time_in(timestamp, &Local)
}

/// Like [`format_display_time`], in an explicit time zone.
///
/// The hour is not zero-padded and runs 1 to 12. Minutes are always two
/// digits.
pub fn format_display_time_in<Tz>(timestamp: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp_millis(timestamp) {
        Some(utc) => utc.with_timezone(tz).format("%-I:%M %p").to_string(),
        None => UNKNOWN_TIME.to_string(),
    }
}

/// One line of the thought listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub id: String,
    pub content: String,
    pub category: String,
    pub time: String,
}

/// Filters `thoughts` by `selected` and formats each survivor for display.
pub fn display_rows<Tz>(thoughts: &[Thought], selected: &str, tz: &Tz) -> Vec<DisplayRow>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    filter_by_category(thoughts, selected)
        .into_iter()
        .map(|t| DisplayRow {
            id: t.id.clone(),
            content: t.content.clone(),
            category: t.category.clone(),
            time: format_display_time_in(t.timestamp, tz),
        })
        .collect()
}
