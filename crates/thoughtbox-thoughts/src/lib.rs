// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thought collection store and listing projection.
//!
//! [`ThoughtStore`] owns the persisted collection and is the only component
//! that reads or writes it. The [`projection`] functions are pure views used
//! by the listing screen.

pub mod id;
pub mod projection;
pub mod store;

pub use id::IdGenerator;
pub use projection::{
    DisplayRow, UNKNOWN_TIME, display_rows, filter_by_category, format_display_time,
    format_display_time_in,
};
pub use store::{STORAGE_KEY, ThoughtStore};
