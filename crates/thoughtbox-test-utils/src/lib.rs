// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Thoughtbox integration tests.
//!
//! Provides fault-injecting and scripted adapters plus a harness that owns a
//! throwaway storage backend, so tests run without touching user data.
//!
//! # Components
//!
//! - [`FlakyStorage`] - Storage wrapper that fails reads or writes on demand
//! - [`ScriptedOcr`] - OCR adapter returning queued results
//! - [`TestHarness`] - Temp-dir backed storage for any backend

pub mod flaky_storage;
pub mod harness;
pub mod scripted_ocr;

pub use flaky_storage::FlakyStorage;
pub use harness::TestHarness;
pub use scripted_ocr::ScriptedOcr;
