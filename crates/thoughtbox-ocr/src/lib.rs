// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text extraction adapters.
//!
//! Only a simulated extractor ships today. It stands in for a real OCR
//! service behind the same [`OcrAdapter`](thoughtbox_core::OcrAdapter) trait.

pub mod mock;

pub use mock::{DOCUMENT_TEXT, MockOcr, SAMPLE_QUOTES};
