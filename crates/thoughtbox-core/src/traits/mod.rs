// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for Thoughtbox collaborators.
//!
//! All adapters extend the [`PluginAdapter`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod adapter;
pub mod auth;
pub mod ocr;
pub mod storage;

pub use adapter::PluginAdapter;
pub use auth::AuthAdapter;
pub use ocr::OcrAdapter;
pub use storage::StorageAdapter;
