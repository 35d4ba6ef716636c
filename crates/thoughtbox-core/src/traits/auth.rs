// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authentication adapter trait with an explicit lifecycle hook.

use async_trait::async_trait;

use crate::error::ThoughtboxError;
use crate::traits::adapter::PluginAdapter;
use crate::types::AppState;

/// Adapter for the session provider that gates the application.
///
/// The host forwards foreground/background transitions through
/// [`AuthAdapter::on_app_state`]; the adapter decides whether to keep
/// refreshing its session. Nothing registers global listeners.
#[async_trait]
pub trait AuthAdapter: PluginAdapter {
    /// Returns true if a session is currently established.
    async fn is_signed_in(&self) -> bool;

    /// Ends the current session, if any.
    async fn sign_out(&self) -> Result<(), ThoughtboxError>;

    /// Lifecycle hook called by the host on every app state transition.
    async fn on_app_state(&self, state: AppState) -> Result<(), ThoughtboxError>;
}
