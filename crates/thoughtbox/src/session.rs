// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local session collaborator.
//!
//! There is no remote identity provider: the local user is always signed in
//! until `sign_out`. Session refresh runs only while the app is in the
//! foreground, driven by the host through [`AuthAdapter::on_app_state`].

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::debug;

use thoughtbox_core::{
    AdapterType, AppState, AuthAdapter, HealthStatus, PluginAdapter, ThoughtboxError,
};

pub struct LocalSession {
    signed_in: AtomicBool,
    auto_refresh: AtomicBool,
}

impl LocalSession {
    pub fn new() -> Self {
        Self {
            signed_in: AtomicBool::new(true),
            auto_refresh: AtomicBool::new(false),
        }
    }

    /// True while the session is being kept fresh.
    pub fn auto_refreshing(&self) -> bool {
        self.auto_refresh.load(Ordering::SeqCst)
    }
}

impl Default for LocalSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for LocalSession {
    fn name(&self) -> &str {
        "local-session"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Auth
    }

    async fn health_check(&self) -> Result<HealthStatus, ThoughtboxError> {
        if self.signed_in.load(Ordering::SeqCst) {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Degraded("signed out".into()))
        }
    }

    async fn shutdown(&self) -> Result<(), ThoughtboxError> {
        self.auto_refresh.store(false, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl AuthAdapter for LocalSession {
    async fn is_signed_in(&self) -> bool {
        self.signed_in.load(Ordering::SeqCst)
    }

    async fn sign_out(&self) -> Result<(), ThoughtboxError> {
        self.signed_in.store(false, Ordering::SeqCst);
        self.auto_refresh.store(false, Ordering::SeqCst);
        debug!("signed out");
        Ok(())
    }

    async fn on_app_state(&self, state: AppState) -> Result<(), ThoughtboxError> {
        let refresh = state == AppState::Active && self.signed_in.load(Ordering::SeqCst);
        let was = self.auto_refresh.swap(refresh, Ordering::SeqCst);
        if was != refresh {
            debug!(%state, auto_refresh = refresh, "session refresh toggled");
        }
        Ok(())
    }
}
