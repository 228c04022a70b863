// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — owns the HTTP client for the transformation
// services, the persisted settings, and the choice of where artifacts go.
//
// The client is rebuilt whenever the service addresses change. Callers take
// an `Arc` snapshot per operation, so an in-flight request keeps the client
// it started with.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use filedesk_core::AppConfig;
use filedesk_core::error::Result;
use filedesk_remote::HttpTransformService;
use filedesk_session::{ArtifactSink, DirectorySink};
use tracing::info;

use super::data_dir;
use super::save_dialog::SaveDialogSink;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// All fields are cheaply cloneable (Arc-wrapped) so that the struct can be
/// passed into closures and async blocks without lifetime issues.
#[derive(Clone)]
pub struct AppServices {
    transform: Arc<Mutex<Arc<HttpTransformService>>>,
    config: Arc<Mutex<AppConfig>>,
    data_dir: PathBuf,
}

impl AppServices {
    /// Load settings from the data directory and build the client.
    pub fn init() -> Result<Self> {
        let dir = data_dir::data_dir()?;
        info!(path = %dir.display(), "initialising app services");
        let config = AppConfig::load(&dir);
        Self::with_config(dir, config)
    }

    /// Default settings in a temp directory, for when the saved ones are unusable.
    pub fn fallback() -> Result<Self> {
        let dir = std::env::temp_dir().join("filedesk");
        Self::with_config(dir, AppConfig::default())
    }

    fn with_config(data_dir: PathBuf, config: AppConfig) -> Result<Self> {
        let transform = HttpTransformService::new(&config)?;
        info!(
            compress = %transform.endpoints().compress(),
            crop = %transform.endpoints().crop(),
            "transformation services configured"
        );
        Ok(Self {
            transform: Arc::new(Mutex::new(Arc::new(transform))),
            config: Arc::new(Mutex::new(config)),
            data_dir,
        })
    }

    // -- Remote services -----------------------------------------------------

    /// The client for the current settings.
    pub fn transform(&self) -> Arc<HttpTransformService> {
        Arc::clone(&lock(&self.transform))
    }

    // -- Delivery ------------------------------------------------------------

    /// Where finished artifacts go: the configured download directory, or a
    /// save dialog per artifact.
    pub fn sink(&self) -> Box<dyn ArtifactSink> {
        match lock(&self.config).download_dir.clone() {
            Some(dir) => Box::new(DirectorySink::new(dir)),
            None => Box::new(SaveDialogSink),
        }
    }

    // -- Config --------------------------------------------------------------

    pub fn config(&self) -> AppConfig {
        lock(&self.config).clone()
    }

    /// Validate, persist and apply new settings. On error nothing changes.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        let transform = HttpTransformService::new(config)?;
        config.persist(&self.data_dir)?;
        *lock(&self.transform) = Arc::new(transform);
        *lock(&self.config) = config.clone();
        info!(path = %self.data_dir.display(), "settings saved");
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
