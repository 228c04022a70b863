// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;

/// Name of the persisted settings file inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base origin of the compression service (`POST /compress`).
    pub compress_base_url: String,
    /// Base origin of the conversion service; download locations are
    /// resolved against it as well.
    pub convert_base_url: String,
    /// Base origin of the crop service (`POST /crop`).
    pub crop_base_url: String,
    /// Per-request timeout for the remote services.
    pub request_timeout_secs: u64,
    /// Where finished artifacts are written. `None` asks with a save dialog.
    pub download_dir: Option<PathBuf>,
    /// Maximum on-screen width of the image preview, in displayed pixels.
    pub preview_max_width: u32,
    /// Constrain the crop box to a square while dragging.
    pub lock_square_crop: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            compress_base_url: "http://3.254.170.207:5000".into(),
            convert_base_url: "http://54.227.181.110:5000".into(),
            crop_base_url: "http://nodejs-alb-827956790.eu-west-1.elb.amazonaws.com".into(),
            request_timeout_secs: 120,
            download_dir: None,
            preview_max_width: 480,
            lock_square_crop: true,
        }
    }
}

impl AppConfig {
    /// Load settings from `<dir>/config.json`, falling back to defaults when
    /// the file is missing or unreadable, then apply environment overrides.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        let mut config = match std::fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "config unreadable, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Write settings to `<dir>/config.json` as pretty JSON.
    pub fn persist(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(dir.join(CONFIG_FILE), json)?;
        Ok(())
    }

    /// Apply `FILEDESK_*` overrides through the given lookup.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("FILEDESK_COMPRESS_URL") {
            self.compress_base_url = url;
        }
        if let Some(url) = lookup("FILEDESK_CONVERT_URL") {
            self.convert_base_url = url;
        }
        if let Some(url) = lookup("FILEDESK_CROP_URL") {
            self.crop_base_url = url;
        }
        if let Some(dir) = lookup("FILEDESK_DOWNLOAD_DIR") {
            self.download_dir = (!dir.is_empty()).then(|| PathBuf::from(dir));
        }
    }
}
