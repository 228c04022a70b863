// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Save-dialog artifact sink: asks where to put each artifact.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info};

use filedesk_core::error::{FiledeskError, Result};
use filedesk_session::ArtifactSink;

use super::data_dir;

/// Asks the user for a location with the native save dialog, pre-filled
/// with the suggested name.
#[derive(Debug, Default, Clone, Copy)]
pub struct SaveDialogSink;

#[async_trait]
impl ArtifactSink for SaveDialogSink {
    async fn save(&self, suggested_name: &str, bytes: Vec<u8>) -> Result<PathBuf> {
        let mut dialog = rfd::AsyncFileDialog::new()
            .set_title("Save file")
            .set_file_name(suggested_name);
        if let Some(dir) = data_dir::downloads_dir() {
            dialog = dialog.set_directory(dir);
        }

        let Some(handle) = dialog.save_file().await else {
            info!(name = suggested_name, "save dialog dismissed");
            return Err(FiledeskError::DeliveryCancelled);
        };

        let path = handle.path().to_path_buf();
        tokio::fs::write(&path, &bytes).await?;
        debug!(path = %path.display(), bytes = bytes.len(), "artifact written");
        Ok(path)
    }
}
