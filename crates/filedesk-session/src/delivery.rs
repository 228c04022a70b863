// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Artifact delivery — hand a finished artifact to the user under its
// suggested name.
//
// Blob results are saved as-is. Remote results (conversions) are fetched
// from their download URL first.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use filedesk_core::error::Result;
use filedesk_core::types::TransformResult;
use filedesk_document::naming::numbered_name;
use filedesk_remote::TransformService;

/// Somewhere artifacts can be saved.
#[async_trait]
pub trait ArtifactSink: Send + Sync {
    /// Save `bytes` under (a variant of) `suggested_name` and return the
    /// path actually written.
    async fn save(&self, suggested_name: &str, bytes: Vec<u8>) -> Result<PathBuf>;
}

/// Saves into a fixed directory without overwriting existing files.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// First free path for `name` in the sink directory:
    /// `name`, then `name (2)`, `name (3)` and so on.
    async fn free_path(&self, name: &str) -> Result<PathBuf> {
        let first = self.dir.join(name);
        if !tokio::fs::try_exists(&first).await? {
            return Ok(first);
        }
        let mut n = 2;
        loop {
            let candidate = self.dir.join(numbered_name(name, n));
            if !tokio::fs::try_exists(&candidate).await? {
                return Ok(candidate);
            }
            n += 1;
        }
    }
}

#[async_trait]
impl ArtifactSink for DirectorySink {
    async fn save(&self, suggested_name: &str, bytes: Vec<u8>) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let name = safe_file_name(suggested_name);
        let path = self.free_path(&name).await?;
        tokio::fs::write(&path, &bytes).await?;
        debug!(path = %path.display(), bytes = bytes.len(), "artifact written");
        Ok(path)
    }
}

/// Strip any directory part a suggested name might carry.
fn safe_file_name(suggested: &str) -> String {
    Path::new(suggested)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("download")
        .to_string()
}

/// Deliver `result` through `sink`, downloading it first if it lives remotely.
#[instrument(skip_all, fields(name = result.suggested_name(), kind = %result.kind()))]
pub async fn deliver(
    result: TransformResult,
    service: &dyn TransformService,
    sink: &dyn ArtifactSink,
) -> Result<PathBuf> {
    let (name, bytes) = match result {
        TransformResult::Blob {
            bytes,
            suggested_name,
            ..
        } => (suggested_name, bytes),
        TransformResult::Remote {
            download_url,
            suggested_name,
        } => {
            debug!(url = %download_url, "fetching converted file");
            let bytes = service.download(&download_url).await?;
            (suggested_name, bytes)
        }
    };

    let path = sink.save(&name, bytes).await?;
    info!(path = %path.display(), "artifact delivered");
    Ok(path)
}
