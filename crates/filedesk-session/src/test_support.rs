// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory transform service and fixtures for session tests.

use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use filedesk_core::error::{FiledeskError, Result};
use filedesk_core::types::{ConvertDirection, FileHandle, NaturalRect, OperationKind};
use filedesk_remote::{TransformService, UploadFile};

/// One recorded call to the mock service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Compress { name: String, bytes: Vec<u8> },
    Convert { direction: ConvertDirection, name: String },
    Crop { name: String, region: NaturalRect },
    Download { url: String },
}

/// Records every call; answers with canned bodies or a 503.
#[derive(Default)]
pub struct MockService {
    calls: Mutex<Vec<Call>>,
    failing: AtomicBool,
}

impl MockService {
    pub fn failing() -> Self {
        let svc = Self::default();
        svc.set_failing(true);
        svc
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call, kind: OperationKind) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.load(Ordering::SeqCst) {
            return Err(FiledeskError::HttpStatus { kind, status: 503 });
        }
        Ok(())
    }
}

#[async_trait]
impl TransformService for MockService {
    async fn compress(&self, file: UploadFile) -> Result<Vec<u8>> {
        self.record(
            Call::Compress {
                name: file.name,
                bytes: file.bytes,
            },
            OperationKind::Compress,
        )?;
        Ok(b"compressed".to_vec())
    }

    async fn convert(&self, direction: ConvertDirection, file: UploadFile) -> Result<String> {
        self.record(
            Call::Convert {
                direction,
                name: file.name,
            },
            OperationKind::Convert,
        )?;
        Ok(format!("http://convert.test{}/out", direction.endpoint_path()))
    }

    async fn crop(&self, image: UploadFile, region: NaturalRect) -> Result<Vec<u8>> {
        self.record(
            Call::Crop {
                name: image.name,
                region,
            },
            OperationKind::Crop,
        )?;
        Ok(b"png".to_vec())
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        self.record(Call::Download { url: url.to_string() }, OperationKind::Convert)?;
        Ok(b"downloaded".to_vec())
    }
}

/// Write `body` to `<dir>/<name>` and return a handle to it.
pub fn fixture(dir: &tempfile::TempDir, name: &str, body: &[u8]) -> FileHandle {
    let path: PathBuf = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    FileHandle::from_path(path)
}
