// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// An operation between `begin_*` and `complete`.
//
// A `PendingOperation` is bound to the selection it was started for. It owns
// a copy of that selection's file handle, so picking another file while the
// request is in flight changes nothing about what gets uploaded.

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use filedesk_core::error::Result;
use filedesk_core::types::{
    ConvertDirection, FileHandle, NaturalRect, OperationKind, SelectionId, TransformResult,
};
use filedesk_document::naming::CROPPED_NAME;
use filedesk_remote::{TransformService, UploadFile};

/// What to ask the remote service for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationRequest {
    Compress {
        output_name: String,
    },
    Convert {
        direction: ConvertDirection,
        output_name: String,
    },
    Crop {
        region: NaturalRect,
    },
}

impl OperationRequest {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Compress { .. } => OperationKind::Compress,
            Self::Convert { .. } => OperationKind::Convert,
            Self::Crop { .. } => OperationKind::Crop,
        }
    }
}

/// Identity of a started operation: its kind and the selection it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationTicket {
    pub kind: OperationKind,
    pub selection: SelectionId,
    pub started_at: DateTime<Utc>,
}

/// A started operation waiting to be sent.
#[derive(Debug, Clone)]
pub struct PendingOperation {
    pub(crate) ticket: OperationTicket,
    pub(crate) source: FileHandle,
    pub(crate) mime: &'static str,
    pub(crate) request: OperationRequest,
}

/// Result of executing a `PendingOperation`, to be fed back to the session.
#[derive(Debug)]
pub struct OperationOutcome {
    pub ticket: OperationTicket,
    pub result: Result<TransformResult>,
}

/// How a completion related to the session's current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub kind: OperationKind,
    pub succeeded: bool,
    /// The selection changed while the request was in flight; any artifact
    /// was discarded.
    pub stale: bool,
}

impl PendingOperation {
    pub fn ticket(&self) -> &OperationTicket {
        &self.ticket
    }

    pub fn request(&self) -> &OperationRequest {
        &self.request
    }

    pub fn source(&self) -> &FileHandle {
        &self.source
    }

    /// Read the source file once, send it, and wrap the answer.
    ///
    /// Never fails on its own: every error ends up in the outcome.
    #[instrument(skip_all, fields(kind = %self.ticket.kind, file = %self.source.name))]
    pub async fn execute(self, service: &dyn TransformService) -> OperationOutcome {
        let result = self.perform(service).await;
        OperationOutcome {
            ticket: self.ticket,
            result,
        }
    }

    async fn perform(&self, service: &dyn TransformService) -> Result<TransformResult> {
        let bytes = tokio::fs::read(&self.source.path).await?;
        debug!(bytes = bytes.len(), "source file read");

        let upload = UploadFile {
            name: self.source.name.clone(),
            mime: self.mime,
            bytes,
        };

        match &self.request {
            OperationRequest::Compress { output_name } => {
                let bytes = service.compress(upload).await?;
                Ok(TransformResult::Blob {
                    kind: OperationKind::Compress,
                    bytes,
                    suggested_name: output_name.clone(),
                })
            }
            OperationRequest::Convert {
                direction,
                output_name,
            } => {
                let download_url = service.convert(*direction, upload).await?;
                Ok(TransformResult::Remote {
                    download_url,
                    suggested_name: output_name.clone(),
                })
            }
            OperationRequest::Crop { region } => {
                let bytes = service.crop(upload, *region).await?;
                Ok(TransformResult::Blob {
                    kind: OperationKind::Crop,
                    bytes,
                    suggested_name: CROPPED_NAME.to_string(),
                })
            }
        }
    }
}
