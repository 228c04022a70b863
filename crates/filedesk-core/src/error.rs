// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Filedesk.
//
// Errors fall into two tiers: local validation failures detected before any
// network call, and remote failures raised while talking to a transformation
// service. `FiledeskError::is_local` tells them apart.

use thiserror::Error;

use crate::types::OperationKind;

/// Failures of the displayed-to-natural crop coordinate mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("displayed image has zero size ({width}x{height})")]
    ZeroDisplayedSize { width: u32, height: u32 },

    #[error("crop region collapses to {width}x{height} natural pixels")]
    DegenerateResult { width: i64, height: i64 },
}

/// Top-level error type for all Filedesk operations.
#[derive(Debug, Error)]
pub enum FiledeskError {
    // -- Local validation --
    #[error("unsupported file type: {0}")]
    UnsupportedExtension(String),

    #[error("no file selected")]
    NoFileSelected,

    #[error("conversion is not available for {0} files")]
    ConversionUnavailable(String),

    #[error("cropping requires an image, got {0}")]
    NotAnImage(String),

    #[error("no crop region drawn")]
    MissingCropRegion,

    #[error("crop region has zero width or height")]
    DegenerateCropRegion,

    #[error("crop geometry: {0}")]
    Geometry(#[from] GeometryError),

    // -- Remote services --
    #[error("{kind} request failed: {detail}")]
    Transport { kind: OperationKind, detail: String },

    #[error("{kind} service returned HTTP {status}")]
    HttpStatus { kind: OperationKind, status: u16 },

    #[error("{kind} service sent a malformed response: {detail}")]
    MalformedResponse { kind: OperationKind, detail: String },

    #[error("invalid URL '{url}': {detail}")]
    InvalidUrl { url: String, detail: String },

    // -- Local I/O and delivery --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("save was cancelled")]
    DeliveryCancelled,
}

impl FiledeskError {
    /// True for validation errors that are raised before any network call and
    /// never change the operation state.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedExtension(_)
                | Self::NoFileSelected
                | Self::ConversionUnavailable(_)
                | Self::NotAnImage(_)
                | Self::MissingCropRegion
                | Self::DegenerateCropRegion
                | Self::Geometry(_)
        )
    }

    /// The operation a remote error belongs to, if any.
    pub fn operation_kind(&self) -> Option<OperationKind> {
        match self {
            Self::Transport { kind, .. }
            | Self::HttpStatus { kind, .. }
            | Self::MalformedResponse { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, FiledeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_local() {
        assert!(FiledeskError::UnsupportedExtension(".exe".into()).is_local());
        assert!(FiledeskError::ConversionUnavailable(".txt".into()).is_local());
        assert!(FiledeskError::from(GeometryError::ZeroDisplayedSize { width: 0, height: 10 }).is_local());
    }

    #[test]
    fn remote_errors_carry_their_kind() {
        let err = FiledeskError::HttpStatus {
            kind: OperationKind::Crop,
            status: 502,
        };
        assert!(!err.is_local());
        assert_eq!(err.operation_kind(), Some(OperationKind::Crop));
        assert_eq!(FiledeskError::NoFileSelected.operation_kind(), None);
    }
}
