// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable messages for the status line.
//
// Every error is mapped to a short plain-English message with a suggestion.
// Remote failures are deliberately flattened: whatever went wrong on the
// wire, the user sees one message per operation kind. Transport detail goes
// to the log only.

use crate::error::FiledeskError;
use crate::types::OperationKind;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user picked or drew something we can't work with.
    Validation,
    /// A remote service failed; trying again may help.
    Remote,
    /// Local disk or save problem.
    Local,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown in the status line).
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Severity level (drives colour in UI).
    pub severity: Severity,
}

/// Text shown while an operation is running.
pub fn progress_message(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Compress => "Compressing file...",
        OperationKind::Convert => "Converting file...",
        OperationKind::Crop => "Cropping image...",
    }
}

/// Text shown once the service has answered and the artifact is ready to save.
pub fn ready_message(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Compress => "File compressed.",
        OperationKind::Convert => "File converted.",
        OperationKind::Crop => "Image cropped.",
    }
}

/// Text shown once the artifact has been handed to the user.
pub fn delivered_message(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Compress => "File compressed and downloaded.",
        OperationKind::Convert => "File converted and downloaded.",
        OperationKind::Crop => "Image cropped and downloaded.",
    }
}

/// The one generic failure text per operation kind.
pub fn failure_message(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Compress => "Compression failed.",
        OperationKind::Convert => "Conversion failed.",
        OperationKind::Crop => "Crop failed.",
    }
}

/// Convert a `FiledeskError` into a `HumanError`.
pub fn humanize_error(err: &FiledeskError) -> HumanError {
    match err {
        FiledeskError::UnsupportedExtension(_) => HumanError {
            message: "Unsupported file type.".into(),
            suggestion: "Pick a text, JSON, image, PDF, or Word file.".into(),
            severity: Severity::Validation,
        },
        FiledeskError::NoFileSelected => HumanError {
            message: "No file selected.".into(),
            suggestion: "Choose a file first.".into(),
            severity: Severity::Validation,
        },
        FiledeskError::ConversionUnavailable(_) => HumanError {
            message: "Conversion is only available for PDF and DOCX.".into(),
            suggestion: "Pick a .pdf or .docx file to convert.".into(),
            severity: Severity::Validation,
        },
        FiledeskError::NotAnImage(_) => HumanError {
            message: "Only images can be cropped.".into(),
            suggestion: "Pick a JPG, PNG, or WebP image.".into(),
            severity: Severity::Validation,
        },
        FiledeskError::MissingCropRegion
        | FiledeskError::DegenerateCropRegion
        | FiledeskError::Geometry(_) => HumanError {
            message: "Please crop a valid area.".into(),
            suggestion: "Drag a box over the image before cropping.".into(),
            severity: Severity::Validation,
        },
        FiledeskError::Transport { kind, .. }
        | FiledeskError::HttpStatus { kind, .. }
        | FiledeskError::MalformedResponse { kind, .. } => HumanError {
            message: failure_message(*kind).into(),
            suggestion: "Check your connection and try again.".into(),
            severity: Severity::Remote,
        },
        FiledeskError::InvalidUrl { .. } => HumanError {
            message: "A service address doesn't look right.".into(),
            suggestion: "Check the service addresses in Settings.".into(),
            severity: Severity::Remote,
        },
        FiledeskError::Io(_) | FiledeskError::Serialization(_) => HumanError {
            message: "The file couldn't be read or saved.".into(),
            suggestion: "Make sure the file still exists and the folder is writable.".into(),
            severity: Severity::Local,
        },
        FiledeskError::DeliveryCancelled => HumanError {
            message: "Save cancelled.".into(),
            suggestion: "Run the operation again to get a new copy.".into(),
            severity: Severity::Local,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    #[test]
    fn remote_failures_collapse_to_one_message_per_kind() {
        let a = humanize_error(&FiledeskError::HttpStatus {
            kind: OperationKind::Compress,
            status: 500,
        });
        let b = humanize_error(&FiledeskError::Transport {
            kind: OperationKind::Compress,
            detail: "connection refused".into(),
        });
        assert_eq!(a.message, "Compression failed.");
        assert_eq!(a.message, b.message);
        assert_eq!(a.severity, Severity::Remote);
    }

    #[test]
    fn transport_detail_never_reaches_the_user() {
        let human = humanize_error(&FiledeskError::MalformedResponse {
            kind: OperationKind::Convert,
            detail: "missing field `downloadUrl` at line 1 column 2".into(),
        });
        assert!(!human.message.contains("downloadUrl"));
        assert!(!human.suggestion.contains("downloadUrl"));
    }

    #[test]
    fn geometry_errors_ask_for_a_valid_area() {
        let human = humanize_error(&FiledeskError::Geometry(GeometryError::ZeroDisplayedSize {
            width: 0,
            height: 0,
        }));
        assert_eq!(human.message, "Please crop a valid area.");
        assert_eq!(human.severity, Severity::Validation);
    }

    #[test]
    fn unsupported_type_is_validation() {
        let human = humanize_error(&FiledeskError::UnsupportedExtension(".exe".into()));
        assert_eq!(human.message, "Unsupported file type.");
        assert_eq!(human.severity, Severity::Validation);
    }
}
