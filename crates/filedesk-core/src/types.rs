// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Filedesk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Unique identifier for one file selection.
///
/// A fresh id is minted on every accepted pick, so an in-flight operation can
/// tell whether the file it was started for is still the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionId(pub Uuid);

impl SelectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SelectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SelectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to a file on disk plus the name it was picked under.
///
/// The bytes are not held here; they are read when an operation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub path: PathBuf,
    pub name: String,
}

impl FileHandle {
    /// Build a handle from a path, using its final component as the name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { path, name }
    }
}

/// File extensions accepted by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileExtension {
    Txt,
    Log,
    Json,
    Jpg,
    Jpeg,
    Png,
    Webp,
    Pdf,
    Doc,
    Docx,
}

impl FileExtension {
    /// Every accepted extension, in picker order.
    pub const ALL: [FileExtension; 10] = [
        Self::Txt,
        Self::Log,
        Self::Json,
        Self::Jpg,
        Self::Jpeg,
        Self::Png,
        Self::Webp,
        Self::Pdf,
        Self::Doc,
        Self::Docx,
    ];

    /// Derive the extension from a file name: the text after the last dot,
    /// lower-cased. Returns `None` when there is no dot or the suffix is not
    /// on the allow-list.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, suffix) = name.rsplit_once('.')?;
        Self::from_suffix(suffix)
    }

    /// Parse a bare suffix (with or without the leading dot).
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        let suffix = suffix.strip_prefix('.').unwrap_or(suffix);
        match suffix.to_ascii_lowercase().as_str() {
            "txt" => Some(Self::Txt),
            "log" => Some(Self::Log),
            "json" => Some(Self::Json),
            "jpg" => Some(Self::Jpg),
            "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::Webp),
            "pdf" => Some(Self::Pdf),
            "doc" => Some(Self::Doc),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Dotted, lower-case form (".pdf").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Txt => ".txt",
            Self::Log => ".log",
            Self::Json => ".json",
            Self::Jpg => ".jpg",
            Self::Jpeg => ".jpeg",
            Self::Png => ".png",
            Self::Webp => ".webp",
            Self::Pdf => ".pdf",
            Self::Doc => ".doc",
            Self::Docx => ".docx",
        }
    }

    /// Suffix without the dot, as file dialogs expect it.
    pub fn bare(&self) -> &'static str {
        &self.as_str()[1..]
    }

    /// Whether files of this type can be previewed and cropped.
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Jpg | Self::Jpeg | Self::Png | Self::Webp)
    }

    /// MIME type sent as the multipart part content type.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Txt | Self::Log => "text/plain",
            Self::Json => "application/json",
            Self::Jpg | Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
            Self::Pdf => "application/pdf",
            Self::Doc => "application/msword",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// The conversion offered for this type, if any.
    pub fn convert_direction(&self) -> Option<ConvertDirection> {
        match self {
            Self::Pdf => Some(ConvertDirection::PdfToDocx),
            Self::Docx => Some(ConvertDirection::DocxToPdf),
            _ => None,
        }
    }
}

impl std::fmt::Display for FileExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three remote transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    Compress,
    Convert,
    Crop,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Compress => "compress",
            Self::Convert => "convert",
            Self::Crop => "crop",
        })
    }
}

/// Which way a PDF/DOCX conversion goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvertDirection {
    PdfToDocx,
    DocxToPdf,
}

impl ConvertDirection {
    /// Endpoint path on the conversion service.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Self::PdfToDocx => "/convert/pdf-to-docx",
            Self::DocxToPdf => "/convert/docx-to-pdf",
        }
    }

    /// Extension of the produced document.
    pub fn target_extension(&self) -> FileExtension {
        match self {
            Self::PdfToDocx => FileExtension::Docx,
            Self::DocxToPdf => FileExtension::Pdf,
        }
    }

    /// Button label for the convert action.
    pub fn action_label(&self) -> &'static str {
        match self {
            Self::PdfToDocx => "Convert to Word",
            Self::DocxToPdf => "Convert to PDF",
        }
    }
}

/// Width and height of an image, in whichever pixel space the caller means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Crop rectangle in displayed pixels, origin at the top-left of the rendered
/// preview. Fractional values come straight from pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DisplayedRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when the rectangle has no area to crop.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Crop rectangle in the original image's pixel grid, as submitted to the
/// crop service. Not clamped to the image bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturalRect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl NaturalRect {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Artifact produced by a successful operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformResult {
    /// Bytes returned directly by the service (compress, crop).
    Blob {
        kind: OperationKind,
        bytes: Vec<u8>,
        suggested_name: String,
    },
    /// A location to fetch the artifact from (convert).
    Remote {
        download_url: String,
        suggested_name: String,
    },
}

impl TransformResult {
    pub fn suggested_name(&self) -> &str {
        match self {
            Self::Blob { suggested_name, .. } | Self::Remote { suggested_name, .. } => {
                suggested_name
            }
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Blob { kind, .. } => *kind,
            Self::Remote { .. } => OperationKind::Convert,
        }
    }
}

/// Tone of a user-visible notice; drives colour in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeTone {
    Info,
    Success,
    Error,
}

/// Short status line shown under the action bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub text: String,
    pub tone: NoticeTone,
    pub at: DateTime<Utc>,
}

impl Notice {
    pub fn new(text: impl Into<String>, tone: NoticeTone) -> Self {
        Self {
            text: text.into(),
            tone,
            at: Utc::now(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, NoticeTone::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, NoticeTone::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, NoticeTone::Error)
    }
}
