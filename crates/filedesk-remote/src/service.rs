// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The remote transformation seam.

use async_trait::async_trait;

use filedesk_core::error::Result;
use filedesk_core::types::{ConvertDirection, NaturalRect};

/// One file as it goes over the wire: its name, MIME type, and bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// The three remote transformations plus artifact download.
///
/// Implementations report every failure (transport, non-2xx status, bad body)
/// as a remote-tier `FiledeskError` tagged with the operation kind.
#[async_trait]
pub trait TransformService: Send + Sync {
    /// `POST /compress` with multipart field `file`; returns the compressed bytes.
    async fn compress(&self, file: UploadFile) -> Result<Vec<u8>>;

    /// `POST /convert/{pdf-to-docx|docx-to-pdf}` with multipart field `file`;
    /// returns the absolute URL the converted document can be fetched from.
    async fn convert(&self, direction: ConvertDirection, file: UploadFile) -> Result<String>;

    /// `POST /crop` with multipart fields `image`, `x`, `y`, `width`, `height`;
    /// returns the cropped PNG bytes.
    async fn crop(&self, image: UploadFile, region: NaturalRect) -> Result<Vec<u8>>;

    /// Fetch an artifact from a location returned by `convert`.
    async fn download(&self, url: &str) -> Result<Vec<u8>>;
}
