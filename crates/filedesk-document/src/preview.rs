// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image previews — natural dimensions plus an inline data URI for the webview,
// and the fit-to-width layout that defines the displayed pixel space.

use std::io::Cursor;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use filedesk_core::error::{FiledeskError, Result};
use filedesk_core::types::ImageSize;
use tracing::{debug, instrument};

/// A previewable image: its natural size and a `data:` URI of its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    /// Size of the original image in natural pixels.
    pub natural: ImageSize,
    /// `data:<mime>;base64,...` for an `img` element.
    pub data_uri: String,
}

impl ImagePreview {
    /// Load a preview from an image file on disk.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>, mime: &str) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_bytes(&bytes, mime)
    }

    /// Build a preview from encoded image bytes. Only the header is decoded.
    pub fn from_bytes(bytes: &[u8], mime: &str) -> Result<Self> {
        let natural = natural_size(bytes)?;
        debug!(
            width = natural.width,
            height = natural.height,
            bytes = bytes.len(),
            "preview prepared"
        );
        Ok(Self {
            natural,
            data_uri: format!("data:{mime};base64,{}", STANDARD.encode(bytes)),
        })
    }

    /// Displayed size of this preview for a given maximum width.
    pub fn displayed_size(&self, max_width: u32) -> ImageSize {
        fit_to_width(self.natural, max_width)
    }
}

/// Read an encoded image's natural dimensions without decoding its pixels.
pub fn natural_size(bytes: &[u8]) -> Result<ImageSize> {
    let (width, height) = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()
        .map_err(|e| FiledeskError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
    Ok(ImageSize::new(width, height))
}

/// Scale `natural` down to at most `max_width` wide, keeping its aspect
/// ratio. Images narrower than `max_width` are shown at natural size.
pub fn fit_to_width(natural: ImageSize, max_width: u32) -> ImageSize {
    if natural.is_empty() || max_width == 0 || natural.width <= max_width {
        return natural;
    }
    let height = (f64::from(natural.height) * f64::from(max_width) / f64::from(natural.width))
        .round()
        .max(1.0) as u32;
    ImageSize::new(max_width, height)
}
