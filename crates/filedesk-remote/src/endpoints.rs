// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Endpoint resolution for the three services.

use reqwest::Url;

use filedesk_core::AppConfig;
use filedesk_core::error::{FiledeskError, Result};
use filedesk_core::types::ConvertDirection;

/// Fully resolved endpoint URLs, validated once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    compress: Url,
    convert_base: Url,
    pdf_to_docx: Url,
    docx_to_pdf: Url,
    crop: Url,
}

impl Endpoints {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            compress: build_url(&config.compress_base_url, "/compress")?,
            convert_base: parse_url(&config.convert_base_url)?,
            pdf_to_docx: build_url(
                &config.convert_base_url,
                ConvertDirection::PdfToDocx.endpoint_path(),
            )?,
            docx_to_pdf: build_url(
                &config.convert_base_url,
                ConvertDirection::DocxToPdf.endpoint_path(),
            )?,
            crop: build_url(&config.crop_base_url, "/crop")?,
        })
    }

    pub fn compress(&self) -> &Url {
        &self.compress
    }

    pub fn convert(&self, direction: ConvertDirection) -> &Url {
        match direction {
            ConvertDirection::PdfToDocx => &self.pdf_to_docx,
            ConvertDirection::DocxToPdf => &self.docx_to_pdf,
        }
    }

    pub fn crop(&self) -> &Url {
        &self.crop
    }

    /// Resolve a `downloadUrl` from the conversion service against its base
    /// origin. Absolute URLs are returned unchanged.
    pub fn resolve_download(&self, location: &str) -> Result<Url> {
        self.convert_base.join(location).map_err(|e| FiledeskError::InvalidUrl {
            url: location.to_string(),
            detail: e.to_string(),
        })
    }
}

fn build_url(base: &str, path: &str) -> Result<Url> {
    parse_url(&format!("{}{}", base.trim_end_matches('/'), path))
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| FiledeskError::InvalidUrl {
        url: raw.to_string(),
        detail: e.to_string(),
    })
}
