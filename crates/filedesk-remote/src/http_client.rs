// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// reqwest-backed client for the remote transformation services.
//
//   - Compress        POST /compress                 file            -> bytes
//   - Convert         POST /convert/pdf-to-docx      file            -> {downloadUrl}
//                     POST /convert/docx-to-pdf      file            -> {downloadUrl}
//   - Crop            POST /crop                     image,x,y,w,h   -> PNG bytes
//
// No structured error body is parsed from any service. A failure is a
// failure; the status or transport detail is logged and carried in the
// error for diagnostics only.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

use filedesk_core::AppConfig;
use filedesk_core::error::{FiledeskError, Result};
use filedesk_core::types::{ConvertDirection, NaturalRect, OperationKind};

use crate::endpoints::Endpoints;
use crate::service::{TransformService, UploadFile};

/// Body returned by the conversion service.
#[derive(Debug, Deserialize)]
struct ConvertResponse {
    #[serde(rename = "downloadUrl")]
    download_url: String,
}

/// HTTP client for all three services.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransformService {
    client: Client,
    endpoints: Endpoints,
}

impl HttpTransformService {
    /// Build a client from the configured base URLs and timeout.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let endpoints = Endpoints::from_config(config)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| FiledeskError::Transport {
                kind: OperationKind::Compress,
                detail: format!("failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// POST a multipart form and return the response if its status is 2xx.
    async fn post_form(&self, kind: OperationKind, url: &Url, form: Form) -> Result<Response> {
        debug!(%kind, url = %url, "sending multipart request");
        let response = self
            .client
            .post(url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport(kind, e))?;
        ensure_success(kind, response)
    }
}

#[async_trait]
impl TransformService for HttpTransformService {
    #[instrument(skip(self, file), fields(file = %file.name, bytes = file.bytes.len()))]
    async fn compress(&self, file: UploadFile) -> Result<Vec<u8>> {
        let kind = OperationKind::Compress;
        let form = Form::new().part("file", file_part(kind, file)?);
        let response = self.post_form(kind, self.endpoints.compress(), form).await?;
        let body = read_bytes(kind, response).await?;
        info!(bytes = body.len(), "compressed artifact received");
        Ok(body)
    }

    #[instrument(skip(self, file), fields(file = %file.name, bytes = file.bytes.len()))]
    async fn convert(&self, direction: ConvertDirection, file: UploadFile) -> Result<String> {
        let kind = OperationKind::Convert;
        let form = Form::new().part("file", file_part(kind, file)?);
        let response = self
            .post_form(kind, self.endpoints.convert(direction), form)
            .await?;

        let body: ConvertResponse = response.json().await.map_err(|e| {
            error!(error = %e, "conversion response was not the expected JSON");
            FiledeskError::MalformedResponse {
                kind,
                detail: e.to_string(),
            }
        })?;

        let location = self.endpoints.resolve_download(&body.download_url)?;
        info!(location = %location, "conversion ready for download");
        Ok(location.to_string())
    }

    #[instrument(skip(self, image), fields(file = %image.name, bytes = image.bytes.len()))]
    async fn crop(&self, image: UploadFile, region: NaturalRect) -> Result<Vec<u8>> {
        let kind = OperationKind::Crop;
        let form = Form::new()
            .part("image", file_part(kind, image)?)
            .text("x", region.x.to_string())
            .text("y", region.y.to_string())
            .text("width", region.width.to_string())
            .text("height", region.height.to_string());
        let response = self.post_form(kind, self.endpoints.crop(), form).await?;
        let body = read_bytes(kind, response).await?;
        info!(bytes = body.len(), "cropped image received");
        Ok(body)
    }

    #[instrument(skip(self))]
    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let kind = OperationKind::Convert;
        let url = Url::parse(url).map_err(|e| FiledeskError::InvalidUrl {
            url: url.to_string(),
            detail: e.to_string(),
        })?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport(kind, e))?;
        let response = ensure_success(kind, response)?;
        read_bytes(kind, response).await
    }
}

fn file_part(kind: OperationKind, file: UploadFile) -> Result<Part> {
    Part::bytes(file.bytes)
        .file_name(file.name)
        .mime_str(file.mime)
        .map_err(|e| transport(kind, e))
}

fn ensure_success(kind: OperationKind, response: Response) -> Result<Response> {
    let status = response.status();
    if !status.is_success() {
        error!(%kind, status = status.as_u16(), "service returned an error status");
        return Err(FiledeskError::HttpStatus {
            kind,
            status: status.as_u16(),
        });
    }
    Ok(response)
}

async fn read_bytes(kind: OperationKind, response: Response) -> Result<Vec<u8>> {
    let bytes = response.bytes().await.map_err(|e| transport(kind, e))?;
    Ok(bytes.to_vec())
}

fn transport(kind: OperationKind, err: reqwest::Error) -> FiledeskError {
    error!(%kind, error = %err, "request failed");
    FiledeskError::Transport {
        kind,
        detail: err.to_string(),
    }
}
