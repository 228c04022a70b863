// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// filedesk-remote — Clients for the remote transformation services.
//
// Each operation is a single multipart POST to an opaque HTTP endpoint.
// The `TransformService` trait is the seam the session drives; the reqwest
// implementation lives in `http_client`.

pub mod endpoints;
pub mod http_client;
pub mod service;

pub use endpoints::Endpoints;
pub use http_client::HttpTransformService;
pub use service::{TransformService, UploadFile};
