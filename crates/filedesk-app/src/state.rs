// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signals for the Dioxus UI.

use filedesk_core::AppConfig;
use filedesk_core::types::ImageSize;
use filedesk_document::ImagePreview;
use filedesk_session::FileSession;

use crate::services::app_services::AppServices;

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug)]
pub struct AppState {
    /// Selection, operation state, crop box and status notice.
    pub session: FileSession,
    /// Preview of the selected image, if it is one and it decoded.
    pub preview: Option<ImagePreview>,
    /// The last cropped image, shown under the original.
    pub cropped_preview: Option<ImagePreview>,
    /// Application settings as edited on the settings page.
    pub config: AppConfig,
}

impl AppState {
    pub fn new(svc: &AppServices) -> Self {
        Self {
            session: FileSession::new(),
            preview: None,
            cropped_preview: None,
            config: svc.config(),
        }
    }

    /// On-screen size of the preview at the configured width.
    pub fn displayed_size(&self) -> Option<ImageSize> {
        self.preview
            .as_ref()
            .map(|p| p.displayed_size(self.config.preview_max_width))
    }
}
