// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// filedesk-document — Local file and image logic for Filedesk.
//
// Provides the displayed-to-natural crop coordinate mapping, crop-box drag
// selection, image previews sized for the screen, and the deterministic
// names given to transformed artifacts. Nothing here touches the network.

pub mod crop;
pub mod naming;
pub mod preview;

// Re-export the primary types so callers can use `filedesk_document::CropGeometryResolver` etc.
pub use crop::geometry::CropGeometryResolver;
pub use crop::selection::CropDrag;
pub use preview::ImagePreview;
