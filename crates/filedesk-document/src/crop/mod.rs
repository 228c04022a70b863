// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Crop module — coordinate mapping and on-screen rectangle selection.

pub mod geometry;
pub mod selection;

pub use geometry::CropGeometryResolver;
pub use selection::CropDrag;
