// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Suggested file names for transformed artifacts.

use filedesk_core::types::ConvertDirection;

/// Fixed name of every cropped image; the crop service always returns PNG.
pub const CROPPED_NAME: &str = "cropped-image.png";

/// `report.pdf` → `compressed-report.pdf`.
pub fn compressed_name(original: &str) -> String {
    format!("compressed-{original}")
}

/// Replace the last suffix of `original` with the conversion target's.
/// The suffix is matched regardless of case: `Report.PDF` → `Report.docx`.
pub fn converted_name(original: &str, direction: ConvertDirection) -> String {
    let stem = original
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(original);
    format!("{stem}{}", direction.target_extension().as_str())
}

/// `photo.png`, 2 → `photo (2).png`. Used to avoid overwriting on save.
pub fn numbered_name(name: &str, n: u32) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem} ({n}).{ext}"),
        _ => format!("{name} ({n})"),
    }
}
