// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Crop box drag selection over the on-screen preview.

use filedesk_core::types::{DisplayedRect, ImageSize};

/// An in-progress drag on the preview, anchored where the pointer went down.
///
/// Pointer positions are clamped into the preview so the box never leaves
/// it. With `square` set the box keeps a 1:1 aspect, sized by the shorter
/// of the two drag deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropDrag {
    origin_x: f64,
    origin_y: f64,
    bounds: ImageSize,
    square: bool,
}

impl CropDrag {
    /// Start a drag at `(x, y)` displayed pixels.
    pub fn start(x: f64, y: f64, bounds: ImageSize, square: bool) -> Self {
        let (origin_x, origin_y) = clamp_point(x, y, bounds);
        Self {
            origin_x,
            origin_y,
            bounds,
            square,
        }
    }

    /// The rectangle spanned from the anchor to the pointer at `(x, y)`.
    pub fn rect_to(&self, x: f64, y: f64) -> DisplayedRect {
        let (x, y) = clamp_point(x, y, self.bounds);
        let mut dx = x - self.origin_x;
        let mut dy = y - self.origin_y;

        if self.square {
            let side = dx.abs().min(dy.abs());
            dx = side.copysign(dx);
            dy = side.copysign(dy);
        }

        DisplayedRect {
            x: if dx < 0.0 { self.origin_x + dx } else { self.origin_x },
            y: if dy < 0.0 { self.origin_y + dy } else { self.origin_y },
            width: dx.abs(),
            height: dy.abs(),
        }
    }
}

fn clamp_point(x: f64, y: f64, bounds: ImageSize) -> (f64, f64) {
    (
        x.clamp(0.0, f64::from(bounds.width)),
        y.clamp(0.0, f64::from(bounds.height)),
    )
}
