// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Crop geometry — map a rectangle drawn on a scaled preview onto the original
// image's pixel grid.
//
// The preview is shown at some displayed size; the crop service works in
// natural pixels. The two spaces differ by one scale factor per axis:
//
//   scale_x = natural.width  / displayed.width
//   scale_y = natural.height / displayed.height
//
// Each field of the displayed rectangle is multiplied by its axis scale and
// rounded to the nearest integer, ties away from zero.

use filedesk_core::error::GeometryError;
use filedesk_core::types::{DisplayedRect, ImageSize, NaturalRect};
use tracing::debug;

/// Stateless resolver from displayed-pixel crop rectangles to natural-pixel
/// rectangles.
///
/// The result is not clamped to the image bounds: a rectangle hanging off the
/// edge of the preview maps to one hanging off the edge of the image, and the
/// crop service decides what to do with it.
///
/// ```ignore
/// let natural = CropGeometryResolver::resolve(
///     &DisplayedRect::new(10.0, 10.0, 20.0, 20.0),
///     ImageSize::new(100, 100),
///     ImageSize::new(400, 200),
/// )?;
/// assert_eq!(natural, NaturalRect::new(40, 20, 80, 40));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CropGeometryResolver;

impl CropGeometryResolver {
    /// Per-axis factors that take displayed pixels to natural pixels.
    pub fn scale_factors(
        displayed: ImageSize,
        natural: ImageSize,
    ) -> Result<(f64, f64), GeometryError> {
        if displayed.is_empty() {
            return Err(GeometryError::ZeroDisplayedSize {
                width: displayed.width,
                height: displayed.height,
            });
        }
        Ok((
            f64::from(natural.width) / f64::from(displayed.width),
            f64::from(natural.height) / f64::from(displayed.height),
        ))
    }

    /// Map `region` from displayed pixels to natural pixels.
    pub fn resolve(
        region: &DisplayedRect,
        displayed: ImageSize,
        natural: ImageSize,
    ) -> Result<NaturalRect, GeometryError> {
        let (scale_x, scale_y) = Self::scale_factors(displayed, natural)?;

        let resolved = NaturalRect {
            x: scale_round(region.x, scale_x),
            y: scale_round(region.y, scale_y),
            width: scale_round(region.width, scale_x),
            height: scale_round(region.height, scale_y),
        };

        if resolved.width <= 0 || resolved.height <= 0 {
            return Err(GeometryError::DegenerateResult {
                width: resolved.width,
                height: resolved.height,
            });
        }

        debug!(
            scale_x,
            scale_y,
            x = resolved.x,
            y = resolved.y,
            width = resolved.width,
            height = resolved.height,
            "crop region resolved to natural pixels"
        );
        Ok(resolved)
    }
}

/// `f64::round` rounds half away from zero; NaN saturates to 0.
fn scale_round(value: f64, scale: f64) -> i64 {
    (value * scale).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(
        rect: (f64, f64, f64, f64),
        displayed: (u32, u32),
        natural: (u32, u32),
    ) -> Result<NaturalRect, GeometryError> {
        CropGeometryResolver::resolve(
            &DisplayedRect::new(rect.0, rect.1, rect.2, rect.3),
            ImageSize::new(displayed.0, displayed.1),
            ImageSize::new(natural.0, natural.1),
        )
    }

    #[test]
    fn scales_each_axis_independently() {
        let natural = resolve((10.0, 10.0, 20.0, 20.0), (100, 100), (400, 200)).unwrap();
        assert_eq!(natural, NaturalRect::new(40, 20, 80, 40));
    }

    #[test]
    fn repeated_calls_agree() {
        let first = resolve((12.3, 45.6, 78.9, 10.1), (640, 480), (4032, 3024)).unwrap();
        for _ in 0..10 {
            assert_eq!(
                resolve((12.3, 45.6, 78.9, 10.1), (640, 480), (4032, 3024)).unwrap(),
                first
            );
        }
    }

    #[test]
    fn unscaled_preview_is_identity_after_rounding() {
        let natural = resolve((3.4, 3.6, 50.0, 49.5), (200, 200), (200, 200)).unwrap();
        assert_eq!(natural, NaturalRect::new(3, 4, 50, 50));
    }

    #[test]
    fn halves_round_away_from_zero() {
        // scale 2.5 on both axes
        let natural = resolve((1.0, 3.0, 1.0, 1.0), (2, 2), (5, 5)).unwrap();
        assert_eq!(natural, NaturalRect::new(3, 8, 3, 3));

        let natural = resolve((-1.0, 0.0, 1.0, 1.0), (2, 2), (5, 5)).unwrap();
        assert_eq!(natural.x, -3);
    }

    #[test]
    fn zero_displayed_width_or_height_fails() {
        assert_eq!(
            resolve((0.0, 0.0, 10.0, 10.0), (0, 100), (400, 200)),
            Err(GeometryError::ZeroDisplayedSize {
                width: 0,
                height: 100
            })
        );
        assert!(matches!(
            resolve((0.0, 0.0, 10.0, 10.0), (100, 0), (400, 200)),
            Err(GeometryError::ZeroDisplayedSize { .. })
        ));
    }

    #[test]
    fn region_that_rounds_to_nothing_fails() {
        // 0.4 displayed px on a 1:1000 downscale rounds to 0 natural px
        let err = resolve((0.0, 0.0, 0.4, 10.0), (1000, 1000), (1, 1)).unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateResult { width: 0, .. }));

        assert!(resolve((5.0, 5.0, 0.0, 0.0), (100, 100), (400, 400)).is_err());
    }

    #[test]
    fn out_of_bounds_region_passes_through_unclamped() {
        let natural = resolve((90.0, 90.0, 20.0, 20.0), (100, 100), (400, 400)).unwrap();
        assert_eq!(natural, NaturalRect::new(360, 360, 80, 80));
        assert!(natural.x + natural.width > 400);
    }

    #[test]
    fn arguments_are_not_mutated() {
        let rect = DisplayedRect::new(10.0, 10.0, 20.0, 20.0);
        let before = rect;
        let _ = CropGeometryResolver::resolve(&rect, ImageSize::new(50, 50), ImageSize::new(100, 100));
        assert_eq!(rect, before);
    }
}
