//! `ForstnerConfig`: centralizes the `BadParameter` checks (§4.7, §7) so the
//! driver itself never has to re-validate N, the ROI, or K.

use crate::eigen::DEFAULT_DEGENERATE_THRESHOLD;
use crate::error::{Error, Result};
use crate::image::Rect;

/// The image-global, inclusive rectangle of pixel centers where the N×N
/// neighborhood (and its one-pixel-further gradient taps) fit entirely
/// inside the image.
#[derive(Clone, Copy, Debug)]
pub struct ValidRect {
    pub x_start: i64,
    pub x_stop: i64,
    pub y_start: i64,
    pub y_stop: i64,
}

impl ValidRect {
    pub fn is_empty(&self) -> bool {
        self.x_start > self.x_stop || self.y_start > self.y_stop
    }
}

/// Validated engine parameters: window size, ROI, and the (normally default)
/// degeneracy threshold.
#[derive(Clone, Copy, Debug)]
pub struct ForstnerConfig {
    pub window: usize,
    pub roi: Rect,
    pub degenerate_threshold: f64,
}

impl ForstnerConfig {
    pub fn new(window: usize, roi: Rect) -> Self {
        ForstnerConfig { window, roi, degenerate_threshold: DEFAULT_DEGENERATE_THRESHOLD }
    }

    /// Overrides the default `det/4 < 1e-5` degeneracy threshold. Per
    /// `SPEC_FULL.md` §9, scaling this with N is the caller's responsibility.
    pub fn with_degenerate_threshold(mut self, threshold: f64) -> Self {
        self.degenerate_threshold = threshold;
        self
    }

    /// Half-width `w = N / 2`.
    pub fn half_width(&self) -> usize {
        self.window / 2
    }

    /// Runs every `BadParameter` check and, on success, returns the half
    /// width and the valid rectangle for a `xdim x ydim` image.
    pub fn validate(&self, xdim: usize, ydim: usize) -> Result<(usize, ValidRect)> {
        if self.window < 3 || self.window % 2 == 0 {
            return Err(Error::WindowNotOdd(self.window));
        }
        self.roi.validate(xdim, ydim)?;

        let w = self.half_width() as i64;
        let xdim = xdim as i64;
        let ydim = ydim as i64;
        let x_start = w.max(self.roi.x0 as i64);
        let x_stop = (xdim - w - 1).min(self.roi.x0 as i64 + self.roi.nx as i64 - 1);
        let y_start = w.max(self.roi.y0 as i64);
        let y_stop = (ydim - w - 1).min(self.roi.y0 as i64 + self.roi.ny as i64 - 1);

        Ok((w as usize, ValidRect { x_start, x_stop, y_start, y_stop }))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_even_window() {
        let cfg = ForstnerConfig::new(4, Rect::full(32, 32));
        assert!(matches!(cfg.validate(32, 32), Err(Error::WindowNotOdd(4))));
    }

    #[test]
    fn rejects_too_small_window() {
        let cfg = ForstnerConfig::new(1, Rect::full(32, 32));
        assert!(cfg.validate(32, 32).is_err());
    }

    #[test]
    fn valid_rect_matches_spec_formula() {
        // xdim=64, ydim=64, full ROI, N=5 => w=2, valid x in [2,61].
        let cfg = ForstnerConfig::new(5, Rect::full(64, 64));
        let (w, vr) = cfg.validate(64, 64).unwrap();
        assert_eq!(w, 2);
        assert_eq!((vr.x_start, vr.x_stop), (2, 61));
        assert_eq!((vr.y_start, vr.y_stop), (2, 61));
    }

    #[test]
    fn roi_smaller_than_valid_rect_clips_it() {
        let cfg = ForstnerConfig::new(5, Rect::new(10, 10, 5, 5));
        let (_, vr) = cfg.validate(64, 64).unwrap();
        assert_eq!((vr.x_start, vr.x_stop), (10, 14));
        assert_eq!((vr.y_start, vr.y_stop), (10, 14));
    }

    #[test]
    fn tiny_image_has_empty_valid_rect() {
        let cfg = ForstnerConfig::new(7, Rect::full(4, 4));
        let (_, vr) = cfg.validate(4, 4).unwrap();
        assert!(vr.is_empty());
    }
}
