//! The four public entry points (§6), each: build a `ForstnerConfig`,
//! validate it, acquire buffers, build a `Driver`, and dispatch to the
//! matching `OutputSink`. Grounded on the teacher's top-level `decode`/
//! `encode` functions in `jxl/src/lib.rs`, which follow the same
//! validate-then-drive shape.

use crate::config::ForstnerConfig;
use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::image::{check_plane_len, ImageView, Rect};
use crate::pool::Buffers;
use crate::sink::{BestSink, CovarianceSink, DenseScoreSink, TopKSink};

/// Writes the dense Förstner interest image into `out_interest`
/// (`xdim * ydim` row-major floats). Pixels outside `roi` are untouched;
/// within `roi`, invalid positions are `-1.0` and degenerate positions are
/// `-2.0`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(image, out_interest), err))]
pub fn forstner_dense(
    image: &[u8],
    xdim: usize,
    ydim: usize,
    roi: Rect,
    window: usize,
    out_interest: &mut [f32],
) -> Result<()> {
    check_plane_len(out_interest.len(), xdim, ydim)?;
    let view = ImageView::new(image, xdim, ydim)?;
    let cfg = ForstnerConfig::new(window, roi);
    let (w, valid) = cfg.validate(xdim, ydim)?;

    let driver = Driver::new(view, roi, w, valid);
    let mut buffers = Buffers::acquire(roi.nx, 2 * w + 1)?;
    let mut sink = DenseScoreSink::new(out_interest, xdim, cfg.degenerate_threshold);
    driver.run(&mut buffers, &mut sink);
    Ok(())
}

/// Writes the dense inverse-structure-tensor covariance image (`a`, `b`, `d`
/// entries of `M^-1`) into three parallel `xdim * ydim` planes, with the
/// same sentinel convention as `forstner_dense`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(image, out_c00, out_c01, out_c11), err))]
pub fn forstner_covariance(
    image: &[u8],
    xdim: usize,
    ydim: usize,
    roi: Rect,
    window: usize,
    out_c00: &mut [f32],
    out_c01: &mut [f32],
    out_c11: &mut [f32],
) -> Result<()> {
    check_plane_len(out_c00.len(), xdim, ydim)?;
    check_plane_len(out_c01.len(), xdim, ydim)?;
    check_plane_len(out_c11.len(), xdim, ydim)?;
    let view = ImageView::new(image, xdim, ydim)?;
    let cfg = ForstnerConfig::new(window, roi);
    let (w, valid) = cfg.validate(xdim, ydim)?;

    let driver = Driver::new(view, roi, w, valid);
    let mut buffers = Buffers::acquire(roi.nx, 2 * w + 1)?;
    let mut sink = CovarianceSink::new(out_c00, out_c01, out_c11, xdim, cfg.degenerate_threshold);
    driver.run(&mut buffers, &mut sink);
    Ok(())
}

/// Returns the single non-degenerate point in `roi` with the smallest
/// Förstner score, or `None` if every ROI pixel is invalid or degenerate.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(image), err))]
pub fn forstner_best(image: &[u8], xdim: usize, ydim: usize, roi: Rect, window: usize) -> Result<Option<(usize, usize, f64)>> {
    let view = ImageView::new(image, xdim, ydim)?;
    let cfg = ForstnerConfig::new(window, roi);
    let (w, valid) = cfg.validate(xdim, ydim)?;

    let driver = Driver::new(view, roi, w, valid);
    let mut buffers = Buffers::acquire(roi.nx, 2 * w + 1)?;
    let mut sink = BestSink::new(cfg.degenerate_threshold);
    driver.run(&mut buffers, &mut sink);
    Ok(sink.into_best())
}

/// Returns up to `k` non-degenerate points in `roi` with the smallest
/// Förstner scores, in no defined order.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(image), err))]
pub fn forstner_topk(
    image: &[u8],
    xdim: usize,
    ydim: usize,
    roi: Rect,
    window: usize,
    k: usize,
) -> Result<Vec<(usize, usize, f64)>> {
    if k == 0 {
        return Err(Error::ZeroK);
    }
    let view = ImageView::new(image, xdim, ydim)?;
    let cfg = ForstnerConfig::new(window, roi);
    let (w, valid) = cfg.validate(xdim, ydim)?;

    let driver = Driver::new(view, roi, w, valid);
    let mut buffers = Buffers::acquire(roi.nx, 2 * w + 1)?;
    let mut sink = TopKSink::new(k, cfg.degenerate_threshold);
    driver.run(&mut buffers, &mut sink);
    Ok(sink.into_points())
}
