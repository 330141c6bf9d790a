//! `OutputSink`: the policy that collapses the four public operations
//! (`DenseScore`, `DenseCovariance`, `Best`, `TopK`) into tiny adapters over
//! one driver (§4.6). Grounded on the teacher's `RenderPipelineInOutStage`
//! trait (`jxl/src/render/stages/*.rs`): one trait, many small implementors,
//! each owning only its own output policy state.

use crate::eigen::{self, Score};

pub const INVALID_SENTINEL: f32 = -1.0;
pub const DEGENERATE_SENTINEL: f32 = -2.0;

/// Receives every pixel the driver visits, in row-major order.
pub trait OutputSink {
    /// A ROI pixel outside the valid rectangle. The accumulator was not
    /// touched for this pixel.
    fn invalid(&mut self, x: usize, y: usize);

    /// A pixel inside the valid rectangle, with its window's raw
    /// (unscaled) squared-gradient sums.
    fn valid(&mut self, x: usize, y: usize, m00: i64, m10: i64, m11: i64);
}

/// Dense interest image (§4.6, `forstner_dense`).
pub struct DenseScoreSink<'a> {
    out: &'a mut [f32],
    xdim: usize,
    threshold: f64,
}

impl<'a> DenseScoreSink<'a> {
    pub fn new(out: &'a mut [f32], xdim: usize, threshold: f64) -> Self {
        DenseScoreSink { out, xdim, threshold }
    }
}

impl OutputSink for DenseScoreSink<'_> {
    fn invalid(&mut self, x: usize, y: usize) {
        self.out[y * self.xdim + x] = INVALID_SENTINEL;
    }

    fn valid(&mut self, x: usize, y: usize, m00: i64, m10: i64, m11: i64) {
        let v = match eigen::score(m00, m10, m11, self.threshold) {
            Score::Value(v) => v as f32,
            Score::Degenerate => DEGENERATE_SENTINEL,
        };
        self.out[y * self.xdim + x] = v;
    }
}

/// Dense inverse-structure-tensor covariance image (§4.6, `forstner_covariance`).
pub struct CovarianceSink<'a> {
    c00: &'a mut [f32],
    c01: &'a mut [f32],
    c11: &'a mut [f32],
    xdim: usize,
    threshold: f64,
}

impl<'a> CovarianceSink<'a> {
    pub fn new(c00: &'a mut [f32], c01: &'a mut [f32], c11: &'a mut [f32], xdim: usize, threshold: f64) -> Self {
        CovarianceSink { c00, c01, c11, xdim, threshold }
    }
}

impl OutputSink for CovarianceSink<'_> {
    fn invalid(&mut self, x: usize, y: usize) {
        let idx = y * self.xdim + x;
        self.c00[idx] = INVALID_SENTINEL;
        self.c01[idx] = INVALID_SENTINEL;
        self.c11[idx] = INVALID_SENTINEL;
    }

    fn valid(&mut self, x: usize, y: usize, m00: i64, m10: i64, m11: i64) {
        let idx = y * self.xdim + x;
        match eigen::inverse_entries(m00, m10, m11, self.threshold) {
            Some((a, b, d)) => {
                self.c00[idx] = a as f32;
                self.c01[idx] = b as f32;
                self.c11[idx] = d as f32;
            }
            None => {
                self.c00[idx] = DEGENERATE_SENTINEL;
                self.c01[idx] = DEGENERATE_SENTINEL;
                self.c11[idx] = DEGENERATE_SENTINEL;
            }
        }
    }
}

/// Single best (smallest-λ) point (§4.6, `forstner_best`).
#[derive(Default)]
pub struct BestSink {
    threshold: f64,
    best: Option<(usize, usize, f64)>,
}

impl BestSink {
    pub fn new(threshold: f64) -> Self {
        BestSink { threshold, best: None }
    }

    pub fn into_best(self) -> Option<(usize, usize, f64)> {
        self.best
    }
}

impl OutputSink for BestSink {
    fn invalid(&mut self, _x: usize, _y: usize) {}

    fn valid(&mut self, x: usize, y: usize, m00: i64, m10: i64, m11: i64) {
        if let Score::Value(v) = eigen::score(m00, m10, m11, self.threshold) {
            let better = match self.best {
                None => true,
                Some((_, _, bval)) => v < bval,
            };
            if better {
                self.best = Some((x, y, v));
            }
        }
    }
}

/// The K smallest-λ points (§4.6, `forstner_topk`). Order is undefined.
pub struct TopKSink {
    threshold: f64,
    k: usize,
    points: Vec<(usize, usize, f64)>,
    worst_idx: Option<usize>,
}

impl TopKSink {
    pub fn new(k: usize, threshold: f64) -> Self {
        TopKSink { threshold, k, points: Vec::with_capacity(k), worst_idx: None }
    }

    pub fn into_points(self) -> Vec<(usize, usize, f64)> {
        self.points
    }

    fn recompute_worst(&mut self) {
        let mut worst = 0;
        for i in 1..self.points.len() {
            if self.points[i].2 > self.points[worst].2 {
                worst = i;
            }
        }
        self.worst_idx = Some(worst);
    }

    fn offer(&mut self, point: (usize, usize, f64)) {
        if self.points.len() < self.k {
            self.points.push(point);
            if self.points.len() == self.k {
                self.recompute_worst();
            }
            return;
        }
        let worst_idx = self.worst_idx.expect("worst_idx set once points.len() == k");
        if point.2 >= self.points[worst_idx].2 {
            return;
        }
        self.points[worst_idx] = point;
        self.recompute_worst();
    }
}

impl OutputSink for TopKSink {
    fn invalid(&mut self, _x: usize, _y: usize) {}

    fn valid(&mut self, x: usize, y: usize, m00: i64, m10: i64, m11: i64) {
        if let Score::Value(v) = eigen::score(m00, m10, m11, self.threshold) {
            self.offer((x, y, v));
        }
    }
}
