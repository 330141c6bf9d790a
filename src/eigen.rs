//! `EigenScorer`: turns `(M00, M10, M11)` into a Förstner score (§4.4).

/// Default degeneracy threshold applied to `det(M)/4`. See `ForstnerConfig`
/// for how a caller can override it.
pub const DEFAULT_DEGENERATE_THRESHOLD: f64 = 1e-5;

/// Result of scoring one window. `Value` holds the larger eigenvalue of the
/// inverse structure tensor (smaller is "more interesting"); `Degenerate`
/// means the window's structure tensor was too close to singular to invert.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Score {
    Value(f64),
    Degenerate,
}

/// Scores a window given its raw (unscaled) squared-gradient sums.
///
/// `det = (m00*m11 - m10*m10) / 4` compensates for the factor of 1/2 dropped
/// from both centered differences in `gradient`. Degenerate windows
/// (`det < threshold`) are reported rather than inverted.
pub fn score(m00: i64, m10: i64, m11: i64, threshold: f64) -> Score {
    let det = (m00 as f64 * m11 as f64 - m10 as f64 * m10 as f64) / 4.0;
    if det < threshold {
        return Score::Degenerate;
    }
    let a = m11 as f64 / det;
    let d = m00 as f64 / det;
    let b = -(m10 as f64) / det;
    let mean = (a + d) / 2.0;
    let half_diff = (a - d) / 2.0;
    let radius = (half_diff * half_diff + b * b).sqrt();
    Score::Value(mean + radius)
}

/// The inverse-matrix entries `(a, b, d)` used by `DenseCovariance`, without
/// the eigenvalue reduction. Returns `None` for a degenerate window.
pub fn inverse_entries(m00: i64, m10: i64, m11: i64, threshold: f64) -> Option<(f64, f64, f64)> {
    let det = (m00 as f64 * m11 as f64 - m10 as f64 * m10 as f64) / 4.0;
    if det < threshold {
        return None;
    }
    let a = m11 as f64 / det;
    let d = m00 as f64 / det;
    let b = -(m10 as f64) / det;
    Some((a, b, d))
}
