//! Direct-linear-transform homography fit and RANSAC outlier rejection
//! (§4.11). Grounded on the teacher's normal-equations solves in
//! `jxl/src/color/` (small dense linear systems solved by Gaussian
//! elimination rather than pulling in a full linear-algebra crate).

use rand::Rng;

use crate::error::{Error, Result};

/// Solves the direct linear transform for `h` (row-major 3x3, `h[8] = 1`)
/// minimizing reprojection error over `points`, each `(x, y, x', y')`.
/// Requires at least 4 correspondences.
pub fn fit_homography(points: &[(f64, f64, f64, f64)]) -> Result<[f64; 9]> {
    if points.len() < 4 {
        return Err(Error::NotEnoughCorrespondences { need: 4, got: points.len() });
    }

    // Each correspondence contributes two rows to A h = b, solved here via
    // the normal equations (A^T A) h = A^T b over the 8 free unknowns
    // (h22 fixed to 1).
    let mut ata = [[0.0f64; 8]; 8];
    let mut atb = [0.0f64; 8];

    for &(x, y, xp, yp) in points {
        let row_x = [x, y, 1.0, 0.0, 0.0, 0.0, -x * xp, -y * xp];
        let row_y = [0.0, 0.0, 0.0, x, y, 1.0, -x * yp, -y * yp];
        for (row, rhs) in [(row_x, xp), (row_y, yp)] {
            for i in 0..8 {
                atb[i] += row[i] * rhs;
                for j in 0..8 {
                    ata[i][j] += row[i] * row[j];
                }
            }
        }
    }

    let h8 = solve_8x8(ata, atb).ok_or(Error::SingularHomography)?;
    Ok([h8[0], h8[1], h8[2], h8[3], h8[4], h8[5], h8[6], h8[7], 1.0])
}

/// Gaussian elimination with partial pivoting on an 8x8 dense system.
fn solve_8x8(mut a: [[f64; 8]; 8], mut b: [f64; 8]) -> Option<[f64; 8]> {
    for col in 0..8 {
        let pivot = (col..8).max_by(|&i, &j| a[i][col].abs().partial_cmp(&a[j][col].abs()).unwrap())?;
        if a[pivot][col].abs() < 1e-12 {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in (col + 1)..8 {
            let factor = a[row][col] / a[col][col];
            for k in col..8 {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = [0.0f64; 8];
    for row in (0..8).rev() {
        let mut sum = b[row];
        for k in (row + 1)..8 {
            sum -= a[row][k] * x[k];
        }
        x[row] = sum / a[row][row];
    }
    Some(x)
}

fn apply_homography(h: &[f64; 9], x: f64, y: f64) -> (f64, f64) {
    let w = h[6] * x + h[7] * y + h[8];
    ((h[0] * x + h[1] * y + h[2]) / w, (h[3] * x + h[4] * y + h[5]) / w)
}

/// Repeatedly samples 4 correspondences, fits a homography, scores inliers
/// by reprojection distance against `inlier_threshold`, keeps the
/// best-scoring model across `iterations` trials, then refits on its final
/// inlier set.
pub fn ransac_homography<R: Rng>(
    points: &[(f64, f64, f64, f64)],
    iterations: usize,
    inlier_threshold: f64,
    rng: &mut R,
) -> Result<([f64; 9], Vec<usize>)> {
    if points.len() < 4 {
        return Err(Error::NotEnoughCorrespondences { need: 4, got: points.len() });
    }

    let mut best_inliers: Vec<usize> = Vec::new();
    let mut best_h: Option<[f64; 9]> = None;

    for _ in 0..iterations.max(1) {
        let mut sample_idx = [0usize; 4];
        for slot in &mut sample_idx {
            *slot = rng.random_range(0..points.len());
        }
        let sample: Vec<_> = sample_idx.iter().map(|&i| points[i]).collect();
        let Ok(h) = fit_homography(&sample) else { continue };

        let inliers: Vec<usize> = points
            .iter()
            .enumerate()
            .filter(|(_, &(x, y, xp, yp))| {
                let (px, py) = apply_homography(&h, x, y);
                let dx = px - xp;
                let dy = py - yp;
                (dx * dx + dy * dy).sqrt() <= inlier_threshold
            })
            .map(|(i, _)| i)
            .collect();

        if inliers.len() > best_inliers.len() {
            best_inliers = inliers;
            best_h = Some(h);
        }
    }

    let best_h = best_h.ok_or(Error::SingularHomography)?;
    if best_inliers.len() < 4 {
        return Ok((best_h, best_inliers));
    }

    let refit_points: Vec<_> = best_inliers.iter().map(|&i| points[i]).collect();
    let refit_h = fit_homography(&refit_points).unwrap_or(best_h);
    Ok((refit_h, best_inliers))
}
