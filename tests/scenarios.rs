//! End-to-end scenarios against the public API, covering the concrete cases
//! and cross-cutting invariants described alongside the engine's design.

use forstner::{forstner_best, forstner_covariance, forstner_dense, forstner_topk, Error, Rect};

fn ramp_image(xdim: usize, ydim: usize) -> Vec<u8> {
    (0..xdim * ydim)
        .map(|i| {
            let x = i % xdim;
            let y = i / xdim;
            ((x * 37 + y * 91) % 256) as u8
        })
        .collect()
}

fn impulse_image(xdim: usize, ydim: usize, at: (usize, usize)) -> Vec<u8> {
    let mut data = vec![0u8; xdim * ydim];
    data[at.1 * xdim + at.0] = 255;
    data
}

#[test]
fn s1_constant_image_is_all_degenerate_in_valid_rect() {
    let xdim = 64;
    let ydim = 64;
    let data = vec![128u8; xdim * ydim];
    let mut out = vec![0.0f32; xdim * ydim];
    forstner_dense(&data, xdim, ydim, Rect::full(xdim, ydim), 5, &mut out).unwrap();

    for y in 0..ydim {
        for x in 0..xdim {
            let v = out[y * xdim + x];
            if (2..=61).contains(&x) && (2..=61).contains(&y) {
                assert_eq!(v, -2.0, "expected degenerate at ({x},{y})");
            } else {
                assert_eq!(v, -1.0, "expected invalid at ({x},{y})");
            }
        }
    }
}

#[test]
fn s2_horizontal_ramp_is_degenerate_everywhere_valid() {
    let xdim = 32;
    let ydim = 32;
    let data: Vec<u8> = (0..xdim * ydim).map(|i| (i % xdim).min(255) as u8).collect();
    let mut out = vec![0.0f32; xdim * ydim];
    forstner_dense(&data, xdim, ydim, Rect::full(xdim, ydim), 3, &mut out).unwrap();

    for y in 1..ydim - 1 {
        for x in 1..xdim - 1 {
            assert_eq!(out[y * xdim + x], -2.0);
        }
    }
}

#[test]
fn s3_checkerboard_scores_are_finite_and_positive() {
    let xdim = 16;
    let ydim = 16;
    let data: Vec<u8> = (0..xdim * ydim)
        .map(|i| {
            let x = i % xdim;
            let y = i / xdim;
            if (x / 2 + y / 2) % 2 == 0 {
                255
            } else {
                0
            }
        })
        .collect();

    let mut out = vec![0.0f32; xdim * ydim];
    forstner_dense(&data, xdim, ydim, Rect::full(xdim, ydim), 5, &mut out).unwrap();
    for y in 2..ydim - 2 {
        for x in 2..xdim - 2 {
            let v = out[y * xdim + x];
            assert!(v.is_finite());
            assert!(v == -2.0 || v >= 0.0);
        }
    }

    let best = forstner_best(&data, xdim, ydim, Rect::full(xdim, ydim), 5).unwrap();
    assert!(best.is_some());
    let (bx, by, bval) = best.unwrap();
    assert!(bval >= 0.0);
    assert_eq!(out[by * xdim + bx] as f64, bval);
}

#[test]
fn s4_single_impulse_has_local_structure_and_far_degeneracy() {
    let xdim = 16;
    let ydim = 16;
    let data = impulse_image(xdim, ydim, (8, 8));
    let mut out = vec![0.0f32; xdim * ydim];
    forstner_dense(&data, xdim, ydim, Rect::full(xdim, ydim), 5, &mut out).unwrap();

    // Far from the impulse, all gradients are zero => degenerate.
    assert_eq!(out[3 * xdim + 3], -2.0);
    // Near the impulse, expect a finite positive score somewhere in range.
    let mut saw_positive = false;
    for dy in -2i32..=2 {
        for dx in -2i32..=2 {
            let x = (8 + dx) as usize;
            let y = (8 + dy) as usize;
            let v = out[y * xdim + x];
            if v > 0.0 {
                saw_positive = true;
            }
        }
    }
    assert!(saw_positive);
}

#[test]
fn s5_roi_subregion_matches_full_dense_overlap() {
    let xdim = 100;
    let ydim = 100;
    let data = ramp_image(xdim, ydim);

    let mut out_full = vec![0.0f32; xdim * ydim];
    forstner_dense(&data, xdim, ydim, Rect::full(xdim, ydim), 5, &mut out_full).unwrap();

    let roi = Rect::new(25, 25, 50, 50);
    let mut out_roi = vec![0.0f32; xdim * ydim];
    forstner_dense(&data, xdim, ydim, roi, 5, &mut out_roi).unwrap();

    for y in roi.y0..roi.y0 + roi.ny {
        for x in roi.x0..roi.x0 + roi.nx {
            assert_eq!(out_full[y * xdim + x], out_roi[y * xdim + x], "mismatch at ({x},{y})");
        }
    }
}

#[test]
fn s6_topk_matches_smallest_dense_values_as_multiset() {
    let xdim = 48;
    let ydim = 48;
    let data = ramp_image(xdim, ydim);

    let mut out = vec![0.0f32; xdim * ydim];
    forstner_dense(&data, xdim, ydim, Rect::full(xdim, ydim), 5, &mut out).unwrap();
    let mut dense_values: Vec<f32> = out.iter().copied().filter(|&v| v >= 0.0).collect();
    dense_values.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let k = 10;
    let points = forstner_topk(&data, xdim, ydim, Rect::full(xdim, ydim), 5, k).unwrap();
    assert_eq!(points.len(), k);

    let mut topk_values: Vec<f32> = points.iter().map(|p| p.2 as f32).collect();
    topk_values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let expected = &dense_values[..k];
    for (a, b) in topk_values.iter().zip(expected.iter()) {
        assert!((a - b).abs() < 1e-3, "topk {a} vs dense {b}");
    }
}

#[test]
fn n_even_is_rejected_and_touches_no_output() {
    let xdim = 32;
    let ydim = 32;
    let data = ramp_image(xdim, ydim);
    let mut out = vec![-9.0f32; xdim * ydim];
    let err = forstner_dense(&data, xdim, ydim, Rect::full(xdim, ydim), 6, &mut out).unwrap_err();
    assert!(matches!(err, Error::WindowNotOdd(6)));
    assert!(out.iter().all(|&v| v == -9.0));
}

#[test]
fn best_agrees_with_dense_minimum() {
    let xdim = 48;
    let ydim = 48;
    let data = ramp_image(xdim, ydim);

    let mut out = vec![0.0f32; xdim * ydim];
    forstner_dense(&data, xdim, ydim, Rect::full(xdim, ydim), 5, &mut out).unwrap();
    let dense_min = out.iter().copied().filter(|&v| v >= 0.0).fold(f32::MAX, f32::min);

    let (bx, by, bval) = forstner_best(&data, xdim, ydim, Rect::full(xdim, ydim), 5).unwrap().unwrap();
    assert!((bval as f32 - dense_min).abs() < 1e-3);
    assert_eq!(out[by * xdim + bx], bval as f32);
}

#[test]
fn pool_reuse_is_bitwise_idempotent() {
    let xdim = 40;
    let ydim = 40;
    let data = ramp_image(xdim, ydim);
    let roi = Rect::full(xdim, ydim);

    let mut transient_a = vec![0.0f32; xdim * ydim];
    let mut transient_b = vec![0.0f32; xdim * ydim];
    forstner_dense(&data, xdim, ydim, roi, 5, &mut transient_a).unwrap();
    forstner_dense(&data, xdim, ydim, roi, 5, &mut transient_b).unwrap();
    assert_eq!(transient_a, transient_b);

    forstner::engine_pool_reserve(xdim, 5).unwrap();
    let mut pooled_a = vec![0.0f32; xdim * ydim];
    let mut pooled_b = vec![0.0f32; xdim * ydim];
    forstner_dense(&data, xdim, ydim, roi, 5, &mut pooled_a).unwrap();
    forstner_dense(&data, xdim, ydim, roi, 5, &mut pooled_b).unwrap();
    forstner::engine_pool_release();

    assert_eq!(transient_a, pooled_a);
    assert_eq!(pooled_a, pooled_b);
}

#[test]
fn roi_bounds_never_written_outside_roi() {
    let xdim = 30;
    let ydim = 30;
    let data = ramp_image(xdim, ydim);
    let roi = Rect::new(5, 5, 10, 10);

    let sentinel = -42.0f32;
    let mut out = vec![sentinel; xdim * ydim];
    forstner_dense(&data, xdim, ydim, roi, 3, &mut out).unwrap();

    for y in 0..ydim {
        for x in 0..xdim {
            let inside_roi = x >= roi.x0 && x < roi.x0 + roi.nx && y >= roi.y0 && y < roi.y0 + roi.ny;
            if !inside_roi {
                assert_eq!(out[y * xdim + x], sentinel, "pixel ({x},{y}) outside ROI was written");
            }
        }
    }
}

#[test]
fn covariance_matches_dense_score_degeneracy_flags() {
    let xdim = 32;
    let ydim = 32;
    let data = vec![7u8; xdim * ydim];
    let roi = Rect::full(xdim, ydim);

    let mut interest = vec![0.0f32; xdim * ydim];
    forstner_dense(&data, xdim, ydim, roi, 5, &mut interest).unwrap();

    let mut c00 = vec![0.0f32; xdim * ydim];
    let mut c01 = vec![0.0f32; xdim * ydim];
    let mut c11 = vec![0.0f32; xdim * ydim];
    forstner_covariance(&data, xdim, ydim, roi, 5, &mut c00, &mut c01, &mut c11).unwrap();

    for y in 0..ydim {
        for x in 0..xdim {
            let idx = y * xdim + x;
            if interest[idx] == -2.0 {
                assert_eq!(c00[idx], -2.0);
                assert_eq!(c01[idx], -2.0);
                assert_eq!(c11[idx], -2.0);
            } else if interest[idx] == -1.0 {
                assert_eq!(c00[idx], -1.0);
            }
        }
    }
}
