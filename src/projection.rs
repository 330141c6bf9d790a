//! Equirectangular map-projection helpers (§4.12).
//!
//! Used to place a landmark's known `(lon, lat)` position onto a reference
//! image before interest-point matching. Longitude spans `[-pi, pi]` mapped
//! to `[0, xdim)`; latitude spans `[pi/2, -pi/2]` (north to south) mapped to
//! `[0, ydim)`.

use std::f64::consts::PI;

/// Converts `(lon, lat)` in radians to pixel `(x, y)` of a `xdim x ydim`
/// equirectangular raster.
pub fn equirectangular_to_pixel(lon: f64, lat: f64, xdim: usize, ydim: usize) -> (f64, f64) {
    let x = (lon + PI) / (2.0 * PI) * xdim as f64;
    let y = (PI / 2.0 - lat) / PI * ydim as f64;
    (x, y)
}

/// Converts pixel `(x, y)` of a `xdim x ydim` equirectangular raster back to
/// `(lon, lat)` in radians.
pub fn pixel_to_equirectangular(x: f64, y: f64, xdim: usize, ydim: usize) -> (f64, f64) {
    let lon = x / xdim as f64 * 2.0 * PI - PI;
    let lat = PI / 2.0 - y / ydim as f64 * PI;
    (lon, lat)
}
