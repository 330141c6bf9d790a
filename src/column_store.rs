//! Per-column partial sums for the sliding N×N window (§4.2).
//!
//! `ColumnSumStore` is a passive vector: it neither allocates nor decides
//! whether its backing storage is transient or pool-borrowed. The caller
//! (the `Driver`, via `pool::Buffers`) owns three `[i64]` slices of length
//! `nx + N` and hands mutable borrows of them in here.

use crate::gradient::gradient_products;
use crate::image::ImageView;

pub struct ColumnSumStore<'a> {
    s00: &'a mut [i64],
    s11: &'a mut [i64],
    s01: &'a mut [i64],
}

impl<'a> ColumnSumStore<'a> {
    pub fn new(s00: &'a mut [i64], s11: &'a mut [i64], s01: &'a mut [i64]) -> Self {
        debug_assert_eq!(s00.len(), s11.len());
        debug_assert_eq!(s00.len(), s01.len());
        ColumnSumStore { s00, s11, s01 }
    }

    pub fn len(&self) -> usize {
        self.s00.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resets column `j` to zero.
    #[inline]
    pub fn zero(&mut self, j: usize) {
        self.s00[j] = 0;
        self.s11[j] = 0;
        self.s01[j] = 0;
    }

    /// Adds the gradient products at `(x_img, y_img)` into column `j`.
    #[inline]
    pub fn add_row(&mut self, image: &ImageView<'_>, j: usize, x_img: usize, y_img: usize) {
        let (d00, d11, d01) = gradient_products(image, x_img, y_img);
        self.s00[j] += d00;
        self.s11[j] += d11;
        self.s01[j] += d01;
    }

    /// Subtracts the gradient products at `(x_img, y_img)` from column `j`.
    #[inline]
    pub fn sub_row(&mut self, image: &ImageView<'_>, j: usize, x_img: usize, y_img: usize) {
        let (d00, d11, d01) = gradient_products(image, x_img, y_img);
        self.s00[j] -= d00;
        self.s11[j] -= d11;
        self.s01[j] -= d01;
    }

    /// Reads `(s00, s01, s11)` for column `j`.
    #[inline]
    pub fn get(&self, j: usize) -> (i64, i64, i64) {
        (self.s00[j], self.s01[j], self.s11[j])
    }
}
