//! `Driver`: the ROI state machine dispatching to the four accumulator
//! transitions and to an `OutputSink` (§4.5). Grounded on the teacher's
//! render-pipeline row-group loop (`jxl/src/render/low_memory_pipeline/mod.rs`),
//! which drives a similar "first row vs. later row, first column vs. later
//! column" state machine over incremental row buffers.

use crate::accumulator::WindowAccumulator;
use crate::config::ValidRect;
use crate::image::{ImageView, Rect};
use crate::pool::Buffers;
use crate::sink::OutputSink;

pub struct Driver<'a> {
    image: ImageView<'a>,
    roi: Rect,
    w: i64,
    valid: ValidRect,
}

impl<'a> Driver<'a> {
    pub fn new(image: ImageView<'a>, roi: Rect, w: usize, valid: ValidRect) -> Self {
        Driver { image, roi, w: w as i64, valid }
    }

    /// Length required of each `ColumnSumStore` buffer for this driver's ROI.
    pub fn store_len(&self) -> usize {
        self.roi.nx + (2 * self.w as usize + 1)
    }

    /// Runs the state machine, feeding every ROI pixel to `sink` in row-major
    /// order. `buffers` must already be sized for at least `store_len()`.
    pub fn run(&self, buffers: &mut Buffers, sink: &mut dyn OutputSink) {
        let store = buffers.column_store(self.store_len());
        let base_x = self.roi.x0 as i64 - self.w;
        let mut acc = WindowAccumulator::new(store, base_x, self.w as usize);

        if self.valid.is_empty() {
            for y in 0..self.roi.ny {
                let y_img = self.roi.y0 + y;
                for x in 0..self.roi.nx {
                    sink.invalid(self.roi.x0 + x, y_img);
                }
            }
            return;
        }

        let mut first_row_done = false;
        for y in 0..self.roi.ny {
            let y_img = (self.roi.y0 + y) as i64;
            let row_valid = y_img >= self.valid.y_start && y_img <= self.valid.y_stop;
            let is_first_valid_row = row_valid && !first_row_done;
            if row_valid {
                first_row_done = true;
            }

            let mut first_col_in_row = true;
            for x in 0..self.roi.nx {
                let x_img = (self.roi.x0 + x) as i64;
                let col_valid = row_valid && x_img >= self.valid.x_start && x_img <= self.valid.x_stop;
                if !col_valid {
                    sink.invalid(x_img as usize, y_img as usize);
                    continue;
                }

                match (is_first_valid_row, first_col_in_row) {
                    (true, true) => acc.init_first(&self.image, x_img, y_img),
                    (true, false) => acc.slide_right_first_row(&self.image, x_img),
                    (false, true) => acc.begin_row(&self.image, x_img, y_img),
                    (false, false) => acc.slide_right(&self.image, x_img),
                }
                first_col_in_row = false;

                sink.valid(x_img as usize, y_img as usize, acc.m00, acc.m10, acc.m11);
            }
        }
    }
}
