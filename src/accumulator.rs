//! `WindowAccumulator`: the incremental sliding-window sum of gradient
//! products over the summed neighborhood inside the N×N window (§4.3).
//!
//! Open question resolved here (see `DESIGN.md`): the distilled spec's prose
//! for transition (A) gives an inner-loop bound ("1−w … w−1 exclusive")
//! whose own stated element count ("N−1") is internally inconsistent taken
//! literally, and a literal `-w..w` reading (the most obvious fix) is
//! actually unsafe: at the boundary of the valid rectangle (`cx == w`) it
//! samples gradients at column 0, whose centered difference needs column
//! `-1`. The valid-rectangle formula in §3, `x ∈ [w, xdim−w−1]`, already
//! prices in "sampling extends one pixel further for the central-difference
//! kernel" — which only holds if the *summed* window spans `cx ± (w−1)`
//! (an `(N−2)`-wide neighborhood: width `2w−1`), leaving exactly the outer
//! ring of one pixel for the gradient taps. That is the range implemented
//! here (`-(w-1)..=(w-1)`), consistently across all four transitions, and
//! it is the only reading of the distilled text that both matches §3's
//! margin arithmetic exactly and never samples outside the image. Tests
//! replicate these exact loop bounds rather than assuming "full N×N".

use crate::column_store::ColumnSumStore;
use crate::image::ImageView;

/// The three running totals over the current window, and the column-pointer
/// bookkeeping needed to apply transitions B-D in O(1) amortized work.
pub struct WindowAccumulator<'a> {
    store: ColumnSumStore<'a>,
    base_x: i64,
    /// Half-width of the *summed* neighborhood: `w - 1`, where `w` is the
    /// config half-width `N / 2`. See the module doc comment.
    hw: i64,
    /// Image x of the leftmost column currently included in the window.
    window_left_col: i64,
    /// Image y of the row currently centered in the window.
    center_y: i64,
    pub m00: i64,
    pub m10: i64,
    pub m11: i64,
}

impl<'a> WindowAccumulator<'a> {
    pub fn new(store: ColumnSumStore<'a>, base_x: i64, w: usize) -> Self {
        WindowAccumulator {
            store,
            base_x,
            hw: w as i64 - 1,
            window_left_col: 0,
            center_y: 0,
            m00: 0,
            m10: 0,
            m11: 0,
        }
    }

    #[inline]
    fn col_idx(&self, x_img: i64) -> usize {
        (x_img - self.base_x) as usize
    }

    /// Transition (A): cold-start the window at the first valid pixel of the
    /// first valid row.
    pub fn init_first(&mut self, image: &ImageView<'_>, cx: i64, cy: i64) {
        let hw = self.hw;
        self.window_left_col = cx - hw;
        self.center_y = cy;
        self.m00 = 0;
        self.m10 = 0;
        self.m11 = 0;
        for j in -hw..=hw {
            let x = cx + j;
            let idx = self.col_idx(x);
            self.store.zero(idx);
            for i in -hw..=hw {
                let y = cy + i;
                self.store.add_row(image, idx, x as usize, y as usize);
            }
            let (s00, s01, s11) = self.store.get(idx);
            self.m00 += s00;
            self.m11 += s11;
            self.m10 += s01;
        }
    }

    /// Transition (B): slide right by one pixel within the first valid row.
    pub fn slide_right_first_row(&mut self, image: &ImageView<'_>, new_cx: i64) {
        let hw = self.hw;
        let new_right_x = new_cx + hw;
        let idx_new = self.col_idx(new_right_x);
        self.store.zero(idx_new);
        for i in -hw..=hw {
            let y = self.center_y + i;
            self.store.add_row(image, idx_new, new_right_x as usize, y as usize);
        }
        self.swap_columns(new_right_x, idx_new);
    }

    /// Transition (C): step down one row, resetting the column pointer to
    /// the row's leftmost valid pixel.
    pub fn begin_row(&mut self, image: &ImageView<'_>, row_start_cx: i64, new_cy: i64) {
        let hw = self.hw;
        let old_cy = self.center_y;
        self.window_left_col = row_start_cx - hw;
        self.m00 = 0;
        self.m10 = 0;
        self.m11 = 0;
        for j in 0..=(2 * hw) {
            let x = self.window_left_col + j;
            let idx = self.col_idx(x);
            self.store.sub_row(image, idx, x as usize, (old_cy - hw) as usize);
            self.store.add_row(image, idx, x as usize, (new_cy + hw) as usize);
            let (s00, s01, s11) = self.store.get(idx);
            self.m00 += s00;
            self.m11 += s11;
            self.m10 += s01;
        }
        self.center_y = new_cy;
    }

    /// Transition (D): slide right by one pixel within a non-first row.
    ///
    /// The entering column's stored sum still reflects the previous row
    /// (`center_y - 1`), since that column was last touched while the
    /// window passed over it one row up; roll it forward by one row before
    /// folding it into the scalars.
    pub fn slide_right(&mut self, image: &ImageView<'_>, new_cx: i64) {
        let hw = self.hw;
        let prev_cy = self.center_y - 1;
        let new_right_x = new_cx + hw;
        let idx_new = self.col_idx(new_right_x);
        self.store.sub_row(image, idx_new, new_right_x as usize, (prev_cy - hw) as usize);
        self.store.add_row(image, idx_new, new_right_x as usize, (self.center_y + hw) as usize);
        self.swap_columns(new_right_x, idx_new);
    }

    /// Shared tail of (B) and (D): fold the freshly-updated rightmost column
    /// into the running scalars and evict the column leaving on the left.
    fn swap_columns(&mut self, new_right_x: i64, idx_new: usize) {
        let (new00, new01, new11) = self.store.get(idx_new);
        let idx_old = self.col_idx(self.window_left_col);
        let (old00, old01, old11) = self.store.get(idx_old);
        self.m00 += new00 - old00;
        self.m11 += new11 - old11;
        self.m10 += new01 - old01;
        debug_assert_eq!(new_right_x - self.window_left_col, 2 * self.hw);
        self.window_left_col += 1;
    }
}
