//! Borrowed image views and the ROI rectangle shared by every public operation.

use crate::error::{Error, Result};

/// A rectangular region of interest into an image, in image-local pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x0: usize,
    pub y0: usize,
    pub nx: usize,
    pub ny: usize,
}

impl Rect {
    pub fn new(x0: usize, y0: usize, nx: usize, ny: usize) -> Self {
        Rect { x0, y0, nx, ny }
    }

    pub fn full(xdim: usize, ydim: usize) -> Self {
        Rect { x0: 0, y0: 0, nx: xdim, ny: ydim }
    }

    /// Checks that this rectangle is non-empty and fits inside an `xdim x ydim` image.
    pub fn validate(&self, xdim: usize, ydim: usize) -> Result<()> {
        if self.nx == 0 || self.ny == 0 {
            return Err(Error::EmptyRoi { nx: self.nx, ny: self.ny });
        }
        let x1 = self.x0.checked_add(self.nx).ok_or(Error::ArithmeticOverflow)?;
        let y1 = self.y0.checked_add(self.ny).ok_or(Error::ArithmeticOverflow)?;
        if x1 > xdim || y1 > ydim {
            return Err(Error::RoiOutOfBounds {
                x0: self.x0,
                y0: self.y0,
                nx: self.nx,
                ny: self.ny,
                xdim,
                ydim,
            });
        }
        Ok(())
    }
}

/// A read-only view of an 8-bit intensity image addressed as `I[y * xdim + x]`.
#[derive(Clone, Copy, Debug)]
pub struct ImageView<'a> {
    data: &'a [u8],
    pub xdim: usize,
    pub ydim: usize,
}

impl<'a> ImageView<'a> {
    pub fn new(data: &'a [u8], xdim: usize, ydim: usize) -> Result<Self> {
        let expected = xdim.checked_mul(ydim).ok_or(Error::ArithmeticOverflow)?;
        if data.len() != expected {
            return Err(Error::InvalidImageSize(xdim, ydim));
        }
        Ok(ImageView { data, xdim, ydim })
    }

    #[inline]
    pub fn at(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.xdim + x]
    }
}

/// Checks that a flat output buffer is sized for a dense `xdim x ydim` plane.
pub fn check_plane_len(buf_len: usize, xdim: usize, ydim: usize) -> Result<()> {
    let expected = xdim.checked_mul(ydim).ok_or(Error::ArithmeticOverflow)?;
    if buf_len != expected {
        return Err(Error::OutputSizeMismatch(buf_len, expected));
    }
    Ok(())
}
