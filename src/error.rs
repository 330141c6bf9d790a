use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("window size must be odd and >= 3, got {0}")]
    WindowNotOdd(usize),
    #[error("ROI {x0}+{nx}x{y0}+{ny} is out of bounds for a {xdim}x{ydim} image")]
    RoiOutOfBounds {
        x0: usize,
        y0: usize,
        nx: usize,
        ny: usize,
        xdim: usize,
        ydim: usize,
    },
    #[error("ROI must be non-empty, got {nx}x{ny}")]
    EmptyRoi { nx: usize, ny: usize },
    #[error("top-K requires K >= 1")]
    ZeroK,
    #[error("image size {0}x{1} does not match stride/height given")]
    InvalidImageSize(usize, usize),
    #[error("output buffer length {0} does not match image size {1}")]
    OutputSizeMismatch(usize, usize),
    #[error("arithmetic overflow computing image or window geometry")]
    ArithmeticOverflow,
    #[error("failed to allocate summation buffers: {0}")]
    OutOfMemory(#[from] TryReserveError),
    #[error("not enough point correspondences: need >= {need}, got {got}")]
    NotEnoughCorrespondences { need: usize, got: usize },
    #[error("homography fit is singular")]
    SingularHomography,
    #[error("landmark I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
