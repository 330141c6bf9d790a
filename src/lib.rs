//! Förstner interest operator: an incremental sliding-window structure-tensor
//! scoring engine over 8-bit images, plus the ancillary modules a
//! landmark-matching pipeline built around it would need.
//!
//! The four public operations ([`forstner_dense`], [`forstner_covariance`],
//! [`forstner_best`], [`forstner_topk`]) share one core engine: a gradient
//! kernel, a per-column running-sum store, a window accumulator, and an
//! eigenvalue scorer, driven by [`driver::Driver`] and consumed by one of
//! four [`sink::OutputSink`] implementations.

pub mod accumulator;
pub mod api;
pub mod column_store;
pub mod config;
pub mod driver;
pub mod eigen;
pub mod endian;
pub mod error;
pub mod gradient;
pub mod homography;
pub mod image;
pub mod interpolate;
pub mod landmark;
pub mod pool;
pub mod projection;
pub mod sink;

pub use api::{forstner_best, forstner_covariance, forstner_dense, forstner_topk};
pub use config::ForstnerConfig;
pub use error::{Error, Result};
pub use image::Rect;
pub use pool::{engine_pool_release, engine_pool_reserve};
