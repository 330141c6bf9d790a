//! Landmark record file I/O (§4.10).
//!
//! A small fixed-format binary record: a little-endian `u32` count, followed
//! by that many `{ id: u32, lon: f64, lat: f64, elevation: f64, x: f64,
//! y: f64 }` records. Grounded on the teacher's container-box read/write
//! pair in `jxl/src/container.rs`, which has the same "length-prefixed,
//! `Read`/`Write` over a fixed struct layout" shape.

use std::io::{Read, Write};

use crate::endian::Endian;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    pub id: u32,
    pub lon: f64,
    pub lat: f64,
    pub elevation: f64,
    pub x: f64,
    pub y: f64,
}

const FILE_ENDIAN: Endian = Endian::Little;

pub fn write_landmarks<W: Write>(w: &mut W, landmarks: &[Landmark]) -> Result<()> {
    FILE_ENDIAN.write_u32(w, landmarks.len() as u32)?;
    for lm in landmarks {
        FILE_ENDIAN.write_u32(w, lm.id)?;
        FILE_ENDIAN.write_f64(w, lm.lon)?;
        FILE_ENDIAN.write_f64(w, lm.lat)?;
        FILE_ENDIAN.write_f64(w, lm.elevation)?;
        FILE_ENDIAN.write_f64(w, lm.x)?;
        FILE_ENDIAN.write_f64(w, lm.y)?;
    }
    Ok(())
}

pub fn read_landmarks<R: Read>(r: &mut R) -> Result<Vec<Landmark>> {
    let count = FILE_ENDIAN.read_u32(r)? as usize;
    let mut out = Vec::new();
    out.try_reserve_exact(count)?;
    for _ in 0..count {
        let id = FILE_ENDIAN.read_u32(r)?;
        let lon = FILE_ENDIAN.read_f64(r)?;
        let lat = FILE_ENDIAN.read_f64(r)?;
        let elevation = FILE_ENDIAN.read_f64(r)?;
        let x = FILE_ENDIAN.read_f64(r)?;
        let y = FILE_ENDIAN.read_f64(r)?;
        out.push(Landmark { id, lon, lat, elevation, x, y });
    }
    Ok(out)
}
