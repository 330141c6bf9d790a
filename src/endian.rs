//! Endianness helpers for landmark and binary-grid files (§4.9).
//!
//! Thin wrappers around `byteorder`, kept separate from `landmark` so any
//! other binary-grid reader a host application layers on top can reuse them.

use std::io::{self, Read, Write};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    pub fn read_u16<R: Read>(self, r: &mut R) -> io::Result<u16> {
        match self {
            Endian::Little => r.read_u16::<LittleEndian>(),
            Endian::Big => r.read_u16::<BigEndian>(),
        }
    }

    pub fn read_u32<R: Read>(self, r: &mut R) -> io::Result<u32> {
        match self {
            Endian::Little => r.read_u32::<LittleEndian>(),
            Endian::Big => r.read_u32::<BigEndian>(),
        }
    }

    pub fn read_f32<R: Read>(self, r: &mut R) -> io::Result<f32> {
        match self {
            Endian::Little => r.read_f32::<LittleEndian>(),
            Endian::Big => r.read_f32::<BigEndian>(),
        }
    }

    pub fn read_f64<R: Read>(self, r: &mut R) -> io::Result<f64> {
        match self {
            Endian::Little => r.read_f64::<LittleEndian>(),
            Endian::Big => r.read_f64::<BigEndian>(),
        }
    }

    pub fn write_u16<W: Write>(self, w: &mut W, v: u16) -> io::Result<()> {
        match self {
            Endian::Little => w.write_u16::<LittleEndian>(v),
            Endian::Big => w.write_u16::<BigEndian>(v),
        }
    }

    pub fn write_u32<W: Write>(self, w: &mut W, v: u32) -> io::Result<()> {
        match self {
            Endian::Little => w.write_u32::<LittleEndian>(v),
            Endian::Big => w.write_u32::<BigEndian>(v),
        }
    }

    pub fn write_f32<W: Write>(self, w: &mut W, v: f32) -> io::Result<()> {
        match self {
            Endian::Little => w.write_f32::<LittleEndian>(v),
            Endian::Big => w.write_f32::<BigEndian>(v),
        }
    }

    pub fn write_f64<W: Write>(self, w: &mut W, v: f64) -> io::Result<()> {
        match self {
            Endian::Little => w.write_f64::<LittleEndian>(v),
            Endian::Big => w.write_f64::<BigEndian>(v),
        }
    }
}
