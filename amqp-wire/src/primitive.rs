//! Scalar and string primitives at an explicit offset
//!
//! Every read returns the value and the number of bytes consumed, every write returns the number of
//! bytes written. Single byte values have no byte order.
use crate::errors::Error;
use crate::nom_utils::{self, parse_at, write_at};
use crate::read::Decoder;
use crate::types::Endianness;
use byteorder::WriteBytesExt;
use nom::number::complete::{be_i8, be_u8};

macro_rules! offset_primitive {
    ($read: ident, $write: ident, $ty: ty) => {
        #[doc = concat!("Read a `", stringify!($ty), "` at `offset`")]
        pub fn $read(
            buffer: &[u8],
            offset: usize,
            endian: Endianness,
        ) -> Result<($ty, usize), Error<'_>> {
            parse_at(buffer, offset, |i| nom_utils::$read(i, endian))
        }

        #[doc = concat!("Write a `", stringify!($ty), "` at `offset`")]
        pub fn $write(
            buffer: &mut [u8],
            offset: usize,
            value: $ty,
            endian: Endianness,
        ) -> Result<usize, Error<'static>> {
            write_at(buffer, offset, |w| Ok(nom_utils::$write(w, value, endian)?))
        }
    };
}

offset_primitive!(read_u16, write_u16, u16);
offset_primitive!(read_i16, write_i16, i16);
offset_primitive!(read_u32, write_u32, u32);
offset_primitive!(read_i32, write_i32, i32);
offset_primitive!(read_i64, write_i64, i64);
offset_primitive!(read_f32, write_f32, f32);
offset_primitive!(read_f64, write_f64, f64);

/// Read a `u8` at `offset`
pub fn read_u8(buffer: &[u8], offset: usize) -> Result<(u8, usize), Error<'_>> {
    parse_at(buffer, offset, be_u8)
}

/// Write a `u8` at `offset`
pub fn write_u8(buffer: &mut [u8], offset: usize, value: u8) -> Result<usize, Error<'static>> {
    write_at(buffer, offset, |w| Ok(w.write_u8(value)?))
}

/// Read an `i8` at `offset`
pub fn read_i8(buffer: &[u8], offset: usize) -> Result<(i8, usize), Error<'_>> {
    parse_at(buffer, offset, be_i8)
}

/// Write an `i8` at `offset`
pub fn write_i8(buffer: &mut [u8], offset: usize, value: i8) -> Result<usize, Error<'static>> {
    write_at(buffer, offset, |w| Ok(w.write_i8(value)?))
}

/// Read a `u64` as two 32-bit halves with the default precision policy
///
/// Use [`Decoder::read_u64`] to reject values above the safe integer range.
pub fn read_u64(
    buffer: &[u8],
    offset: usize,
    endian: Endianness,
) -> Result<(u64, usize), Error<'_>> {
    Decoder::new(endian).read_u64(buffer, offset)
}

/// Write a `u64` at `offset`
pub fn write_u64(
    buffer: &mut [u8],
    offset: usize,
    value: u64,
    endian: Endianness,
) -> Result<usize, Error<'static>> {
    write_at(buffer, offset, |w| Ok(nom_utils::write_u64(w, value, endian)?))
}

/// Read a string with a one byte length prefix
pub fn read_short_string(buffer: &[u8], offset: usize) -> Result<(String, usize), Error<'_>> {
    parse_at(buffer, offset, nom_utils::parse_short_string).map(|(s, n)| (s.to_string(), n))
}

/// Write a string with a one byte length prefix, fails if it is longer than 255 bytes
pub fn write_short_string(
    buffer: &mut [u8],
    offset: usize,
    value: &str,
) -> Result<usize, Error<'static>> {
    write_at(buffer, offset, |w| nom_utils::write_short_string(w, value))
}

/// Read a string with a four byte length prefix
pub fn read_long_string(
    buffer: &[u8],
    offset: usize,
    endian: Endianness,
) -> Result<(String, usize), Error<'_>> {
    parse_at(buffer, offset, |i| nom_utils::parse_long_string(i, endian))
        .map(|(s, n)| (s.to_string(), n))
}

/// Write a string with a four byte length prefix
pub fn write_long_string(
    buffer: &mut [u8],
    offset: usize,
    value: &str,
    endian: Endianness,
) -> Result<usize, Error<'static>> {
    write_at(buffer, offset, |w| nom_utils::write_long_bytes(w, value.as_bytes(), endian))
}
