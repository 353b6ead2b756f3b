//! A codec for the AMQP 0-9-1 wire format
//!
//! Covers typed field values, field tables and arrays, the content properties record and the frame
//! envelope. All operations work on a caller owned buffer at an explicit offset and take the byte
//! order as a parameter. [`read::Decoder`] and [`write::Encoder`] hold the remaining settings; the
//! free functions in this module use their defaults.
//!
//! Example of use
//! ```
//! use amqp_wire::types::{Endianness, FieldTable, FieldValue};
//! let table = FieldTable::from([("x-priority", FieldValue::from(5i32))]);
//! let mut buffer = [0u8; 64];
//! let written = amqp_wire::encode_table(&mut buffer, 0, &table, Endianness::Big)
//!     .expect("Failed to encode");
//! let (decoded, consumed) = amqp_wire::decode_table(&buffer, 0, Endianness::Big)
//!     .expect("Failed to decode");
//! assert_eq!(decoded, table);
//! assert_eq!(consumed, written);
//! ```

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

pub mod errors;
mod field;
pub mod frame;
mod nom_utils;
pub mod primitive;
mod properties;
pub mod read;
#[cfg(feature = "serde")]
pub mod ser;
pub mod types;
pub mod write;

use crate::errors::Error;
use crate::read::Decoder;
use crate::types::{Endianness, FieldTable, FieldValue, Properties};
use crate::write::Encoder;

/// Decode a tagged field value, returning it with the number of bytes consumed
pub fn decode_field(
    buffer: &[u8],
    offset: usize,
    endian: Endianness,
) -> Result<(FieldValue, usize), Error<'_>> {
    Decoder::new(endian).decode_field(buffer, offset)
}

/// Encode a tagged field value, returning the number of bytes written
pub fn encode_field(
    buffer: &mut [u8],
    offset: usize,
    value: &FieldValue,
    endian: Endianness,
) -> Result<usize, Error<'static>> {
    Encoder::new(endian).encode_field(buffer, offset, value)
}

/// Decode a field table
pub fn decode_table(
    buffer: &[u8],
    offset: usize,
    endian: Endianness,
) -> Result<(FieldTable, usize), Error<'_>> {
    Decoder::new(endian).decode_table(buffer, offset)
}

/// Encode a field table
pub fn encode_table(
    buffer: &mut [u8],
    offset: usize,
    table: &FieldTable,
    endian: Endianness,
) -> Result<usize, Error<'static>> {
    Encoder::new(endian).encode_table(buffer, offset, table)
}

/// Decode a field array
pub fn decode_array(
    buffer: &[u8],
    offset: usize,
    endian: Endianness,
) -> Result<(Vec<FieldValue>, usize), Error<'_>> {
    Decoder::new(endian).decode_array(buffer, offset)
}

/// Encode a field array
pub fn encode_array(
    buffer: &mut [u8],
    offset: usize,
    elements: &[FieldValue],
    endian: Endianness,
) -> Result<usize, Error<'static>> {
    Encoder::new(endian).encode_array(buffer, offset, elements)
}

/// Decode a properties record
pub fn decode_properties(
    buffer: &[u8],
    offset: usize,
    endian: Endianness,
) -> Result<(Properties, usize), Error<'_>> {
    Decoder::new(endian).decode_properties(buffer, offset)
}

/// Encode a properties record, zero and empty values are treated as absent
pub fn encode_properties(
    buffer: &mut [u8],
    offset: usize,
    properties: &Properties,
    endian: Endianness,
) -> Result<usize, Error<'static>> {
    Encoder::new(endian).encode_properties(buffer, offset, properties)
}

/// Finish the frame that starts at offset 0 and whose payload ends at `end_offset`
///
/// Returns 1, the size of the frame end marker
pub fn write_frame_end(
    buffer: &mut [u8],
    end_offset: usize,
    endian: Endianness,
) -> Result<usize, Error<'static>> {
    Encoder::new(endian).write_frame_end(buffer, end_offset)
}
