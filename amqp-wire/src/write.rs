//! Handles encoding of AMQP wire data
use crate::errors::Error;
use crate::frame::{FRAME_END, FRAME_HEADER_SIZE, Frame, FrameHeader, SIZE_OFFSET};
use crate::nom_utils::{write_at, write_to_vec, write_u32};
use crate::types::{ContentHeader, Endianness, FieldTable, FieldValue, PresenceRule, Properties};
use byteorder::WriteBytesExt;

/// Encodes AMQP wire data into a buffer at a given offset
///
/// The encoder only holds configuration, every call is independent.
/// Each `encode_*` method returns the number of bytes written.
/// Example of use
/// ```
/// use amqp_wire::write::Encoder;
/// use amqp_wire::types::{FieldTable, FieldValue};
/// let mut buffer = [0u8; 64];
/// let table = FieldTable::from([("x-match", FieldValue::from("all"))]);
/// let written = Encoder::default()
///     .encode_table(&mut buffer, 0, &table)
///     .expect("Failed to encode table");
/// assert_eq!(written, 4 + 1 + 7 + 1 + 4 + 3);
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Encoder {
    /// Byte order of multi-byte numbers
    pub endian: Endianness,

    /// Which optional properties are written
    pub presence: PresenceRule,
}

impl Encoder {
    /// Create an encoder for the given byte order with default settings
    pub fn new(endian: Endianness) -> Self {
        Self {
            endian,
            ..Self::default()
        }
    }

    /// Set the presence rule for properties
    pub fn with_presence(mut self, presence: PresenceRule) -> Self {
        self.presence = presence;
        self
    }

    /// Encode a tagged field value
    pub fn encode_field(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: &FieldValue,
    ) -> Result<usize, Error<'static>> {
        write_at(buffer, offset, |w| self.write_value(w, value))
    }

    /// Encode a field table with its length prefix
    pub fn encode_table(
        &self,
        buffer: &mut [u8],
        offset: usize,
        table: &FieldTable,
    ) -> Result<usize, Error<'static>> {
        write_at(buffer, offset, |w| self.write_table(w, table))
    }

    /// Encode a field array with its length prefix
    pub fn encode_array(
        &self,
        buffer: &mut [u8],
        offset: usize,
        elements: &[FieldValue],
    ) -> Result<usize, Error<'static>> {
        write_at(buffer, offset, |w| self.write_array(w, elements))
    }

    /// Encode a properties record with its flags word
    pub fn encode_properties(
        &self,
        buffer: &mut [u8],
        offset: usize,
        properties: &Properties,
    ) -> Result<usize, Error<'static>> {
        write_at(buffer, offset, |w| self.write_properties(w, properties))
    }

    /// Encode the payload of a content header frame
    pub fn encode_content_header(
        &self,
        buffer: &mut [u8],
        offset: usize,
        header: &ContentHeader,
    ) -> Result<usize, Error<'static>> {
        write_at(buffer, offset, |w| self.write_content_header(w, header))
    }

    /// Write the 7 byte header of a frame
    pub fn write_frame_header(
        &self,
        buffer: &mut [u8],
        offset: usize,
        header: &FrameHeader,
    ) -> Result<usize, Error<'static>> {
        write_at(buffer, offset, |w| self.write_header(w, header))
    }

    /// Finish a frame that starts at offset 0 and whose payload ends at `end_offset`
    ///
    /// Writes the frame end marker at `end_offset` and back-patches the size field at offset 3 with
    /// `end_offset - 7`. The frame type and channel must already be written.
    pub fn write_frame_end(
        &self,
        buffer: &mut [u8],
        end_offset: usize,
    ) -> Result<usize, Error<'static>> {
        let size = end_offset
            .checked_sub(FRAME_HEADER_SIZE)
            .ok_or(Error::OutOfBounds)?;
        let size = u32::try_from(size).map_err(|_| Error::LengthOverflow(size))?;
        if end_offset >= buffer.len() {
            return Err(Error::OutOfBounds);
        }

        write_at(buffer, SIZE_OFFSET, |w| Ok(write_u32(w, size, self.endian)?))?;
        write_at(buffer, end_offset, |w| Ok(w.write_u8(FRAME_END)?))
    }

    /// Encode a field value into a new buffer
    pub fn field_to_bytes(&self, value: &FieldValue) -> Result<Vec<u8>, Error<'static>> {
        write_to_vec(|w| self.write_value(w, value))
    }

    /// Encode a field table into a new buffer
    pub fn table_to_bytes(&self, table: &FieldTable) -> Result<Vec<u8>, Error<'static>> {
        write_to_vec(|w| self.write_table(w, table))
    }

    /// Encode a properties record into a new buffer
    pub fn properties_to_bytes(&self, properties: &Properties) -> Result<Vec<u8>, Error<'static>> {
        write_to_vec(|w| self.write_properties(w, properties))
    }

    /// Encode a complete frame into a new buffer, the size field is taken from the payload
    pub fn frame_to_bytes(&self, frame: &Frame<'_>) -> Result<Vec<u8>, Error<'static>> {
        write_to_vec(|w| self.write_frame(w, frame))
    }
}
