//! Handles decoding of AMQP wire data
use crate::errors::Error;
use crate::frame::{Frame, FrameHeader};
use crate::nom_utils::{WireResult, parse_at, read_u32};
use crate::types::{ContentHeader, Endianness, FieldTable, FieldValue, PrecisionPolicy, Properties};
use nom::Err;

/// Largest integer an IEEE 754 double represents exactly, 2^53 - 1
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// The default limit on nested tables and arrays
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Decodes AMQP wire data from a buffer at a given offset
///
/// The decoder only holds configuration, every call is independent.
/// Each `decode_*` method returns the decoded value and the number of bytes consumed.
/// Example of use
/// ```
/// use amqp_wire::read::Decoder;
/// use amqp_wire::types::FieldValue;
/// let data = [b'I', 0, 0, 0, 42];
/// let (value, consumed) = Decoder::default()
///     .decode_field(&data, 0)
///     .expect("Failed to decode field");
/// assert_eq!(value, FieldValue::LongInt(42));
/// assert_eq!(consumed, 5);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Decoder {
    /// Byte order of multi-byte numbers
    pub endian: Endianness,

    /// Handling of unsigned 64-bit values above `MAX_SAFE_INTEGER`
    pub precision: PrecisionPolicy,

    /// How many tables and arrays may be nested inside each other
    pub max_depth: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            endian: Endianness::Big,
            precision: PrecisionPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Decoder {
    /// Create a decoder for the given byte order with default settings
    pub fn new(endian: Endianness) -> Self {
        Self {
            endian,
            ..Self::default()
        }
    }

    /// Set the precision policy
    pub fn with_precision(mut self, precision: PrecisionPolicy) -> Self {
        self.precision = precision;
        self
    }

    /// Set the nesting limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Decode a tagged field value
    pub fn decode_field<'a>(
        &self,
        buffer: &'a [u8],
        offset: usize,
    ) -> Result<(FieldValue, usize), Error<'a>> {
        parse_at(buffer, offset, |i| self.parse_field(i, 0))
    }

    /// Decode a field table, including its length prefix
    pub fn decode_table<'a>(
        &self,
        buffer: &'a [u8],
        offset: usize,
    ) -> Result<(FieldTable, usize), Error<'a>> {
        parse_at(buffer, offset, |i| self.parse_table(i, 1))
    }

    /// Decode a field array, including its length prefix
    pub fn decode_array<'a>(
        &self,
        buffer: &'a [u8],
        offset: usize,
    ) -> Result<(Vec<FieldValue>, usize), Error<'a>> {
        parse_at(buffer, offset, |i| self.parse_array(i, 1))
    }

    /// Decode a properties record, including its flags word
    pub fn decode_properties<'a>(
        &self,
        buffer: &'a [u8],
        offset: usize,
    ) -> Result<(Properties, usize), Error<'a>> {
        parse_at(buffer, offset, |i| self.parse_properties(i))
    }

    /// Decode the payload of a content header frame
    pub fn decode_content_header<'a>(
        &self,
        buffer: &'a [u8],
        offset: usize,
    ) -> Result<(ContentHeader, usize), Error<'a>> {
        parse_at(buffer, offset, |i| self.parse_content_header(i))
    }

    /// Read the 7 byte header of a frame
    pub fn read_frame_header<'a>(
        &self,
        buffer: &'a [u8],
        offset: usize,
    ) -> Result<(FrameHeader, usize), Error<'a>> {
        parse_at(buffer, offset, |i| self.parse_frame_header(i))
    }

    /// Read a complete frame, checking the frame end marker
    ///
    /// The payload of the returned frame borrows from `buffer`
    pub fn read_frame<'a>(
        &self,
        buffer: &'a [u8],
        offset: usize,
    ) -> Result<(Frame<'a>, usize), Error<'a>> {
        parse_at(buffer, offset, |i| self.parse_frame(i))
    }

    /// Read an unsigned 64-bit integer as two 32-bit halves, applying the precision policy
    pub fn read_u64<'a>(&self, buffer: &'a [u8], offset: usize) -> Result<(u64, usize), Error<'a>> {
        parse_at(buffer, offset, |i| self.parse_u64(i))
    }

    pub(crate) fn parse_u64<'a>(&self, i: &'a [u8]) -> WireResult<'a, u64> {
        let (i, first) = read_u32(i, self.endian)?;
        let (i, second) = read_u32(i, self.endian)?;
        let (high, low) = match self.endian {
            Endianness::Big => (first, second),
            Endianness::Little => (second, first),
        };
        let value = (u64::from(high) << 32) | u64::from(low);

        if value > MAX_SAFE_INTEGER {
            match self.precision {
                PrecisionPolicy::Warn => {
                    log::warn!("Unsigned 64-bit value {} exceeds the safe integer range", value)
                }
                PrecisionPolicy::Deny => return Err(Err::Failure(Error::PrecisionLoss(value))),
            }
        }

        Ok((i, value))
    }

    pub(crate) fn check_depth<'a>(&self, depth: usize) -> Result<(), Err<Error<'a>>> {
        if depth > self.max_depth {
            Err(Err::Failure(Error::NestingTooDeep(self.max_depth)))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_read_u64_halves() {
        let data = [0, 0, 0, 1, 0, 0, 0, 2];
        assert_eq!(Decoder::default().read_u64(&data, 0), Ok(((1 << 32) | 2, 8)));

        let data = [2, 0, 0, 0, 1, 0, 0, 0];
        assert_eq!(
            Decoder::new(Endianness::Little).read_u64(&data, 0),
            Ok(((1 << 32) | 2, 8))
        );
    }

    #[test]
    fn test_read_u64_precision() {
        let data = (MAX_SAFE_INTEGER + 1).to_be_bytes();
        assert_eq!(
            Decoder::default().read_u64(&data, 0),
            Ok((MAX_SAFE_INTEGER + 1, 8))
        );
        assert_eq!(
            Decoder::default()
                .with_precision(PrecisionPolicy::Deny)
                .read_u64(&data, 0),
            Err(Error::PrecisionLoss(MAX_SAFE_INTEGER + 1))
        );

        let data = MAX_SAFE_INTEGER.to_be_bytes();
        assert_eq!(
            Decoder::default()
                .with_precision(PrecisionPolicy::Deny)
                .read_u64(&data, 0),
            Ok((MAX_SAFE_INTEGER, 8))
        );
    }

    #[test]
    fn test_offset_past_end() {
        assert_eq!(Decoder::default().decode_field(&[b'V'], 2), Err(Error::OutOfBounds));
    }
}
