use nom::error::{ErrorKind, FromExternalError, ParseError};
use thiserror::Error;

/// Enum for representing encoding and decoding errors
///
/// Decoding errors may borrow the input they failed on, encoding errors are always `Error<'static>`
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error<'a> {
    /// Out of bounds read or write, the buffer is too small for the value
    #[error("Out of bounds")]
    OutOfBounds,

    /// A field value tag that is not part of the AMQP field type system
    #[error("Unsupported field type {0:#04x}")]
    UnsupportedFieldType(u8),

    /// A value that can't be represented as a field value
    #[error("Unsupported value for encoding: {0}")]
    UnsupportedEncodeValue(String),

    /// A short string longer than 255 bytes
    #[error("Short string of {0} bytes exceeds 255 bytes")]
    StringTooLong(usize),

    /// An unsigned 64-bit value outside of the safe integer range
    #[error("Value {0} exceeds the safe integer range")]
    PrecisionLoss(u64),

    /// A table or array whose length prefix does not end on an entry boundary
    #[error("Declared length {0} does not match the encoded entries")]
    MalformedLength(u32),

    /// Tables and arrays nested deeper than the configured limit
    #[error("Nesting exceeds the maximum depth of {0}")]
    NestingTooDeep(usize),

    /// A string that is not valid UTF-8
    #[error("Invalid UTF-8 in string")]
    InvalidUtf8,

    /// A timestamp that can't be represented as a `SystemTime`
    #[error("Timestamp {0} is out of range")]
    TimestampOutOfRange(i64),

    /// A frame type byte that is not one of method, header, body or heartbeat
    #[error("Unsupported frame type {0}")]
    UnsupportedFrameType(u8),

    /// The byte after the frame payload was not the frame end marker
    #[error("Expected frame end marker, found {0:#04x}")]
    FrameEndMismatch(u8),

    /// A length that doesn't fit in its 32-bit length prefix
    #[error("Length {0} does not fit in a 32-bit length prefix")]
    LengthOverflow(usize),

    /// An IO error while writing
    #[error("IO error: {0}")]
    Io(String, std::io::ErrorKind),

    /// A nom internal error
    #[error("Nom internal error")]
    Nom(&'a [u8], ErrorKind),
}

impl<'a> ParseError<&'a [u8]> for Error<'a> {
    fn from_error_kind(input: &'a [u8], kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Eof => Error::OutOfBounds,
            _ => Error::Nom(input, kind),
        }
    }

    fn append(_: &[u8], _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a, E> FromExternalError<&'a [u8], E> for Error<'a> {
    fn from_external_error(input: &'a [u8], kind: ErrorKind, _e: E) -> Self {
        Error::Nom(input, kind)
    }
}

impl From<std::io::Error> for Error<'_> {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            // Cursor over a fixed slice ran out of room
            std::io::ErrorKind::WriteZero => Error::OutOfBounds,
            kind => Error::Io(e.to_string(), kind),
        }
    }
}
