use crate::errors::Error;
use crate::types::Endianness;
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use nom::Err;
use nom::IResult;
use nom::bytes::complete::take;
use nom::number::complete::{
    be_f32, be_f64, be_i16, be_i32, be_i64, be_u8, be_u16, be_u32, le_f32, le_f64, le_i16,
    le_i32, le_i64, le_u16, le_u32,
};
use std::io::{Cursor, Seek, SeekFrom, Write};

pub(crate) type WireResult<'a, T> = IResult<&'a [u8], T, Error<'a>>;

macro_rules! endian_reader {
    ($name: ident, $ty: ty, $be: ident, $le: ident) => {
        pub(crate) fn $name(i: &[u8], endian: Endianness) -> WireResult<'_, $ty> {
            match endian {
                Endianness::Big => $be(i),
                Endianness::Little => $le(i),
            }
        }
    };
}

macro_rules! endian_writer {
    ($name: ident, $ty: ty, $method: ident) => {
        pub(crate) fn $name<W: Write>(
            writer: &mut W,
            value: $ty,
            endian: Endianness,
        ) -> std::io::Result<()> {
            match endian {
                Endianness::Big => writer.$method::<BigEndian>(value),
                Endianness::Little => writer.$method::<LittleEndian>(value),
            }
        }
    };
}

endian_reader!(read_u16, u16, be_u16, le_u16);
endian_reader!(read_i16, i16, be_i16, le_i16);
endian_reader!(read_u32, u32, be_u32, le_u32);
endian_reader!(read_i32, i32, be_i32, le_i32);
endian_reader!(read_i64, i64, be_i64, le_i64);
endian_reader!(read_f32, f32, be_f32, le_f32);
endian_reader!(read_f64, f64, be_f64, le_f64);

endian_writer!(write_u16, u16, write_u16);
endian_writer!(write_i16, i16, write_i16);
endian_writer!(write_u32, u32, write_u32);
endian_writer!(write_i32, i32, write_i32);
endian_writer!(write_i64, i64, write_i64);
endian_writer!(write_u64, u64, write_u64);
endian_writer!(write_f32, f32, write_f32);
endian_writer!(write_f64, f64, write_f64);

pub(crate) fn take_str(i: &[u8], length: usize) -> WireResult<'_, &str> {
    let (i, bytes) = take(length)(i)?;
    let s = std::str::from_utf8(bytes).map_err(|_| Err::Failure(Error::InvalidUtf8))?;
    Ok((i, s))
}

pub(crate) fn parse_short_string(i: &[u8]) -> WireResult<'_, &str> {
    let (i, length) = be_u8(i)?;
    take_str(i, length.into())
}

pub(crate) fn parse_long_string(i: &[u8], endian: Endianness) -> WireResult<'_, &str> {
    let (i, length) = read_u32(i, endian)?;
    take_str(i, length as usize)
}

pub(crate) fn write_short_string<W: Write>(writer: &mut W, s: &str) -> Result<(), Error<'static>> {
    let length = u8::try_from(s.len()).map_err(|_| Error::StringTooLong(s.len()))?;
    writer.write_u8(length)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

pub(crate) fn write_long_bytes<W: Write>(
    writer: &mut W,
    bytes: &[u8],
    endian: Endianness,
) -> Result<(), Error<'static>> {
    let length = u32::try_from(bytes.len()).map_err(|_| Error::LengthOverflow(bytes.len()))?;
    write_u32(writer, length, endian)?;
    writer.write_all(bytes)?;
    Ok(())
}

/// Reserve a 4 byte length, run `body` and back-patch the length with the number of bytes it wrote
pub(crate) fn write_length_prefixed<W, F>(
    writer: &mut W,
    endian: Endianness,
    body: F,
) -> Result<(), Error<'static>>
where
    W: Write + Seek,
    F: FnOnce(&mut W) -> Result<(), Error<'static>>,
{
    let start = writer.stream_position()?;
    write_u32(writer, 0, endian)?;
    body(writer)?;
    let end = writer.stream_position()?;

    let written = (end - start - 4) as usize;
    let length = u32::try_from(written).map_err(|_| Error::LengthOverflow(written))?;

    writer.seek(SeekFrom::Start(start))?;
    write_u32(writer, length, endian)?;
    writer.seek(SeekFrom::Start(end))?;
    Ok(())
}

/// Map an overrun inside a length-delimited region to a malformed length error
pub(crate) fn overrun<'a>(declared: u32) -> impl Fn(Err<Error<'a>>) -> Err<Error<'a>> {
    move |e| match e {
        Err::Error(Error::OutOfBounds) | Err::Failure(Error::OutOfBounds) => {
            Err::Failure(Error::MalformedLength(declared))
        }
        e => e,
    }
}

/// Run `parser` on `buffer` starting at `offset`
///
/// Returns the value and the number of bytes consumed
pub(crate) fn parse_at<'a, T, F>(
    buffer: &'a [u8],
    offset: usize,
    parser: F,
) -> Result<(T, usize), Error<'a>>
where
    F: FnOnce(&'a [u8]) -> WireResult<'a, T>,
{
    let input = buffer.get(offset..).ok_or(Error::OutOfBounds)?;
    match parser(input) {
        Ok((rest, value)) => Ok((value, input.len() - rest.len())),
        Err(Err::Error(e)) | Err(Err::Failure(e)) => Err(e),
        Err(Err::Incomplete(_)) => Err(Error::OutOfBounds),
    }
}

/// Run `writer` over `buffer` starting at `offset`, returning the number of bytes written
pub(crate) fn write_at<F>(
    buffer: &mut [u8],
    offset: usize,
    writer: F,
) -> Result<usize, Error<'static>>
where
    F: FnOnce(&mut Cursor<&mut [u8]>) -> Result<(), Error<'static>>,
{
    if offset > buffer.len() {
        return Err(Error::OutOfBounds);
    }
    let mut cursor = Cursor::new(buffer);
    cursor.set_position(offset as u64);
    writer(&mut cursor)?;
    Ok(cursor.position() as usize - offset)
}

/// Run `writer` over a growable buffer
pub(crate) fn write_to_vec<F>(writer: F) -> Result<Vec<u8>, Error<'static>>
where
    F: FnOnce(&mut Cursor<Vec<u8>>) -> Result<(), Error<'static>>,
{
    let mut cursor = Cursor::new(Vec::new());
    writer(&mut cursor)?;
    Ok(cursor.into_inner())
}
