//! Support for decoding field values
use crate::errors::Error;
use crate::field::TypeMarker;
use crate::nom_utils::{
    WireResult, overrun, parse_long_string, parse_short_string, read_f32, read_f64, read_i16,
    read_i32, read_i64, read_u16, read_u32,
};
use crate::read::Decoder;
use crate::types::{Decimal, Entry, FieldTable, FieldValue, from_unix_seconds};
use nom::Err;
use nom::bytes::complete::take;
use nom::combinator::map;
use nom::number::complete::{be_i8, be_u8};

fn read_type_marker(i: &[u8]) -> WireResult<'_, TypeMarker> {
    let (i, marker) = be_u8(i)?;
    let marker = TypeMarker::try_from(marker)
        .map_err(|_| Err::Failure(Error::UnsupportedFieldType(marker)))?;
    Ok((i, marker))
}

fn parse_element_bool(i: &[u8]) -> WireResult<'_, FieldValue> {
    map(be_u8, |num: u8| FieldValue::Boolean(num != 0))(i)
}

impl Decoder {
    /// Parse a tagged value, `depth` is the number of containers it is nested in
    pub(crate) fn parse_field<'a>(&self, i: &'a [u8], depth: usize) -> WireResult<'a, FieldValue> {
        let (i, marker) = read_type_marker(i)?;
        let endian = self.endian;

        match marker {
            TypeMarker::Boolean => parse_element_bool(i),
            TypeMarker::ShortShortInt => map(be_i8, FieldValue::ShortShortInt)(i),
            TypeMarker::ShortShortUint => map(be_u8, FieldValue::ShortShortUint)(i),
            TypeMarker::ShortInt => map(|i| read_i16(i, endian), FieldValue::ShortInt)(i),
            TypeMarker::ShortUint => map(|i| read_u16(i, endian), FieldValue::ShortUint)(i),
            TypeMarker::LongInt => map(|i| read_i32(i, endian), FieldValue::LongInt)(i),
            TypeMarker::LongUint => map(|i| read_u32(i, endian), FieldValue::LongUint)(i),
            TypeMarker::LongLongInt => map(|i| read_i64(i, endian), FieldValue::LongLongInt)(i),
            TypeMarker::Float => map(|i| read_f32(i, endian), FieldValue::Float)(i),
            TypeMarker::Double => map(|i| read_f64(i, endian), FieldValue::Double)(i),
            TypeMarker::LongString => map(
                |i| parse_long_string(i, endian),
                |s: &str| FieldValue::LongString(s.to_string()),
            )(i),
            TypeMarker::FieldTable => {
                map(|i| self.parse_table(i, depth + 1), FieldValue::FieldTable)(i)
            }
            TypeMarker::FieldArray => {
                map(|i| self.parse_array(i, depth + 1), FieldValue::FieldArray)(i)
            }
            TypeMarker::ByteArray => map(
                |i| self.parse_byte_array(i),
                |bytes: &[u8]| FieldValue::ByteArray(bytes.to_vec()),
            )(i),
            TypeMarker::Timestamp => map(|i| self.parse_timestamp(i), FieldValue::Timestamp)(i),
            TypeMarker::Void => Ok((i, FieldValue::Void)),
            TypeMarker::Decimal => self.parse_decimal(i),
        }
    }

    fn parse_byte_array<'a>(&self, i: &'a [u8]) -> WireResult<'a, &'a [u8]> {
        let (i, length) = read_u32(i, self.endian)?;
        take(length)(i)
    }

    pub(crate) fn parse_timestamp<'a>(&self, i: &'a [u8]) -> WireResult<'a, std::time::SystemTime> {
        let (i, secs) = read_i64(i, self.endian)?;
        let time = from_unix_seconds(secs).ok_or(Err::Failure(Error::TimestampOutOfRange(secs)))?;
        Ok((i, time))
    }

    fn parse_decimal<'a>(&self, i: &'a [u8]) -> WireResult<'a, FieldValue> {
        let (i, scale) = be_u8(i)?;
        let (i, value) = read_u32(i, self.endian)?;
        Ok((i, FieldValue::Decimal(Decimal::new(scale, value))))
    }

    /// Parse a length prefixed table, the declared length must end exactly on an entry boundary
    pub(crate) fn parse_table<'a>(&self, i: &'a [u8], depth: usize) -> WireResult<'a, FieldTable> {
        self.check_depth(depth)?;

        let (i, length) = read_u32(i, self.endian)?;
        let (i, mut body) = take(length)(i)?;

        let mut table = FieldTable::new();
        while !body.is_empty() {
            let (j, name) = parse_short_string(body).map_err(overrun(length))?;
            let (j, value) = self.parse_field(j, depth).map_err(overrun(length))?;

            if table.contains_key(name) {
                log::debug!("Dropping duplicate table key {:?}", name);
            } else {
                table.push(Entry::new(name, value));
            }

            body = j;
        }

        Ok((i, table))
    }

    /// Parse a length prefixed array, the declared length must end exactly on an element boundary
    pub(crate) fn parse_array<'a>(
        &self,
        i: &'a [u8],
        depth: usize,
    ) -> WireResult<'a, Vec<FieldValue>> {
        self.check_depth(depth)?;

        let (i, length) = read_u32(i, self.endian)?;
        let (i, mut body) = take(length)(i)?;

        let mut elements = Vec::new();
        while !body.is_empty() {
            let (j, value) = self.parse_field(body, depth).map_err(overrun(length))?;
            elements.push(value);
            body = j;
        }

        Ok((i, elements))
    }
}

#[cfg(test)]
mod test {
    use crate::errors::Error;
    use crate::read::Decoder;
    use crate::types::{Endianness, FieldValue};

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            Decoder::default().decode_field(&[b'Z', 0, 0], 0),
            Err(Error::UnsupportedFieldType(b'Z'))
        );
    }

    #[test]
    fn test_bool_non_zero_is_true() {
        assert_eq!(
            Decoder::default().decode_field(&[b't', 7], 0),
            Ok((FieldValue::Boolean(true), 2))
        );
    }

    #[test]
    fn test_little_endian_int() {
        assert_eq!(
            Decoder::new(Endianness::Little).decode_field(&[b'I', 1, 0, 0, 0], 0),
            Ok((FieldValue::LongInt(1), 5))
        );
    }

    #[test]
    fn test_table_entry_overruns_length() {
        // Declares 3 bytes but the entry needs 7
        let data = [0, 0, 0, 3, 1, b'a', b'I', 0, 0, 0, 1];
        assert_eq!(
            Decoder::default().decode_table(&data, 0),
            Err(Error::MalformedLength(3))
        );
    }

    #[test]
    fn test_table_truncated_buffer() {
        let data = [0, 0, 0, 100, 1, b'a', b'V'];
        assert_eq!(Decoder::default().decode_table(&data, 0), Err(Error::OutOfBounds));
    }

    #[test]
    fn test_array_overruns_length() {
        let data = [0, 0, 0, 2, b's', 0, 1];
        assert_eq!(
            Decoder::default().decode_array(&data, 0),
            Err(Error::MalformedLength(2))
        );
    }

    #[test]
    fn test_unknown_tag_inside_table() {
        let data = [0, 0, 0, 3, 1, b'a', b'Z'];
        assert_eq!(
            Decoder::default().decode_table(&data, 0),
            Err(Error::UnsupportedFieldType(b'Z'))
        );

        let data = [0, 0, 0, 1, b'Z'];
        assert_eq!(
            Decoder::default().decode_array(&data, 0),
            Err(Error::UnsupportedFieldType(b'Z'))
        );
    }

    #[test]
    fn test_nesting_limit_inside_table() {
        // Table holding an empty array
        let data = [0, 0, 0, 7, 1, b'k', b'A', 0, 0, 0, 0];
        let decoder = Decoder::default().with_max_depth(1);
        assert_eq!(decoder.decode_table(&data, 0), Err(Error::NestingTooDeep(1)));
    }

    #[test]
    fn test_duplicate_keys_first_wins() {
        let data = [0, 0, 0, 8, 1, b'a', b'B', 1, 1, b'a', b'B', 2];
        let (table, consumed) = Decoder::default().decode_table(&data, 0).unwrap();
        assert_eq!(consumed, 12);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a"), Some(&FieldValue::ShortShortUint(1)));
    }

    #[test]
    fn test_nesting_limit() {
        // Array in array in array
        let data = [0, 0, 0, 10, b'A', 0, 0, 0, 5, b'A', 0, 0, 0, 0];
        let decoder = Decoder::default().with_max_depth(2);
        assert_eq!(decoder.decode_array(&data, 0), Err(Error::NestingTooDeep(2)));

        let decoder = Decoder::default().with_max_depth(3);
        assert!(decoder.decode_array(&data, 0).is_ok());
    }
}
