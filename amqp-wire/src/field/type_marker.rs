use crate::types::FieldValue;

/// Type markers used in field tables and arrays
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
#[repr(u8)]
pub(crate) enum TypeMarker {
    /// Boolean
    Boolean = b't',

    /// Signed 8-bit integer
    ShortShortInt = b'b',

    /// Unsigned 8-bit integer
    ShortShortUint = b'B',

    /// Signed 16-bit integer
    ShortInt = b's',

    /// Unsigned 16-bit integer
    ShortUint = b'u',

    /// Signed 32-bit integer
    LongInt = b'I',

    /// Unsigned 32-bit integer
    LongUint = b'i',

    /// Signed 64-bit integer
    LongLongInt = b'l',

    /// 32-bit float
    Float = b'f',

    /// 64-bit float
    Double = b'd',

    /// Long string
    LongString = b'S',

    /// Nested table
    FieldTable = b'F',

    /// Array
    FieldArray = b'A',

    /// Byte array
    ByteArray = b'x',

    /// Seconds since the epoch
    Timestamp = b'T',

    /// No value
    Void = b'V',

    /// Scaled decimal
    Decimal = b'D',
}

impl TypeMarker {
    pub(crate) fn of(value: &FieldValue) -> Self {
        match value {
            FieldValue::Boolean(_) => Self::Boolean,
            FieldValue::ShortShortInt(_) => Self::ShortShortInt,
            FieldValue::ShortShortUint(_) => Self::ShortShortUint,
            FieldValue::ShortInt(_) => Self::ShortInt,
            FieldValue::ShortUint(_) => Self::ShortUint,
            FieldValue::LongInt(_) => Self::LongInt,
            FieldValue::LongUint(_) => Self::LongUint,
            FieldValue::LongLongInt(_) => Self::LongLongInt,
            FieldValue::Float(_) => Self::Float,
            FieldValue::Double(_) => Self::Double,
            FieldValue::LongString(_) => Self::LongString,
            FieldValue::FieldTable(_) => Self::FieldTable,
            FieldValue::FieldArray(_) => Self::FieldArray,
            FieldValue::ByteArray(_) => Self::ByteArray,
            FieldValue::Timestamp(_) => Self::Timestamp,
            FieldValue::Void => Self::Void,
            FieldValue::Decimal(_) => Self::Decimal,
        }
    }
}

impl TryFrom<u8> for TypeMarker {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            b't' => Ok(Self::Boolean),
            b'b' => Ok(Self::ShortShortInt),
            b'B' => Ok(Self::ShortShortUint),
            b's' => Ok(Self::ShortInt),
            b'u' => Ok(Self::ShortUint),
            b'I' => Ok(Self::LongInt),
            b'i' => Ok(Self::LongUint),
            b'l' => Ok(Self::LongLongInt),
            b'f' => Ok(Self::Float),
            b'd' => Ok(Self::Double),
            b'S' => Ok(Self::LongString),
            b'F' => Ok(Self::FieldTable),
            b'A' => Ok(Self::FieldArray),
            b'x' => Ok(Self::ByteArray),
            b'T' => Ok(Self::Timestamp),
            b'V' => Ok(Self::Void),
            b'D' => Ok(Self::Decimal),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::TypeMarker;

    #[test]
    fn test_marker_round_trip() {
        for byte in 0..=u8::MAX {
            if let Ok(marker) = TypeMarker::try_from(byte) {
                assert_eq!(marker as u8, byte);
            }
        }
    }

    #[test]
    fn test_unknown_marker() {
        assert_eq!(TypeMarker::try_from(b'Z'), Err(()));
        assert_eq!(TypeMarker::try_from(0), Err(()));
    }
}
