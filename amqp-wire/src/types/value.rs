use super::{Decimal, FieldTable};
use std::time::SystemTime;

/// Values at or above this magnitude are written as doubles rather than floats
const FLOAT_LIMIT: f64 = 4_294_967_296.0;

/// Smallest and (exclusive) largest f64 that converts to an i64 without saturating
const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;
const I64_MAX_F64: f64 = 9_223_372_036_854_775_808.0;

/// A single AMQP typed value, tagged on the wire by a one byte type marker
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// `t`, a boolean
    Boolean(bool),

    /// `b`, a signed 8-bit integer
    ShortShortInt(i8),

    /// `B`, an unsigned 8-bit integer
    ShortShortUint(u8),

    /// `s`, a signed 16-bit integer
    ShortInt(i16),

    /// `u`, an unsigned 16-bit integer
    ShortUint(u16),

    /// `I`, a signed 32-bit integer
    LongInt(i32),

    /// `i`, an unsigned 32-bit integer
    LongUint(u32),

    /// `l`, a signed 64-bit integer
    LongLongInt(i64),

    /// `f`, a 32-bit float
    Float(f32),

    /// `d`, a 64-bit float
    Double(f64),

    /// `S`, UTF-8 text with a 32-bit length prefix
    LongString(String),

    /// `F`, a nested field table
    FieldTable(FieldTable),

    /// `A`, a sequence of values without keys
    FieldArray(Vec<FieldValue>),

    /// `x`, opaque bytes with a 32-bit length prefix
    ByteArray(Vec<u8>),

    /// `T`, whole seconds since the epoch; sub-second precision is dropped when written
    Timestamp(SystemTime),

    /// `V`, no value
    Void,

    /// `D`, a scaled decimal
    Decimal(Decimal),
}

impl FieldValue {
    /// Get the text of a long string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::LongString(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get the value of a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get any integer value widened to an i64, unsigned values always fit
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            FieldValue::ShortShortInt(v) => Some(v.into()),
            FieldValue::ShortShortUint(v) => Some(v.into()),
            FieldValue::ShortInt(v) => Some(v.into()),
            FieldValue::ShortUint(v) => Some(v.into()),
            FieldValue::LongInt(v) => Some(v.into()),
            FieldValue::LongUint(v) => Some(v.into()),
            FieldValue::LongLongInt(v) => Some(v),
            _ => None,
        }
    }

    /// Get the contents of a nested table
    pub fn as_table(&self) -> Option<&FieldTable> {
        match self {
            FieldValue::FieldTable(t) => Some(t),
            _ => None,
        }
    }

    /// Get the elements of an array
    pub fn as_array(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::FieldArray(a) => Some(a.as_slice()),
            _ => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Boolean(v)
    }
}

impl From<i8> for FieldValue {
    fn from(v: i8) -> Self {
        FieldValue::ShortShortInt(v)
    }
}

impl From<u8> for FieldValue {
    fn from(v: u8) -> Self {
        FieldValue::ShortShortUint(v)
    }
}

impl From<i16> for FieldValue {
    fn from(v: i16) -> Self {
        FieldValue::ShortInt(v)
    }
}

impl From<u16> for FieldValue {
    fn from(v: u16) -> Self {
        FieldValue::ShortUint(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::LongInt(v)
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::LongUint(v)
    }
}

/// Uses the smallest signed width that holds the value, `I` inside the i32 range and `l` outside it
impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        match i32::try_from(v) {
            Ok(v) => FieldValue::LongInt(v),
            Err(_) => FieldValue::LongLongInt(v),
        }
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::Float(v)
    }
}

/// Whole numbers become integers as with `From<i64>`
///
/// Other values within ±2^32 become `f` and the rest `d`
impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        if v.fract() == 0.0 && (I64_MIN_F64..I64_MAX_F64).contains(&v) {
            return FieldValue::from(v as i64);
        }

        if v.abs() < FLOAT_LIMIT {
            FieldValue::Float(v as f32)
        } else {
            FieldValue::Double(v)
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::LongString(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::LongString(v)
    }
}

impl From<FieldTable> for FieldValue {
    fn from(v: FieldTable) -> Self {
        FieldValue::FieldTable(v)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(v: Vec<FieldValue>) -> Self {
        FieldValue::FieldArray(v)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(v: Vec<u8>) -> Self {
        FieldValue::ByteArray(v)
    }
}

impl From<&[u8]> for FieldValue {
    fn from(v: &[u8]) -> Self {
        FieldValue::ByteArray(v.to_vec())
    }
}

impl From<SystemTime> for FieldValue {
    fn from(v: SystemTime) -> Self {
        FieldValue::Timestamp(v)
    }
}

impl From<Decimal> for FieldValue {
    fn from(v: Decimal) -> Self {
        FieldValue::Decimal(v)
    }
}

impl FromIterator<FieldValue> for FieldValue {
    fn from_iter<T: IntoIterator<Item = FieldValue>>(iter: T) -> Self {
        FieldValue::FieldArray(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod test {
    use super::FieldValue;

    #[test]
    fn test_integer_width() {
        assert_eq!(FieldValue::from(2_147_483_647i64), FieldValue::LongInt(i32::MAX));
        assert_eq!(
            FieldValue::from(2_147_483_648i64),
            FieldValue::LongLongInt(2_147_483_648)
        );
        assert_eq!(
            FieldValue::from(-2_147_483_649i64),
            FieldValue::LongLongInt(-2_147_483_649)
        );
    }

    #[test]
    fn test_number_width() {
        assert_eq!(FieldValue::from(42.0), FieldValue::LongInt(42));
        assert_eq!(FieldValue::from(2_147_483_648.0), FieldValue::LongLongInt(2_147_483_648));
        assert_eq!(FieldValue::from(1.5), FieldValue::Float(1.5));
        assert_eq!(FieldValue::from(-1.5), FieldValue::Float(-1.5));
        assert_eq!(FieldValue::from(5_000_000_000.5), FieldValue::Double(5_000_000_000.5));
        assert_eq!(FieldValue::from(1e19), FieldValue::Double(1e19));
        assert_eq!(FieldValue::from(f64::INFINITY), FieldValue::Double(f64::INFINITY));
        assert!(matches!(FieldValue::from(f64::NAN), FieldValue::Double(v) if v.is_nan()));
    }

    #[test]
    fn test_as_i64() {
        assert_eq!(FieldValue::LongUint(u32::MAX).as_i64(), Some(4_294_967_295));
        assert_eq!(FieldValue::ShortShortInt(-1).as_i64(), Some(-1));
        assert_eq!(FieldValue::Void.as_i64(), None);
    }
}
