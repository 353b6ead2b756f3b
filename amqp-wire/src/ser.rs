//! Convert any `Serialize` value into a `FieldValue`
//!
//! Numbers go through the same width selection as `From<i64>` and `From<f64>`, maps and structs
//! become tables, sequences become arrays and unit values become `Void`.
use crate::errors::Error;
use crate::types::{FieldTable, FieldValue};
use core::fmt;
use serde::ser::{self, Impossible, Serialize};

impl ser::Error for Error<'static> {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::UnsupportedEncodeValue(msg.to_string())
    }
}

/// Convert `value` into a field value
///
/// `None` becomes `Void`, so an optional struct field is still written as a table entry. Build the
/// table with [`FieldTable::insert_absent`] to leave an entry off the wire.
///
/// Example of use
/// ```
/// use amqp_wire::ser::to_field_value;
/// use amqp_wire::types::FieldValue;
/// let value = to_field_value(&vec![1, 2]).expect("Failed to convert");
/// assert_eq!(value, FieldValue::FieldArray(vec![FieldValue::LongInt(1), FieldValue::LongInt(2)]));
/// ```
pub fn to_field_value<T: ?Sized + Serialize>(value: &T) -> Result<FieldValue, Error<'static>> {
    value.serialize(FieldValueSerializer)
}

fn unsupported(what: String) -> Error<'static> {
    Error::UnsupportedEncodeValue(what)
}

/// A serde `Serializer` producing a `FieldValue`
#[derive(Debug, Default, Copy, Clone)]
pub struct FieldValueSerializer;

impl ser::Serializer for FieldValueSerializer {
    type Ok = FieldValue;
    type Error = Error<'static>;

    type SerializeSeq = ArraySerializer;
    type SerializeTuple = ArraySerializer;
    type SerializeTupleStruct = ArraySerializer;
    type SerializeTupleVariant = Impossible<FieldValue, Error<'static>>;
    type SerializeMap = TableSerializer;
    type SerializeStruct = TableSerializer;
    type SerializeStructVariant = Impossible<FieldValue, Error<'static>>;

    fn serialize_bool(self, v: bool) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::Boolean(v))
    }

    fn serialize_i8(self, v: i8) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::ShortShortInt(v))
    }

    fn serialize_i16(self, v: i16) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::ShortInt(v))
    }

    fn serialize_i32(self, v: i32) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::LongInt(v))
    }

    fn serialize_i64(self, v: i64) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::ShortShortUint(v))
    }

    fn serialize_u16(self, v: u16) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::ShortUint(v))
    }

    fn serialize_u32(self, v: u32) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::LongUint(v))
    }

    fn serialize_u64(self, v: u64) -> Result<FieldValue, Self::Error> {
        match i64::try_from(v) {
            Ok(v) => Ok(FieldValue::from(v)),
            Err(_) => Ok(FieldValue::Double(v as f64)),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::Float(v))
    }

    fn serialize_f64(self, v: f64) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::from(v))
    }

    fn serialize_char(self, v: char) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::LongString(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::from(v))
    }

    fn serialize_none(self) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::Void)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<FieldValue, Self::Error> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::Void)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::Void)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::from(variant))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<FieldValue, Self::Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<FieldValue, Self::Error> {
        Err(unsupported(format!("newtype variant {}::{}", name, variant)))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Ok(ArraySerializer {
            elements: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Err(unsupported(format!("tuple variant {}::{}", name, variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Ok(TableSerializer::default())
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(TableSerializer::default())
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Err(unsupported(format!("struct variant {}::{}", name, variant)))
    }
}

/// Collects sequence elements into a field array
#[derive(Debug)]
pub struct ArraySerializer {
    elements: Vec<FieldValue>,
}

impl ArraySerializer {
    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error<'static>> {
        self.elements.push(to_field_value(value)?);
        Ok(())
    }
}

impl ser::SerializeSeq for ArraySerializer {
    type Ok = FieldValue;
    type Error = Error<'static>;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        self.push(value)
    }

    fn end(self) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::FieldArray(self.elements))
    }
}

impl ser::SerializeTuple for ArraySerializer {
    type Ok = FieldValue;
    type Error = Error<'static>;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        self.push(value)
    }

    fn end(self) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::FieldArray(self.elements))
    }
}

impl ser::SerializeTupleStruct for ArraySerializer {
    type Ok = FieldValue;
    type Error = Error<'static>;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        self.push(value)
    }

    fn end(self) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::FieldArray(self.elements))
    }
}

/// Collects map entries and struct fields into a field table
#[derive(Debug, Default)]
pub struct TableSerializer {
    table: FieldTable,
    key: Option<String>,
}

impl ser::SerializeMap for TableSerializer {
    type Ok = FieldValue;
    type Error = Error<'static>;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), Self::Error> {
        match to_field_value(key)? {
            FieldValue::LongString(key) => {
                self.key = Some(key);
                Ok(())
            }
            other => Err(unsupported(format!("non-string table key {:?}", other))),
        }
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Self::Error> {
        let key = self
            .key
            .take()
            .ok_or_else(|| unsupported("table value without a key".to_string()))?;
        self.table.insert(key, to_field_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::FieldTable(self.table))
    }
}

impl ser::SerializeStruct for TableSerializer {
    type Ok = FieldValue;
    type Error = Error<'static>;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Self::Error> {
        self.table.insert(key, to_field_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<FieldValue, Self::Error> {
        Ok(FieldValue::FieldTable(self.table))
    }
}

#[cfg(test)]
mod test {
    use super::to_field_value;
    use crate::errors::Error;
    use crate::types::{FieldTable, FieldValue};
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Consumer {
        tag: &'static str,
        prefetch: u16,
        exclusive: bool,
        priority: Option<i32>,
    }

    #[derive(Serialize)]
    enum Shape {
        Plain,
        Wrapped(i32),
    }

    #[test]
    fn test_struct_to_table() {
        let consumer = Consumer {
            tag: "ctag-1",
            prefetch: 10,
            exclusive: false,
            priority: None,
        };
        let expected = FieldTable::from([
            ("tag", FieldValue::from("ctag-1")),
            ("prefetch", FieldValue::ShortUint(10)),
            ("exclusive", FieldValue::Boolean(false)),
            ("priority", FieldValue::Void),
        ]);
        assert_eq!(to_field_value(&consumer), Ok(FieldValue::FieldTable(expected)));
    }

    #[test]
    fn test_none_field_is_void() {
        let consumer = Consumer {
            tag: "",
            prefetch: 0,
            exclusive: true,
            priority: None,
        };
        let value = to_field_value(&consumer).unwrap();
        let table = value.as_table().unwrap();
        assert!(table.contains_key("priority"));
        assert_eq!(table.get("priority"), Some(&FieldValue::Void));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_number_widths() {
        assert_eq!(to_field_value(&(1i64 << 31)), Ok(FieldValue::LongLongInt(1 << 31)));
        assert_eq!(to_field_value(&((1i64 << 31) - 1)), Ok(FieldValue::LongInt(i32::MAX)));
        assert_eq!(to_field_value(&u64::MAX), Ok(FieldValue::Double(u64::MAX as f64)));
        assert_eq!(to_field_value(&0.25f64), Ok(FieldValue::Float(0.25)));
    }

    #[test]
    fn test_variants() {
        assert_eq!(to_field_value(&Shape::Plain), Ok(FieldValue::from("Plain")));
        assert_eq!(
            to_field_value(&Shape::Wrapped(1)),
            Err(Error::UnsupportedEncodeValue("newtype variant Shape::Wrapped".to_string()))
        );
    }

    #[test]
    fn test_non_string_key() {
        let mut map = BTreeMap::new();
        map.insert(1, "one");
        assert!(matches!(to_field_value(&map), Err(Error::UnsupportedEncodeValue(_))));
    }

    #[test]
    fn test_wide_integers() {
        assert!(matches!(to_field_value(&1u128), Err(Error::UnsupportedEncodeValue(_))));
    }
}
