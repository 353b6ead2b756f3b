//! Support for encoding field values
use crate::errors::Error;
use crate::field::TypeMarker;
use crate::nom_utils::{
    write_f32, write_f64, write_i16, write_i32, write_i64, write_length_prefixed, write_long_bytes,
    write_short_string, write_u16, write_u32,
};
use crate::types::{Decimal, FieldTable, FieldValue, to_unix_seconds};
use crate::write::Encoder;
use byteorder::WriteBytesExt;
use std::io::{Seek, Write};
use std::time::{SystemTime, UNIX_EPOCH};

fn write_type_marker<W: Write>(writer: &mut W, marker: TypeMarker) -> Result<(), Error<'static>> {
    writer.write_u8(marker as u8)?;
    Ok(())
}

impl Encoder {
    /// Write a tagged field value
    pub fn write_value<W: Write + Seek>(
        &self,
        writer: &mut W,
        value: &FieldValue,
    ) -> Result<(), Error<'static>> {
        let endian = self.endian;
        write_type_marker(writer, TypeMarker::of(value))?;

        match value {
            FieldValue::Boolean(b) => writer.write_u8(u8::from(*b))?,
            FieldValue::ShortShortInt(v) => writer.write_i8(*v)?,
            FieldValue::ShortShortUint(v) => writer.write_u8(*v)?,
            FieldValue::ShortInt(v) => write_i16(writer, *v, endian)?,
            FieldValue::ShortUint(v) => write_u16(writer, *v, endian)?,
            FieldValue::LongInt(v) => write_i32(writer, *v, endian)?,
            FieldValue::LongUint(v) => write_u32(writer, *v, endian)?,
            FieldValue::LongLongInt(v) => write_i64(writer, *v, endian)?,
            FieldValue::Float(v) => write_f32(writer, *v, endian)?,
            FieldValue::Double(v) => write_f64(writer, *v, endian)?,
            FieldValue::LongString(s) => write_long_bytes(writer, s.as_bytes(), endian)?,
            FieldValue::FieldTable(table) => self.write_table(writer, table)?,
            FieldValue::FieldArray(elements) => self.write_array(writer, elements)?,
            FieldValue::ByteArray(bytes) => write_long_bytes(writer, bytes, endian)?,
            FieldValue::Timestamp(time) => self.write_timestamp(writer, *time)?,
            FieldValue::Void => {}
            FieldValue::Decimal(decimal) => self.write_decimal(writer, decimal)?,
        }

        Ok(())
    }

    /// Write whole seconds since the epoch, fails if they don't fit in an i64
    pub(crate) fn write_timestamp<W: Write>(
        &self,
        writer: &mut W,
        time: SystemTime,
    ) -> Result<(), Error<'static>> {
        let bound = if time < UNIX_EPOCH { i64::MIN } else { i64::MAX };
        let secs = to_unix_seconds(time).ok_or(Error::TimestampOutOfRange(bound))?;
        write_i64(writer, secs, self.endian)?;
        Ok(())
    }

    fn write_decimal<W: Write>(
        &self,
        writer: &mut W,
        decimal: &Decimal,
    ) -> Result<(), Error<'static>> {
        writer.write_u8(decimal.scale)?;
        write_u32(writer, decimal.value, self.endian)?;
        Ok(())
    }

    /// Write a length prefixed table, entries without a value are skipped
    pub fn write_table<W: Write + Seek>(
        &self,
        writer: &mut W,
        table: &FieldTable,
    ) -> Result<(), Error<'static>> {
        write_length_prefixed(writer, self.endian, |writer| {
            for entry in table.entries() {
                if let Some(value) = &entry.value {
                    write_short_string(writer, &entry.name)?;
                    self.write_value(writer, value)?;
                }
            }
            Ok(())
        })
    }

    /// Write a length prefixed array
    pub fn write_array<W: Write + Seek>(
        &self,
        writer: &mut W,
        elements: &[FieldValue],
    ) -> Result<(), Error<'static>> {
        write_length_prefixed(writer, self.endian, |writer| {
            for element in elements {
                self.write_value(writer, element)?;
            }
            Ok(())
        })
    }
}
