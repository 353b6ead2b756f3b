//! Support for encoding properties
use crate::errors::Error;
use crate::nom_utils::{write_short_string, write_u16, write_u64};
use crate::types::{ContentHeader, PropertyFlag, Properties};
use crate::write::Encoder;
use byteorder::WriteBytesExt;
use std::io::{Seek, Write};

fn write_optional_short_string<W: Write>(
    writer: &mut W,
    value: &Option<String>,
) -> Result<(), Error<'static>> {
    match value {
        Some(s) => write_short_string(writer, s),
        None => Ok(()),
    }
}

impl Encoder {
    /// Write the flags word then each present property, in flag order
    pub fn write_properties<W: Write + Seek>(
        &self,
        writer: &mut W,
        properties: &Properties,
    ) -> Result<(), Error<'static>> {
        let flags = properties.flags(self.presence);
        write_u16(writer, PropertyFlag::to_word(flags), self.endian)?;

        for flag in flags {
            match flag {
                PropertyFlag::ContentType => {
                    write_optional_short_string(writer, &properties.content_type)?
                }
                PropertyFlag::ContentEncoding => {
                    write_optional_short_string(writer, &properties.content_encoding)?
                }
                PropertyFlag::Headers => {
                    if let Some(headers) = &properties.headers {
                        self.write_table(writer, headers)?;
                    }
                }
                PropertyFlag::DeliveryMode => {
                    if let Some(mode) = properties.delivery_mode {
                        writer.write_u8(mode)?;
                    }
                }
                PropertyFlag::Priority => {
                    if let Some(priority) = properties.priority {
                        writer.write_u8(priority)?;
                    }
                }
                PropertyFlag::CorrelationId => {
                    write_optional_short_string(writer, &properties.correlation_id)?
                }
                PropertyFlag::ReplyTo => write_optional_short_string(writer, &properties.reply_to)?,
                PropertyFlag::Expiration => {
                    write_optional_short_string(writer, &properties.expiration)?
                }
                PropertyFlag::MessageId => {
                    write_optional_short_string(writer, &properties.message_id)?
                }
                PropertyFlag::Timestamp => {
                    if let Some(time) = properties.timestamp {
                        self.write_timestamp(writer, time)?;
                    }
                }
                PropertyFlag::MessageType => {
                    write_optional_short_string(writer, &properties.message_type)?
                }
                PropertyFlag::UserId => write_optional_short_string(writer, &properties.user_id)?,
                PropertyFlag::AppId => write_optional_short_string(writer, &properties.app_id)?,
            }
        }

        Ok(())
    }

    /// Write the payload of a content header frame
    pub fn write_content_header<W: Write + Seek>(
        &self,
        writer: &mut W,
        header: &ContentHeader,
    ) -> Result<(), Error<'static>> {
        write_u16(writer, header.class_id, self.endian)?;
        write_u16(writer, header.weight, self.endian)?;
        write_u64(writer, header.body_size, self.endian)?;
        self.write_properties(writer, &header.properties)
    }
}

#[cfg(test)]
mod test {
    use crate::errors::Error;
    use crate::types::{PresenceRule, Properties};
    use crate::write::Encoder;

    #[test]
    fn test_sparse_properties() {
        let properties = Properties::default().with_content_type("text").with_priority(5);
        assert_eq!(
            Encoder::default().properties_to_bytes(&properties),
            Ok(vec![0x88, 0x00, 4, b't', b'e', b'x', b't', 5])
        );
    }

    #[test]
    fn test_zero_delivery_mode_is_absent() {
        let properties = Properties::default().with_delivery_mode(0);
        assert_eq!(Encoder::default().properties_to_bytes(&properties), Ok(vec![0, 0]));
        assert_eq!(
            Encoder::default()
                .with_presence(PresenceRule::Explicit)
                .properties_to_bytes(&properties),
            Ok(vec![0x10, 0x00, 0])
        );
    }

    #[test]
    fn test_long_property_rejected() {
        let properties = Properties {
            app_id: Some("a".repeat(300)),
            ..Properties::default()
        };
        assert_eq!(
            Encoder::default().properties_to_bytes(&properties),
            Err(Error::StringTooLong(300))
        );
    }
}
