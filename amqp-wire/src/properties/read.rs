//! Support for decoding properties
use crate::nom_utils::{WireResult, parse_short_string, read_u16};
use crate::read::Decoder;
use crate::types::{ContentHeader, PropertyFlag, Properties};
use nom::number::complete::be_u8;

fn parse_owned_short_string(i: &[u8]) -> WireResult<'_, Option<String>> {
    let (i, s) = parse_short_string(i)?;
    Ok((i, Some(s.to_string())))
}

impl Decoder {
    /// Parse the flags word then each present property, in flag order
    pub(crate) fn parse_properties<'a>(&self, i: &'a [u8]) -> WireResult<'a, Properties> {
        let (mut i, word) = read_u16(i, self.endian)?;

        if word & PropertyFlag::RESERVED_BITS != 0 {
            log::warn!(
                "Ignoring reserved property flag bits {:#06x}",
                word & PropertyFlag::RESERVED_BITS
            );
        }

        let mut properties = Properties::default();
        for flag in PropertyFlag::from_word(word) {
            i = match flag {
                PropertyFlag::ContentType => {
                    let (j, v) = parse_owned_short_string(i)?;
                    properties.content_type = v;
                    j
                }
                PropertyFlag::ContentEncoding => {
                    let (j, v) = parse_owned_short_string(i)?;
                    properties.content_encoding = v;
                    j
                }
                PropertyFlag::Headers => {
                    let (j, v) = self.parse_table(i, 1)?;
                    properties.headers = Some(v);
                    j
                }
                PropertyFlag::DeliveryMode => {
                    let (j, v) = be_u8(i)?;
                    properties.delivery_mode = Some(v);
                    j
                }
                PropertyFlag::Priority => {
                    let (j, v) = be_u8(i)?;
                    properties.priority = Some(v);
                    j
                }
                PropertyFlag::CorrelationId => {
                    let (j, v) = parse_owned_short_string(i)?;
                    properties.correlation_id = v;
                    j
                }
                PropertyFlag::ReplyTo => {
                    let (j, v) = parse_owned_short_string(i)?;
                    properties.reply_to = v;
                    j
                }
                PropertyFlag::Expiration => {
                    let (j, v) = parse_owned_short_string(i)?;
                    properties.expiration = v;
                    j
                }
                PropertyFlag::MessageId => {
                    let (j, v) = parse_owned_short_string(i)?;
                    properties.message_id = v;
                    j
                }
                PropertyFlag::Timestamp => {
                    let (j, v) = self.parse_timestamp(i)?;
                    properties.timestamp = Some(v);
                    j
                }
                PropertyFlag::MessageType => {
                    let (j, v) = parse_owned_short_string(i)?;
                    properties.message_type = v;
                    j
                }
                PropertyFlag::UserId => {
                    let (j, v) = parse_owned_short_string(i)?;
                    properties.user_id = v;
                    j
                }
                PropertyFlag::AppId => {
                    let (j, v) = parse_owned_short_string(i)?;
                    properties.app_id = v;
                    j
                }
            };
        }

        Ok((i, properties))
    }

    pub(crate) fn parse_content_header<'a>(&self, i: &'a [u8]) -> WireResult<'a, ContentHeader> {
        let (i, class_id) = read_u16(i, self.endian)?;
        let (i, weight) = read_u16(i, self.endian)?;
        let (i, body_size) = self.parse_u64(i)?;
        let (i, properties) = self.parse_properties(i)?;

        Ok((
            i,
            ContentHeader {
                class_id,
                weight,
                body_size,
                properties,
            },
        ))
    }
}
