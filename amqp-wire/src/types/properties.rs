use super::{FieldTable, PresenceRule};
use enumset::{EnumSet, EnumSetType};
use std::time::SystemTime;

/// One optional field of the content properties record
///
/// Variants are declared in wire order, the first variant is the highest bit of the flags word
#[derive(EnumSetType, Debug)]
pub enum PropertyFlag {
    /// MIME content type
    ContentType,
    /// MIME content encoding
    ContentEncoding,
    /// Application headers
    Headers,
    /// Non-persistent (1) or persistent (2)
    DeliveryMode,
    /// Message priority, 0 to 9
    Priority,
    /// Application correlation identifier
    CorrelationId,
    /// Address to reply to
    ReplyTo,
    /// Message expiration specification
    Expiration,
    /// Application message identifier
    MessageId,
    /// Message timestamp
    Timestamp,
    /// Message type name
    MessageType,
    /// Creating user id
    UserId,
    /// Creating application id
    AppId,
}

impl PropertyFlag {
    /// Bits of the flags word that don't correspond to a property
    pub const RESERVED_BITS: u16 = 0x0007;

    /// The bit of the flags word for this property
    #[inline]
    pub fn mask(self) -> u16 {
        0x8000 >> (self as u16)
    }

    /// Build the flags word for a set of properties
    pub fn to_word(flags: EnumSet<PropertyFlag>) -> u16 {
        flags.iter().fold(0, |word, flag| word | flag.mask())
    }

    /// The properties whose bit is set in `word`, reserved bits are ignored
    pub fn from_word(word: u16) -> EnumSet<PropertyFlag> {
        EnumSet::<PropertyFlag>::all()
            .iter()
            .filter(|flag| word & flag.mask() != 0)
            .collect()
    }
}

/// The optional metadata of a message
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Properties {
    /// MIME content type
    pub content_type: Option<String>,

    /// MIME content encoding
    pub content_encoding: Option<String>,

    /// Application headers
    pub headers: Option<FieldTable>,

    /// Non-persistent (1) or persistent (2)
    pub delivery_mode: Option<u8>,

    /// Message priority, 0 to 9
    pub priority: Option<u8>,

    /// Application correlation identifier
    pub correlation_id: Option<String>,

    /// Address to reply to
    pub reply_to: Option<String>,

    /// Message expiration specification
    pub expiration: Option<String>,

    /// Application message identifier
    pub message_id: Option<String>,

    /// Message timestamp, carried as whole seconds
    pub timestamp: Option<SystemTime>,

    /// Message type name
    pub message_type: Option<String>,

    /// Creating user id
    pub user_id: Option<String>,

    /// Creating application id
    pub app_id: Option<String>,
}

fn has_text(value: &Option<String>, rule: PresenceRule) -> bool {
    match rule {
        PresenceRule::NonEmpty => value.as_deref().is_some_and(|s| !s.is_empty()),
        PresenceRule::Explicit => value.is_some(),
    }
}

fn has_octet(value: Option<u8>, rule: PresenceRule) -> bool {
    match rule {
        PresenceRule::NonEmpty => value.is_some_and(|v| v != 0),
        PresenceRule::Explicit => value.is_some(),
    }
}

impl Properties {
    /// The properties that will be written under the given presence rule
    pub fn flags(&self, rule: PresenceRule) -> EnumSet<PropertyFlag> {
        let mut flags: EnumSet<PropertyFlag> = EnumSet::empty();
        let mut set = |flag: PropertyFlag, present: bool| {
            if present {
                flags.insert(flag);
            }
        };

        set(PropertyFlag::ContentType, has_text(&self.content_type, rule));
        set(PropertyFlag::ContentEncoding, has_text(&self.content_encoding, rule));
        set(PropertyFlag::Headers, self.headers.is_some());
        set(PropertyFlag::DeliveryMode, has_octet(self.delivery_mode, rule));
        set(PropertyFlag::Priority, has_octet(self.priority, rule));
        set(PropertyFlag::CorrelationId, has_text(&self.correlation_id, rule));
        set(PropertyFlag::ReplyTo, has_text(&self.reply_to, rule));
        set(PropertyFlag::Expiration, has_text(&self.expiration, rule));
        set(PropertyFlag::MessageId, has_text(&self.message_id, rule));
        set(PropertyFlag::Timestamp, self.timestamp.is_some());
        set(PropertyFlag::MessageType, has_text(&self.message_type, rule));
        set(PropertyFlag::UserId, has_text(&self.user_id, rule));
        set(PropertyFlag::AppId, has_text(&self.app_id, rule));

        flags
    }

    /// Set the content type
    pub fn with_content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }

    /// Set the application headers
    pub fn with_headers(mut self, value: FieldTable) -> Self {
        self.headers = Some(value);
        self
    }

    /// Set the delivery mode
    pub fn with_delivery_mode(mut self, value: u8) -> Self {
        self.delivery_mode = Some(value);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, value: u8) -> Self {
        self.priority = Some(value);
        self
    }

    /// Set the timestamp
    pub fn with_timestamp(mut self, value: SystemTime) -> Self {
        self.timestamp = Some(value);
        self
    }
}

#[cfg(test)]
mod test {
    use super::{PropertyFlag, Properties};
    use crate::types::PresenceRule;
    use enumset::EnumSet;

    #[test]
    fn test_masks() {
        assert_eq!(PropertyFlag::ContentType.mask(), 0x8000);
        assert_eq!(PropertyFlag::Priority.mask(), 0x0800);
        assert_eq!(PropertyFlag::AppId.mask(), 0x0008);
    }

    #[test]
    fn test_word_round_trip() {
        let flags = PropertyFlag::ContentType | PropertyFlag::Timestamp | PropertyFlag::AppId;
        let word = PropertyFlag::to_word(flags);
        assert_eq!(word, 0x8048);
        assert_eq!(PropertyFlag::from_word(word), flags);
        assert_eq!(PropertyFlag::from_word(0x0007), EnumSet::empty());
        assert_eq!(PropertyFlag::from_word(0xffff), EnumSet::all());
        assert_eq!(PropertyFlag::to_word(EnumSet::all()), 0xfff8);
    }

    #[test]
    fn test_zero_values_follow_presence_rule() {
        let properties = Properties {
            delivery_mode: Some(0),
            priority: Some(0),
            content_type: Some(String::new()),
            ..Properties::default()
        };
        assert_eq!(properties.flags(PresenceRule::NonEmpty), EnumSet::empty());
        assert_eq!(
            properties.flags(PresenceRule::Explicit),
            PropertyFlag::ContentType | PropertyFlag::DeliveryMode | PropertyFlag::Priority
        );
    }
}
