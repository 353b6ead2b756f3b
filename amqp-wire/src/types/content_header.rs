use super::Properties;

/// The payload of a content header frame
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentHeader {
    /// The class of the method this content belongs to, 60 for basic
    pub class_id: u16,

    /// Unused, always 0
    pub weight: u16,

    /// The total size of the content body frames that follow
    pub body_size: u64,

    /// The properties of the message
    pub properties: Properties,
}

impl ContentHeader {
    /// Create a new ContentHeader with a weight of 0
    #[inline]
    pub fn new(class_id: u16, body_size: u64, properties: Properties) -> Self {
        Self {
            class_id,
            weight: 0,
            body_size,
            properties,
        }
    }
}
