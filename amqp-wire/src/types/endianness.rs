use core::fmt;

/// The byte order used for multi-byte numeric fields
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Eq, PartialEq, Debug, Copy, Clone, Default, Hash)]
pub enum Endianness {
    /// Network byte order, used by AMQP method fields
    #[default]
    Big,

    /// Little endian
    Little,
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Big => f.write_str("big-endian"),
            Endianness::Little => f.write_str("little-endian"),
        }
    }
}
