/// What to do when an unsigned 64-bit value exceeds 2^53 - 1
///
/// Values above that limit can't be represented exactly by peers that store integers as doubles
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Eq, PartialEq, Debug, Copy, Clone, Default)]
pub enum PrecisionPolicy {
    /// Log a warning and return the value
    #[default]
    Warn,

    /// Fail with `Error::PrecisionLoss`
    Deny,
}

/// Decides which optional properties count as present when encoding
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Eq, PartialEq, Debug, Copy, Clone, Default)]
pub enum PresenceRule {
    /// Zero `delivery_mode`/`priority` and empty strings are treated as absent and not written
    #[default]
    NonEmpty,

    /// Every `Some` value is written, including zero and empty values
    Explicit,
}
