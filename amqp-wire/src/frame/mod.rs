//! The frame envelope: a 7 byte header, the payload and a frame end marker
use core::fmt;

mod read;
mod write;

/// The byte that terminates every frame
pub const FRAME_END: u8 = 206;

/// Size of the type, channel and size fields
pub const FRAME_HEADER_SIZE: usize = 7;

/// Offset of the payload size field within the frame header
pub const SIZE_OFFSET: usize = 3;

/// The type of a frame
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
#[repr(u8)]
pub enum FrameType {
    /// A method frame
    Method = 1,

    /// A content header frame
    Header = 2,

    /// A content body frame
    Body = 3,

    /// A heartbeat frame
    Heartbeat = 8,
}

impl TryFrom<u8> for FrameType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Method),
            2 => Ok(Self::Header),
            3 => Ok(Self::Body),
            8 => Ok(Self::Heartbeat),
            _ => Err(()),
        }
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameType::Method => f.write_str("method"),
            FrameType::Header => f.write_str("header"),
            FrameType::Body => f.write_str("body"),
            FrameType::Heartbeat => f.write_str("heartbeat"),
        }
    }
}

/// The header of a frame
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct FrameHeader {
    /// The type of the frame
    pub frame_type: FrameType,

    /// The channel the frame belongs to, always big-endian on the wire
    pub channel: u16,

    /// The size of the payload
    pub size: u32,
}

impl FrameHeader {
    /// Create a new FrameHeader
    #[inline]
    pub fn new(frame_type: FrameType, channel: u16, size: u32) -> Self {
        Self {
            frame_type,
            channel,
            size,
        }
    }
}

/// A complete frame, the payload borrows from the buffer it was read from
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct Frame<'a> {
    /// The header of the frame
    pub header: FrameHeader,

    /// The payload between the header and the frame end marker
    pub payload: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Create a new Frame, the header size is taken from the payload length
    ///
    /// Payloads longer than `u32::MAX` record a saturated size and fail when written
    pub fn new(frame_type: FrameType, channel: u16, payload: &'a [u8]) -> Self {
        Self {
            header: FrameHeader::new(
                frame_type,
                channel,
                u32::try_from(payload.len()).unwrap_or(u32::MAX),
            ),
            payload,
        }
    }
}
