//! Support for decoding frames
use crate::errors::Error;
use crate::frame::{FRAME_END, Frame, FrameHeader, FrameType};
use crate::nom_utils::{WireResult, read_u32};
use crate::read::Decoder;
use nom::Err;
use nom::bytes::complete::take;
use nom::number::complete::{be_u8, be_u16};

fn read_frame_type(i: &[u8]) -> WireResult<'_, FrameType> {
    let (i, kind) = be_u8(i)?;
    let frame_type = FrameType::try_from(kind)
        .map_err(|_| Err::Failure(Error::UnsupportedFrameType(kind)))?;
    Ok((i, frame_type))
}

impl Decoder {
    pub(crate) fn parse_frame_header<'a>(&self, i: &'a [u8]) -> WireResult<'a, FrameHeader> {
        let (i, frame_type) = read_frame_type(i)?;
        let (i, channel) = be_u16(i)?;
        let (i, size) = read_u32(i, self.endian)?;

        Ok((
            i,
            FrameHeader {
                frame_type,
                channel,
                size,
            },
        ))
    }

    pub(crate) fn parse_frame<'a>(&self, i: &'a [u8]) -> WireResult<'a, Frame<'a>> {
        let (i, header) = self.parse_frame_header(i)?;
        let (i, payload) = take(header.size)(i)?;
        let (i, end) = be_u8(i)?;

        if end != FRAME_END {
            return Err(Err::Failure(Error::FrameEndMismatch(end)));
        }

        Ok((i, Frame { header, payload }))
    }
}

#[cfg(test)]
mod test {
    use crate::errors::Error;
    use crate::frame::{Frame, FrameHeader, FrameType};
    use crate::read::Decoder;
    use crate::types::Endianness;

    #[test]
    fn test_read_heartbeat() {
        let data = [8, 0, 0, 0, 0, 0, 0, 206];
        assert_eq!(
            Decoder::default().read_frame(&data, 0),
            Ok((Frame::new(FrameType::Heartbeat, 0, &[]), 8))
        );
    }

    #[test]
    fn test_channel_is_big_endian() {
        let data = [3, 0, 5, 2, 0, 0, 0, b'h', b'i', 206];
        let (frame, consumed) = Decoder::new(Endianness::Little).read_frame(&data, 0).unwrap();
        assert_eq!(consumed, 10);
        assert_eq!(frame.header, FrameHeader::new(FrameType::Body, 5, 2));
        assert_eq!(frame.payload, b"hi");
    }

    #[test]
    fn test_bad_frame_end() {
        let data = [1, 0, 0, 0, 0, 0, 1, 0xAA, 0];
        assert_eq!(
            Decoder::default().read_frame(&data, 0),
            Err(Error::FrameEndMismatch(0))
        );
    }

    #[test]
    fn test_unknown_frame_type() {
        let data = [4, 0, 0, 0, 0, 0, 0, 206];
        assert_eq!(
            Decoder::default().read_frame_header(&data, 0),
            Err(Error::UnsupportedFrameType(4))
        );
    }

    #[test]
    fn test_truncated_payload() {
        let data = [3, 0, 1, 0, 0, 0, 10, 1, 2];
        assert_eq!(Decoder::default().read_frame(&data, 0), Err(Error::OutOfBounds));
    }
}
