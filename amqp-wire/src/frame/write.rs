//! Support for encoding frames
use crate::errors::Error;
use crate::frame::{FRAME_END, Frame, FrameHeader};
use crate::nom_utils::write_u32;
use crate::write::Encoder;
use byteorder::{BigEndian, WriteBytesExt};
use std::io::Write;

impl Encoder {
    pub(crate) fn write_header<W: Write>(
        &self,
        writer: &mut W,
        header: &FrameHeader,
    ) -> Result<(), Error<'static>> {
        writer.write_u8(header.frame_type as u8)?;
        writer.write_u16::<BigEndian>(header.channel)?;
        write_u32(writer, header.size, self.endian)?;
        Ok(())
    }

    /// Write a complete frame, the size field is always taken from the payload
    pub fn write_frame<W: Write>(
        &self,
        writer: &mut W,
        frame: &Frame<'_>,
    ) -> Result<(), Error<'static>> {
        let size = u32::try_from(frame.payload.len())
            .map_err(|_| Error::LengthOverflow(frame.payload.len()))?;
        let header = FrameHeader { size, ..frame.header };

        self.write_header(writer, &header)?;
        writer.write_all(frame.payload)?;
        writer.write_u8(FRAME_END)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::frame::{Frame, FrameType};
    use crate::read::Decoder;
    use crate::write::Encoder;

    #[test]
    fn test_frame_round_trip() {
        let frame = Frame::new(FrameType::Body, 7, b"hello");
        let bytes = Encoder::default().frame_to_bytes(&frame).unwrap();
        assert_eq!(bytes, vec![3, 0, 7, 0, 0, 0, 5, b'h', b'e', b'l', b'l', b'o', 206]);
        assert_eq!(Decoder::default().read_frame(&bytes, 0), Ok((frame, bytes.len())));
    }
}
