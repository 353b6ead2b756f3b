#![no_main]
use libfuzzer_sys::fuzz_target;

use amqp_wire::read::Decoder;
use amqp_wire::write::Encoder;

fuzz_target!(|data: &[u8]| {
    if let Ok((frame, consumed)) = Decoder::default().read_frame(data, 0) {
        let bytes = Encoder::default().frame_to_bytes(&frame).unwrap();
        assert_eq!(bytes[..], data[..consumed]);
    }
});
