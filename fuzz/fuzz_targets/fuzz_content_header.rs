#![no_main]
use libfuzzer_sys::fuzz_target;

use amqp_wire::read::Decoder;
use amqp_wire::types::PrecisionPolicy;

fuzz_target!(|data: &[u8]| {
    let _ = Decoder::default()
        .with_precision(PrecisionPolicy::Deny)
        .decode_content_header(data, 0);
});
