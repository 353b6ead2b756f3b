#![no_main]
use libfuzzer_sys::fuzz_target;

use amqp_wire::types::Endianness;

fuzz_target!(|data: &[u8]| {
    let _ = amqp_wire::decode_table(data, 0, Endianness::Big);
    let _ = amqp_wire::decode_table(data, 0, Endianness::Little);
});
