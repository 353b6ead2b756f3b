use amqp_wire::read::Decoder;
use amqp_wire::types::{FieldTable, FieldValue, Properties};
use amqp_wire::write::Encoder;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn sample_table() -> FieldTable {
    FieldTable::from([
        ("x-match", FieldValue::from("all")),
        ("x-priority", FieldValue::from(10i32)),
        ("x-expires", FieldValue::from(1i64 << 40)),
        (
            "x-args",
            FieldValue::FieldArray(vec![
                FieldValue::Boolean(true),
                FieldValue::Double(0.25),
                FieldValue::FieldTable(FieldTable::from([("nested", FieldValue::Void)])),
            ]),
        ),
    ])
}

macro_rules! auto_bench {
    ($c: ident, $([$name: expr, $bytes: expr, $decode: ident]),*) => {
        $(
            $c.bench_function(concat!("decode_", $name), |b| {
                let bytes = $bytes;
                b.iter(|| {
                    black_box(Decoder::default().$decode(black_box(&bytes), 0).unwrap());
                })
            });
        )*
    };
}

fn criterion_benchmark(c: &mut Criterion) {
    let table = sample_table();
    let properties = Properties::default()
        .with_content_type("application/json")
        .with_delivery_mode(2)
        .with_headers(table.clone());
    let encoder = Encoder::default();

    auto_bench!(
        c,
        ["table", encoder.table_to_bytes(&table).unwrap(), decode_table],
        ["properties", encoder.properties_to_bytes(&properties).unwrap(), decode_properties]
    );

    c.bench_function("encode_table", |b| {
        let mut buffer = [0u8; 512];
        b.iter(|| {
            black_box(encoder.encode_table(&mut buffer, 0, black_box(&table)).unwrap());
        })
    });

    c.bench_function("encode_properties", |b| {
        let mut buffer = [0u8; 512];
        b.iter(|| {
            black_box(encoder.encode_properties(&mut buffer, 0, black_box(&properties)).unwrap());
        })
    });
}
