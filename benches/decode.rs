//! Decode throughput benchmark over a fabricated buffer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jwwrust::{parse, JwwReaderConfiguration};

/// Fabricate a buffer with one layer and `count` line entities.
fn build_buffer(count: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(256 + 36 + count * 24);

    // Header
    data.extend_from_slice(b"JWW");
    data.extend_from_slice(&700u16.to_le_bytes());
    data.push(0);
    data.extend_from_slice(&1i32.to_le_bytes()); // scale numerator
    data.extend_from_slice(&1i32.to_le_bytes()); // scale denominator
    data.extend_from_slice(&0i32.to_le_bytes()); // offset x
    data.extend_from_slice(&0i32.to_le_bytes()); // offset y
    data.extend_from_slice(&0i16.to_le_bytes()); // rotation
    data.extend_from_slice(&[0, 0]);
    data.push(1); // layer count
    data.push(1); // group count
    data.resize(256, 0);

    // One visible layer
    data.push(0x01);
    data.extend_from_slice(&[0; 35]);

    // Line records
    for i in 0..count {
        data.extend_from_slice(&[0x01, 0, 1, 0, 0, 0, 0, 0]);
        let x = (i as i32) * 100;
        data.extend_from_slice(&x.to_le_bytes());
        data.extend_from_slice(&0i32.to_le_bytes());
        data.extend_from_slice(&(x + 100).to_le_bytes());
        data.extend_from_slice(&100i32.to_le_bytes());
    }

    data
}

fn bench_parse(c: &mut Criterion) {
    let data = build_buffer(10_000);

    c.bench_function("parse 10k lines", |b| {
        b.iter(|| parse(black_box(&data), JwwReaderConfiguration::default()).unwrap())
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
