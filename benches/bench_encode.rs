use criterion::{Criterion, criterion_group, criterion_main};

fn bench_encode_small(c: &mut Criterion) {
    c.bench_function("encode_decimal_u64_max", |b| {
        b.iter(|| {
            let _ = binabi_lib::encode_decimal("18446744073709551615");
        })
    });
}

fn bench_encode_large(c: &mut Criterion) {
    // 300 decimal digits -> ~1000 binary digits, several payload words
    let input = "9".repeat(300);
    c.bench_function("encode_decimal_300_digits", |b| {
        b.iter(|| {
            let _ = binabi_lib::encode_decimal(&input);
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    let payload = binabi_lib::run_from(["binabi", "18446744073709551615"]).unwrap();
    c.bench_function("decode_payload_u64_max", |b| {
        b.iter(|| {
            let _ = binabi_lib::decode_payload(&payload, true);
        })
    });
}

criterion_group!(benches, bench_encode_small, bench_encode_large, bench_decode);
criterion_main!(benches);
