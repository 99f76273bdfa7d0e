use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{thread_rng, Rng};

use librsn::RsnInformation;

const RSN_PAYLOAD: [u8; 32] = [
    1, 0, // Version
    0, 15, 172, 4, // Group cipher suite
    2, 0, // Pairwise count
    0, 15, 172, 4, //
    0, 15, 172, 2, //
    3, 0, // AKM count
    0, 15, 172, 2, //
    0, 15, 172, 6, //
    0, 15, 172, 8, //
    0xc0, 0, // RSN capabilities
];

pub fn parse_rsn(crit: &mut Criterion) {
    let mut rng = thread_rng();
    let random: u8 = rng.gen();
    let mut payload = RSN_PAYLOAD;

    // Log raw byte throughput
    let mut group = crit.benchmark_group("parsers");
    group.throughput(Throughput::Bytes(RSN_PAYLOAD.len() as u64));

    group.bench_function("Parse RSN information", |bencher| {
        bencher.iter(|| {
            payload[31] = random;
            assert!(RsnInformation::parse(&payload).is_ok())
        })
    });
    group.finish()
}

pub fn serialize_rsn(crit: &mut Criterion) {
    let info = RsnInformation::parse(&RSN_PAYLOAD).expect("Payload should be valid");

    let mut group = crit.benchmark_group("serializers");
    group.throughput(Throughput::Bytes(RSN_PAYLOAD.len() as u64));

    group.bench_function("Serialize RSN information", |bencher| {
        bencher.iter(|| assert_eq!(info.serialize().len(), RSN_PAYLOAD.len()))
    });
    group.finish()
}

criterion_group!(benches, parse_rsn, serialize_rsn);
criterion_main!(benches);
