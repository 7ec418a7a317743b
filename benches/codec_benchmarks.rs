// Codec benchmarks for the registration agent
// Run with: cargo bench

use std::hint::black_box;
use std::net::Ipv4Addr;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use registration_agent::probe::probe::acknowledge;
use registration_agent::protocol::enums::message::Message;
use registration_agent::protocol::structs::fetch_entry::FetchEntry;
use registration_agent::protocol::structs::fetch_reply::FetchReply;
use registration_agent::protocol::structs::register_reply::RegisterReply;
use registration_agent::protocol::structs::register_request::RegisterRequest;
use registration_agent::protocol::structs::sequence_number::SequenceNumber;

fn fetch_reply_bytes(entries: usize) -> Vec<u8> {
    let entries = (0..entries)
        .map(|i| FetchEntry {
            ip: Ipv4Addr::new(10, 0, (i >> 8) as u8, i as u8),
            port: 8000 + i as u16,
            data: i as u32,
        })
        .collect();
    Message::from(FetchReply { sequence: SequenceNumber(0), entries }).to_bytes().unwrap()
}

fn bench_encode_register(c: &mut Criterion) {
    let message = Message::from(RegisterRequest {
        sequence: SequenceNumber(1),
        ip: Ipv4Addr::new(192, 168, 1, 10),
        port: 9000,
        data: 0xDEADBEEF,
        name: "service-name".to_string(),
    });

    c.bench_function("encode_register", |b| {
        b.iter(|| black_box(message.to_bytes().unwrap()));
    });
}

fn bench_decode_register_reply(c: &mut Criterion) {
    let bytes = [0xC4, 0x61, 1, 2, 0x00, 0x28];

    c.bench_function("decode_register_reply", |b| {
        b.iter(|| black_box(RegisterReply::from_bytes(black_box(&bytes)).unwrap()));
    });
}

fn bench_decode_fetch_reply(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_fetch_reply");
    for entries in [1usize, 16, 255] {
        let bytes = fetch_reply_bytes(entries);
        group.bench_with_input(BenchmarkId::from_parameter(entries), &bytes, |b, bytes| {
            b.iter(|| black_box(FetchReply::from_bytes(bytes).unwrap()));
        });
    }
    group.finish();
}

fn bench_acknowledge(c: &mut Criterion) {
    let probe = [0xC4, 0x61, 42, 6];

    c.bench_function("acknowledge_probe", |b| {
        b.iter(|| black_box(acknowledge(black_box(&probe)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_encode_register,
    bench_decode_register_reply,
    bench_decode_fetch_reply,
    bench_acknowledge
);
criterion_main!(benches);
