// Performance benchmarks for the routing ring and wire framing
// Run with: cargo bench

use std::hint::black_box;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use busmesh::bus::structs::bus_addr::BusAddr;
use busmesh::net::enums::head_length::HeadLength;
use busmesh::net::structs::frame_decoder::FrameDecoder;
use busmesh::net::structs::msg_head::MsgHead;
use busmesh::ring::structs::consistent_hash_ring::ConsistentHashRing;
use busmesh::ring::structs::machine_node::MachineNode;

fn create_ring(peers: u8) -> ConsistentHashRing {
    let mut ring = ConsistentHashRing::new();
    for instance in 0..peers {
        ring.insert(MachineNode::new(BusAddr::encode(1, 1, 3, instance), "10.0.0.1", 9000 + instance as u16));
    }
    ring
}

fn bench_ring_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_lookup_by_str");

    for peers in [2u8, 16, 64].iter() {
        let ring = create_ring(*peers);
        group.bench_with_input(BenchmarkId::from_parameter(peers), peers, |b, _| {
            let mut counter = 0u64;
            b.iter(|| {
                counter = counter.wrapping_add(1);
                black_box(ring.lookup_by_str(&format!("player-{counter}")).map(|node| node.machine_id))
            });
        });
    }

    group.finish();
}

fn bench_ring_membership_change(c: &mut Criterion) {
    let mut ring = create_ring(16);
    let churn = MachineNode::new(BusAddr::encode(1, 1, 3, 200), "10.0.0.2", 9200);

    c.bench_function("ring_insert_erase", |b| {
        b.iter(|| {
            black_box(ring.insert(churn.clone()));
            black_box(ring.erase(churn.machine_id));
        });
    });
}

fn bench_frame_decoding(c: &mut Criterion) {
    let mut stream = Vec::new();
    for msg_id in 0..100u16 {
        stream.extend(MsgHead::encode_frame(HeadLength::ss, msg_id, 7, &[0u8; 256]));
    }

    c.bench_function("frame_decoder_100_frames", |b| {
        b.iter(|| {
            let mut decoder = FrameDecoder::new(HeadLength::ss);
            let mut frames = 0;
            for chunk in stream.chunks(1500) {
                decoder.push(chunk);
                while let Ok(Some(frame)) = decoder.next_frame() {
                    black_box(frame);
                    frames += 1;
                }
            }
            black_box(frames)
        });
    });
}

fn bench_bus_parse(c: &mut Criterion) {
    c.bench_function("bus_addr_parse", |b| {
        b.iter(|| black_box(BusAddr::parse(black_box("12.34.56.78"))))
    });
}

criterion_group!(
    benches,
    bench_ring_lookup,
    bench_ring_membership_change,
    bench_frame_decoding,
    bench_bus_parse,
);

criterion_main!(benches);
