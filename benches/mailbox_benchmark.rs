//! Mailbox benchmark: Measure submit latency and end-to-end throughput.
//!
//! Target: submit stays well under 1µs regardless of worker load.

use active_object::ActiveObject;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use crossbeam_channel::bounded;

fn submit_only(c: &mut Criterion) {
    let object = ActiveObject::new("bench-submit");

    c.bench_function("submit_noop", |b| {
        b.iter(|| object.submit(black_box(|| {})))
    });

    let _ = object.join();
}

fn submit_and_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("submit_and_drain");

    for count in [100_u64, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let object = ActiveObject::new("bench-drain");
            b.iter(|| {
                for _ in 0..count {
                    object.submit(|| {}).unwrap();
                }
                // Wait for the worker to catch up
                let (tx, rx) = bounded(1);
                object.submit(move || tx.send(()).unwrap()).unwrap();
                rx.recv().unwrap();
            });
            let _ = object.join();
        });
    }

    group.finish();
}

fn many_objects(c: &mut Criterion) {
    c.bench_function("spawn_and_join", |b| {
        b.iter(|| {
            let object = ActiveObject::new("bench-spawn");
            object.join()
        })
    });
}

criterion_group!(benches, submit_only, submit_and_drain, many_objects);
criterion_main!(benches);
