// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use widthwise_resolve::Responsive;
use widthwise_scale::Scale;
use widthwise_watch::Context;

fn gen_scale(n: usize) -> Scale<String, u32> {
    let entries: Vec<(String, u32)> = (0..n)
        .map(|i| (format!("bp{i}"), (i as u32 + 1) * 160))
        .collect();
    Scale::new(entries).expect("generated thresholds are distinct")
}

/// A table with an override on every `stride`-th breakpoint: resolution at
/// the widest rank has to scan past the gaps.
fn gen_table(n: usize, stride: usize) -> Responsive<String, u32> {
    let mut value = Responsive::table(0_u32);
    for i in (0..n).step_by(stride) {
        value = value.with(format!("bp{i}"), i as u32);
    }
    value
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_cascade");
    for (n, stride) in [(5_usize, 1_usize), (12, 3), (32, 8)] {
        let scale = gen_scale(n);
        let value = gen_table(n, stride);
        let names: Vec<String> = scale.order().cloned().collect();
        group.throughput(Throughput::Elements(names.len() as u64));
        group.bench_function(format!("resolve_at_{n}_stride{stride}"), |b| {
            b.iter(|| {
                let mut acc = 0_u32;
                for name in &names {
                    acc += *value
                        .resolve_at(&scale, black_box(name))
                        .expect("names come from the scale");
                }
                acc
            });
        });
    }
    group.finish();
}

fn bench_resolve_with_context(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_context");
    let scale = gen_scale(12);
    let value = gen_table(12, 3);
    let cx = Context::new(scale.clone(), "bp11".to_string()).expect("bp11 is on the scale");
    group.throughput(Throughput::Elements(1));
    group.bench_function("resolve_widest", |b| {
        b.iter(|| *black_box(&value).resolve(&cx));
    });
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_resolve_with_context);
criterion_main!(benches);
