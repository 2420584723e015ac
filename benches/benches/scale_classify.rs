// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use widthwise_scale::Scale;
use widthwise_watch::{ManualWidth, Watcher};

fn gen_scale(n: usize) -> Scale<String, u32> {
    let entries: Vec<(String, u32)> = (0..n)
        .map(|i| (format!("bp{i}"), (i as u32 + 1) * 160))
        .collect();
    Scale::new(entries).expect("generated thresholds are distinct")
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_width(&mut self, max: u32) -> u32 {
        (self.next_u64() % u64::from(max)) as u32
    }
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_classify");
    for n in [5_usize, 12, 32] {
        let scale = gen_scale(n);
        let mut rng = Rng::new(0x9E37_79B9);
        let widths: Vec<u32> = (0..1024).map(|_| rng.next_width(n as u32 * 200)).collect();
        group.throughput(Throughput::Elements(widths.len() as u64));
        group.bench_function(format!("classify_{n}"), |b| {
            b.iter(|| {
                let mut acc = 0_usize;
                for &w in &widths {
                    acc += scale.classify(black_box(w)).0;
                }
                acc
            });
        });
    }
    group.finish();
}

fn bench_watch_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("watch_sweep");
    for n in [5_usize, 12] {
        let scale = gen_scale(n);
        let mut rng = Rng::new(0xB5297A4D);
        let widths: Vec<u32> = (0..1024).map(|_| rng.next_width(n as u32 * 200)).collect();
        group.throughput(Throughput::Elements(widths.len() as u64));
        group.bench_function(format!("set_width_pump_{n}"), |b| {
            let mut manual = ManualWidth::new();
            let mut watcher =
                Watcher::mount(scale.clone(), &mut manual).expect("mount cannot be refused");
            b.iter(|| {
                let mut changes = 0_usize;
                for &w in &widths {
                    if watcher.pump(manual.set_width(black_box(w))).is_some() {
                        changes += 1;
                    }
                }
                changes
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_watch_sweep);
criterion_main!(benches);
