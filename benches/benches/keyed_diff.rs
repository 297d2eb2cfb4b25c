// Copyright 2026 the Boundlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use boundlist_diff::{DiffEngine, KeyedDiff};
use boundlist_item::IdentityKeyed;

#[derive(Clone, PartialEq)]
struct Row {
    id: u64,
    payload: u64,
}

impl IdentityKeyed for Row {
    type Key = u64;

    fn identity_key(&self) -> u64 {
        self.id
    }
}

fn rows(range: core::ops::Range<u64>) -> Vec<Row> {
    range.map(|id| Row { id, payload: id }).collect()
}

fn bench_pagination_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed_diff/pagination_shapes");

    // The shapes a paged source actually produces, at realistic page sizes.
    for len in [256u64, 4_096, 65_536] {
        let old = rows(0..len);
        let appended = rows(0..len + 64);
        let prepended = rows_prepended(&old, 64);
        group.throughput(Throughput::Elements(len));

        group.bench_with_input(BenchmarkId::new("append_page", len), &old, |b, old| {
            b.iter(|| black_box(KeyedDiff.diff(old, &appended)));
        });

        group.bench_with_input(BenchmarkId::new("prepend_page", len), &old, |b, old| {
            b.iter(|| black_box(KeyedDiff.diff(old, &prepended)));
        });

        group.bench_with_input(BenchmarkId::new("unchanged", len), &old, |b, old| {
            b.iter(|| black_box(KeyedDiff.diff(old, old)));
        });
    }

    group.finish();
}

fn rows_prepended(old: &[Row], extra: u64) -> Vec<Row> {
    let mut out = rows(1_000_000..1_000_000 + extra);
    out.extend_from_slice(old);
    out
}

fn bench_disjoint_replacement(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed_diff/disjoint");

    for len in [256u64, 4_096] {
        let old = rows(0..len);
        let new = rows(len..len * 2);
        group.throughput(Throughput::Elements(len));

        group.bench_with_input(BenchmarkId::new("replace_all", len), &old, |b, old| {
            b.iter(|| black_box(KeyedDiff.diff(old, &new)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pagination_shapes, bench_disjoint_replacement);
criterion_main!(benches);
