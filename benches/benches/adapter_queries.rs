// Copyright 2026 the Boundlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use boundlist_adapter::BoundListAdapter;
use boundlist_diff::KeyedDiff;
use boundlist_item::IdentityKeyed;

#[derive(Clone, PartialEq)]
struct Row {
    id: u64,
}

impl IdentityKeyed for Row {
    type Key = u64;

    fn identity_key(&self) -> u64 {
        self.id
    }
}

fn adapter_with(len: u64) -> BoundListAdapter<Row, KeyedDiff> {
    let mut adapter = BoundListAdapter::new(KeyedDiff);
    adapter.set_items((0..len).map(|id| Row { id }).collect());
    adapter.set_top_indicator(true);
    adapter.set_bottom_indicator(true);
    adapter
}

fn bench_position_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapter/position_queries");

    // A full layout pass touches every visible position once; model that as
    // a sweep over the whole position space.
    for len in [1_024u64, 65_536] {
        let adapter = adapter_with(len);
        group.throughput(Throughput::Elements(adapter.item_count() as u64));

        group.bench_with_input(BenchmarkId::new("sweep", len), &adapter, |b, adapter| {
            b.iter(|| {
                for position in 0..adapter.item_count() {
                    black_box(adapter.row_kind(position));
                    black_box(adapter.item(position));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_position_queries);
criterion_main!(benches);
