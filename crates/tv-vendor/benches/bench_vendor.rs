// SPDX-License-Identifier: AGPL-3.0-only
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// BENCHMARK SUITE — tv-vendor
//
// Ratio math, quotes and committed swaps (including the working-copy clone).
// Run: cargo bench -p tv-vendor
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tv_asset::MockToken;
use tv_core::{PairId, Ratio};
use tv_vendor::{Ledger, NewPair};

const OWNER: &str = "LOSWbenchOwner";
const PAYER: &str = "LOSWbenchPayer";
const VENDOR: &str = "LOSConBenchVendor";

/// Ledger with `pairs` pairs over one asset pair and a payer funded for
/// many swaps.
fn ledger_with(pairs: usize) -> (Ledger, PairId) {
    let ledger = Ledger::new(VENDOR, OWNER);
    ledger
        .register_asset(MockToken::new("LOSConTI", "In", "TI", 18, u64::MAX as u128, PAYER).unwrap().into())
        .unwrap();
    ledger
        .register_asset(MockToken::new("LOSConTO", "Out", "TO", 18, u64::MAX as u128, VENDOR).unwrap().into())
        .unwrap();
    ledger
        .approve("LOSConTI", PAYER, VENDOR, u64::MAX as u128)
        .unwrap();
    let mut last = 0;
    for i in 0..pairs {
        last = ledger
            .create_pair(
                OWNER,
                NewPair {
                    token_in: "LOSConTI".to_string(),
                    token_out: "LOSConTO".to_string(),
                    numerator: 12 + i as u128,
                    denominator: 100,
                    beneficiary: "LOSWbenchDev".to_string(),
                },
            )
            .unwrap();
    }
    (ledger, last)
}

// ─────────────────────────────────────────────────────────────────
// RATIO MATH
// ─────────────────────────────────────────────────────────────────

fn bench_ratio_apply(c: &mut Criterion) {
    let ratio = Ratio::new(12, 100).unwrap();
    c.bench_function("ratio/apply", |b| {
        b.iter(|| black_box(ratio.apply(black_box(1_000_000_000_000))))
    });
}

// ─────────────────────────────────────────────────────────────────
// LEDGER
// ─────────────────────────────────────────────────────────────────

fn bench_quote(c: &mut Criterion) {
    let (ledger, id) = ledger_with(1);
    c.bench_function("ledger/quote", |b| {
        b.iter(|| black_box(ledger.quote(id, black_box(100))))
    });
}

fn bench_swap_by_registry_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger/swap_tokens");
    for pairs in [1usize, 100, 1_000] {
        let (ledger, id) = ledger_with(pairs);
        group.bench_with_input(BenchmarkId::from_parameter(pairs), &pairs, |b, _| {
            b.iter(|| black_box(ledger.swap_tokens(id, 1, PAYER, PAYER)))
        });
    }
    group.finish();
}

// ─────────────────────────────────────────────────────────────────

criterion_group!(
    benches,
    bench_ratio_apply,
    bench_quote,
    bench_swap_by_registry_size,
);
criterion_main!(benches);
