//! Deal and replay throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_freecell::core::Deck;
use rust_freecell::games::freecell::{is_valid, FreeCellGame};

#[path = "../tests/common/mod.rs"]
mod common;

fn bench_shuffle(c: &mut Criterion) {
    let mut deck = Deck::new();
    c.bench_function("ms_shuffle", |b| {
        b.iter(|| deck.ms_shuffle(black_box(11_982)));
    });
}

fn bench_deal(c: &mut Criterion) {
    c.bench_function("deal", |b| {
        b.iter(|| FreeCellGame::with_deal(black_box(617), 4));
    });
}

fn bench_replay(c: &mut Criterion) {
    c.bench_function("replay_deal_one", |b| {
        b.iter(|| is_valid(1, 4, black_box(common::DEAL_ONE_SOLUTION)));
    });
}

criterion_group!(benches, bench_shuffle, bench_deal, bench_replay);
criterion_main!(benches);
