//! Benchmarks for move generation and move selection.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_bot::board::{Board, Bot, Color, SearchParams};

const MIDDLEGAME_FEN: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
const CASTLING_FEN: &str = "r3k2r/ppp2ppp/2n5/3p4/3P4/2N5/PPP2PPP/R3K2R w KQkq - 0 1";

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    // Starting position
    let mut startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.get_all_moves(Color::White)))
    });

    // Complex middlegame
    let mut middlegame = Board::from_fen(MIDDLEGAME_FEN);
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.get_all_moves(Color::White)))
    });

    let mut castling = Board::from_fen(CASTLING_FEN);
    group.bench_function("castling", |b| {
        b.iter(|| black_box(castling.get_all_moves(Color::White)))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for depth in [2, 3] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut board = Board::new();
                let params = SearchParams::default().with_fixed_depth(depth);
                let mut bot = Bot::with_rng(Color::White, params, StdRng::seed_from_u64(1));
                bot.get_move(&mut board, None)
            })
        });
    }

    for use_cache in [false, true] {
        group.bench_with_input(
            BenchmarkId::new("middlegame_cache", use_cache),
            &use_cache,
            |b, &use_cache| {
                b.iter(|| {
                    let mut board = Board::from_fen(MIDDLEGAME_FEN);
                    let params = SearchParams::default()
                        .with_fixed_depth(3)
                        .with_cache(use_cache);
                    let mut bot = Bot::with_rng(Color::White, params, StdRng::seed_from_u64(1));
                    bot.get_move(&mut board, None)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_search);
criterion_main!(benches);
