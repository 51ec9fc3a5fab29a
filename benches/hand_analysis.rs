use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mahjong_master::core::{parse_tiles, GameRng, House};
use mahjong_master::engine::{MasterEngine, Phase, ReactionAnswers};
use mahjong_master::hand::{decompositions, is_complete, winning_tiles};
use mahjong_master::scoring::{evaluate, WinContext, WinTile};
use mahjong_master::view::checksum;

fn bench_decompose(c: &mut Criterion) {
    // Many overlapping readings.
    let hand = parse_tiles("m1 m1 m1 m2 m2 m2 m3 m3 m3 m4 m4 m5 m5 m6").unwrap();
    c.bench_function("decompositions_overlapping", |b| {
        b.iter(|| decompositions(black_box(&hand)))
    });

    let noise = parse_tiles("m1 m4 m7 p2 p5 p8 s3 s6 s9 e s w n haku").unwrap();
    c.bench_function("is_complete_miss", |b| b.iter(|| is_complete(black_box(&noise))));
}

fn bench_waits(c: &mut Criterion) {
    let nine_gates = parse_tiles("m1 m1 m1 m2 m3 m4 m5 m6 m7 m8 m9 m9 m9").unwrap();
    c.bench_function("winning_tiles_nine_gates", |b| {
        b.iter(|| winning_tiles(black_box(&nine_gates)))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let hand = parse_tiles("m1 m1 m2 m2 m3 m3 p4 p5 p6 s7 s8 s9 s5").unwrap();
    let win = "s5".parse().unwrap();
    let ctx = WinContext {
        seat: House::South,
        round_wind: House::East,
        hand: &hand,
        melds: &[],
        win: WinTile::Tsumo(win),
        riichi: true,
    };
    let doras = parse_tiles("m2").unwrap();
    c.bench_function("evaluate_riichi_tsumo", |b| {
        b.iter(|| evaluate(black_box(&ctx), black_box(&doras)))
    });
}

fn bench_kyoku(c: &mut Criterion) {
    let engine = MasterEngine::default();
    c.bench_function("kyoku_tsumogiri", |b| {
        b.iter(|| {
            let mut state = engine.new_match(&mut GameRng::new(42));
            loop {
                match state.phase().clone() {
                    Phase::Turn(seat) => {
                        if let Some(tile) = state.drawn() {
                            let _ = engine.discard(&mut state, seat, tile, false);
                        }
                    }
                    Phase::AwaitingReactions(_) => {
                        let _ = engine.resolve_reactions(&mut state, &ReactionAnswers::pass());
                    }
                    Phase::Ended(_) => break,
                }
            }
            checksum(&state)
        });
    });
}

criterion_group!(benches, bench_decompose, bench_waits, bench_evaluate, bench_kyoku);
criterion_main!(benches);
