use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io;
use std::time::Duration;

use morris::board::{Action, Color, GameState, Position};
use morris::eval::evaluate;
use morris::movegen::legal_actions;
use morris::search::{search, SearchConfig};

/// A movement-phase position with mills available to both sides.
fn midgame_state() -> GameState {
    use Position::*;
    let mut state = GameState::new();
    for p in [A1, A7, B4, G7, D2] {
        state.place_piece(Color::White, p);
    }
    for p in [C5, E3, G1, F6, D6] {
        state.place_piece(Color::Black, p);
    }
    state.set_turn(11);
    state
}

/// A placement-phase position after six plies.
fn opening_state() -> GameState {
    use Position::*;
    let mut state = GameState::new();
    for a in [
        Action::place(Color::White, D2),
        Action::place(Color::Black, B4),
        Action::place(Color::White, F2),
        Action::place(Color::Black, A7),
        Action::place(Color::White, D1),
        Action::place(Color::Black, G7),
    ] {
        match state.apply(&a) {
            Ok(next) => state = next,
            Err(e) => panic!("bench setup: {}", e),
        }
    }
    state
}

fn bench_movegen(c: &mut Criterion) {
    let opening = opening_state();
    c.bench_function("movegen_placement", |b| {
        b.iter(|| legal_actions(black_box(&opening), false))
    });

    let midgame = midgame_state();
    c.bench_function("movegen_movement", |b| {
        b.iter(|| legal_actions(black_box(&midgame), false))
    });

    c.bench_function("movegen_existence_probe", |b| {
        b.iter(|| legal_actions(black_box(&midgame), true))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let state = midgame_state();
    c.bench_function("evaluate_midgame", |b| {
        b.iter(|| evaluate(black_box(&state), black_box(Color::White)))
    });
}

fn bench_apply(c: &mut Criterion) {
    let state = midgame_state();
    let action = Action::shift(Color::White, Position::B4, Position::A4).capturing(Position::C5);
    c.bench_function("apply_with_capture", |b| {
        b.iter(|| state.apply(black_box(&action)))
    });
    c.bench_function("game_state_clone", |b| b.iter(|| black_box(&state).clone()));
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));

    let opening = opening_state();
    group.bench_function("opening_depth_3", |b| {
        let config = SearchConfig {
            max_depth: 3,
            threads: 1,
        };
        b.iter(|| search(black_box(&opening), &config, Color::White, &mut io::sink()))
    });

    let midgame = midgame_state();
    group.bench_function("midgame_depth_4", |b| {
        let config = SearchConfig {
            max_depth: 4,
            threads: 1,
        };
        b.iter(|| search(black_box(&midgame), &config, Color::White, &mut io::sink()))
    });

    group.bench_function("midgame_depth_4_parallel", |b| {
        let config = SearchConfig {
            max_depth: 4,
            threads: 4,
        };
        b.iter(|| search(black_box(&midgame), &config, Color::White, &mut io::sink()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_movegen,
    bench_evaluate,
    bench_apply,
    bench_search
);
criterion_main!(benches);
