use std::hint::black_box;

use arcade_rules::core::{Direction, GameRng};
use arcade_rules::games::candy::{find_matches, CandyEngine};
use arcade_rules::games::sudoku::{carve_puzzle, generate_solution, Difficulty};
use arcade_rules::games::twenty48::{preview_move, Game2048Action, Game2048Engine};
use arcade_rules::rules::GameEngine;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

fn bench_twenty48(c: &mut Criterion) {
    c.bench_function("2048/preview_left", |b| {
        let grid = Game2048Engine::new(42).state().grid.clone();
        b.iter(|| black_box(preview_move(&grid, Direction::Left)))
    });
    c.bench_function("2048/hundred_moves", |b| {
        b.iter_batched(
            || Game2048Engine::new(7),
            |mut engine| {
                for i in 0..100 {
                    let direction = Direction::ALL[i % Direction::ALL.len()];
                    engine.handle_action(Game2048Action::Move { direction });
                }
                black_box(engine.state().score)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_candy(c: &mut Criterion) {
    c.bench_function("candy/new_game", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            black_box(CandyEngine::new(seed))
        })
    });
    c.bench_function("candy/find_matches", |b| {
        let grid = CandyEngine::new(3).state().grid;
        b.iter(|| black_box(find_matches(&grid)))
    });
}

fn bench_sudoku(c: &mut Criterion) {
    c.bench_function("sudoku/solution", |b| {
        b.iter_batched(|| GameRng::new(11), |mut rng| black_box(generate_solution(&mut rng)), BatchSize::SmallInput)
    });
    c.bench_function("sudoku/hard_puzzle", |b| {
        b.iter_batched(
            || GameRng::new(12),
            |mut rng| {
                let solution = generate_solution(&mut rng);
                black_box(carve_puzzle(&solution, Difficulty::Hard.removals(), &mut rng))
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_twenty48, bench_candy, bench_sudoku);
criterion_main!(benches);
