use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wumpus::game::{Dice, StdDice};
use wumpus::{Game, Placement};

fn placement(c: &mut Criterion) {
    let mut dice = StdDice::seeded(1);
    c.bench_function("random placement", |b| {
        b.iter(|| black_box(Placement::random(&mut dice)))
    });
}

fn turns(c: &mut Criterion) {
    c.bench_function("round of random moves", |b| {
        let mut game = Game::seeded(2);
        let mut dice = StdDice::seeded(3);
        b.iter(|| {
            if game.current_outcome().is_over() {
                game.begin_round(false);
            }
            let tunnels = game.describe_current_room().tunnels;
            black_box(game.attempt_move(tunnels[dice.tunnel()]))
        })
    });
}

criterion_group!(benches, placement, turns);
criterion_main!(benches);
