use bloodjack::cards::*;
use bloodjack::gameplay::*;
use bloodjack::players::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_shuffled_deck,
        dealing_fresh_game,
        enumerating_legal_actions,
        deciding_robot_guess,
        autoplaying_full_game,
}

fn building_shuffled_deck(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("build a shuffled Deck and hidden Card", |b| {
        b.iter(|| Deck::build(rng))
    });
}

fn dealing_fresh_game(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("deal and start a Game", |b| {
        b.iter(|| Game::shuffle(rng).start())
    });
}

fn enumerating_legal_actions(c: &mut criterion::Criterion) {
    let game = Game::seeded(0).start().game;
    c.bench_function("enumerate legal Actions at the root", |b| {
        b.iter(|| game.legal())
    });
}

fn deciding_robot_guess(c: &mut criterion::Criterion) {
    let game = Game::seeded(0).start().game;
    c.bench_function("pick the Robot's surest guess", |b| {
        b.iter(|| Robot::guess(&game))
    });
}

fn autoplaying_full_game(c: &mut criterion::Criterion) {
    let mut seed = 0;
    c.bench_function("autoplay a full Game with the Robot", |b| {
        b.iter(|| {
            seed += 1;
            Session::seeded(Robot::seeded(seed), seed).run()
        })
    });
}
