use aoc2025_day_3::{part1, part2};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() {
    divan::main();
}

/// Puzzle-sized input: 200 banks of 100 batteries, generated from a fixed seed.
fn input() -> String {
    let mut rng = StdRng::seed_from_u64(2025);
    (0..200)
        .map(|_| {
            (0..100)
                .map(|_| char::from(rng.random_range(b'1'..=b'9')))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[divan::bench]
fn bench_part1(bencher: divan::Bencher) {
    let input = input();
    bencher.bench(|| part1::process(divan::black_box(&input)).unwrap());
}

#[divan::bench]
fn bench_part2(bencher: divan::Bencher) {
    let input = input();
    bencher.bench(|| part2::process(divan::black_box(&input)).unwrap());
}
