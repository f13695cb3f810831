use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use terminal_life::patterns::{generate, PatternKind};
use terminal_life::simulation::{Grid, Simulation};

fn pattern_grid(kind: PatternKind, width: usize, height: usize) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let alive = generate(kind, width, height, 0.3, &mut rng).expect("pattern fits grid");
    Grid::new(width, height, alive).expect("cells are in bounds")
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let random = pattern_grid(PatternKind::Random, 40, 20);
    c.bench_function("step random 40x20", |b| b.iter(|| black_box(&random).step()));

    let large = pattern_grid(PatternKind::Random, 256, 256);
    c.bench_function("step random 256x256", |b| b.iter(|| black_box(&large).step()));

    let gun = pattern_grid(PatternKind::GliderGun, 80, 60);
    c.bench_function("glider gun 120 gens", |b| {
        b.iter_batched(
            || Simulation::new(gun.clone()),
            |mut sim| {
                for _ in 0..120 {
                    sim.advance();
                }
                sim.grid().count_live()
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
