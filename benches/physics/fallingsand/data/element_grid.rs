use criterion::{black_box, criterion_group, Criterion};
use sandfall::physics::fallingsand::data::element_grid::ElementGrid;
use sandfall::physics::fallingsand::elements::element::MaterialKind;
use sandfall::physics::fallingsand::util::vectors::XyVector;

/// A 288x162 grid, the size of a 1152x650 viewport at 4 pixels per cell
fn get_element_grid() -> ElementGrid {
    ElementGrid::new(288, 162).unwrap()
}

/// Top half sand and water in alternating columns, so every tick has plenty to move
fn get_busy_grid() -> ElementGrid {
    let mut grid = get_element_grid();
    for y in 0..81 {
        for x in 1..287 {
            let kind = if x % 2 == 0 {
                MaterialKind::Sand
            } else {
                MaterialKind::Water
            };
            grid.set(XyVector::new(x, y), kind).unwrap();
        }
    }
    grid
}

fn bench_tick_empty(c: &mut Criterion) {
    let mut grid = get_element_grid();
    c.bench_function("tick_empty", |b| {
        b.iter(|| {
            black_box(grid.tick());
        })
    });
}

fn bench_tick_busy(c: &mut Criterion) {
    let grid = get_busy_grid();
    c.bench_function("tick_busy", |b| {
        b.iter_batched(
            || grid.clone(),
            |mut grid| {
                for _ in 0..10 {
                    black_box(grid.tick());
                }
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_tick_empty, bench_tick_busy);
