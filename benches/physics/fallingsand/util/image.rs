use criterion::{black_box, criterion_group, Criterion};
use sandfall::physics::fallingsand::data::element_grid::ElementGrid;

/// The default element grid for testing
fn get_element_grid() -> ElementGrid {
    ElementGrid::new(288, 162).unwrap()
}

fn bench_to_raw_image(c: &mut Criterion) {
    let element_grid = get_element_grid();
    c.bench_function("to_raw_image", |b| {
        b.iter(|| {
            black_box(element_grid.to_raw_image());
        })
    });
}

fn bench_as_rgba_bytes(c: &mut Criterion) {
    let element_grid = get_element_grid();
    c.bench_function("as_rgba_bytes", |b| {
        b.iter(|| {
            black_box(element_grid.as_rgba_bytes().len());
        })
    });
}

criterion_group!(benches, bench_to_raw_image, bench_as_rgba_bytes);
