use criterion::criterion_main;


criterion_main! {
    physics::fallingsand::data::element_grid::benches,
    physics::fallingsand::util::image::benches,
}
