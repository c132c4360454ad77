use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ditrune::atlas::Atlas;
use ditrune::lattice::{CoordinateTable, LatticeMapping};
use ditrune::mutation;
use ditrune::quadset::Quadset;
use ditrune::ternary::Ditrune;
use ditrune::vector::VectorSweep;

fn bench_resolvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolvers");

    let seed = Ditrune::from_value(582).unwrap();
    let other = Ditrune::from_value(123).unwrap();

    group.bench_function("quadset_resolve", |bencher| {
        bencher.iter(|| Quadset::resolve(black_box(seed)))
    });

    group.bench_function("mutation_trail", |bencher| {
        bencher.iter(|| mutation::trail(black_box(seed)))
    });

    group.bench_function("transgram", |bencher| {
        bencher.iter(|| black_box(seed).transgram(black_box(other)))
    });

    group.bench_function("quadset_full_domain", |bencher| {
        bencher.iter(|| {
            for d in Ditrune::domain() {
                black_box(Quadset::resolve(d));
            }
        })
    });

    group.finish();
}

fn bench_sweeps(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweeps");

    group.bench_function("vector_sweep", |bencher| {
        bencher.iter(|| {
            let sweep = VectorSweep::compute();
            black_box(sweep.verify_uniqueness())
        })
    });

    group.bench_function("atlas_build", |bencher| bencher.iter(Atlas::build));

    group.bench_function("balanced_table_build", |bencher| {
        bencher.iter(CoordinateTable::balanced)
    });

    let table = CoordinateTable::balanced();
    group.bench_function("cell_lookup_full_domain", |bencher| {
        bencher.iter(|| {
            for d in Ditrune::domain() {
                black_box(table.cell_of(black_box(d)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_resolvers, bench_sweeps);
criterion_main!(benches);
