use countrydb_core::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_lookups(c: &mut Criterion) {
    let db = CountryDb::load().expect("bundled dataset");

    c.bench_function("find_by_code iso2", |b| {
        b.iter(|| db.find_by_code(black_box("at")))
    });
    c.bench_function("find_by_code iso3 miss", |b| {
        b.iter(|| db.find_by_code(black_box("XYZ")))
    });
    c.bench_function("regions", |b| b.iter(|| db.regions()));
}

fn bench_filter(c: &mut Criterion) {
    let db = CountryDb::load().expect("bundled dataset");
    let cards: Vec<CountryCard> = db.countries().iter().map(to_card).collect();

    c.bench_function("visible query+region", |b| {
        b.iter(|| visible(black_box(&cards), black_box("an"), black_box("Europe")))
    });
    c.bench_function("available_regions", |b| {
        b.iter(|| available_regions(black_box(&cards)))
    });
}

criterion_group!(benches, bench_lookups, bench_filter);
criterion_main!(benches);
