use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use meetpoint_core::{
    campus::{CampusGraph, built_in_recommender as campus_recommender},
    subway::{SubwayNetwork, built_in_recommender as subway_recommender},
};

fn build_benchmark(c: &mut Criterion) {
    c.bench_function("CampusGraph::built_in", |b| {
        b.iter(|| black_box(CampusGraph::built_in()))
    });

    c.bench_function("SubwayNetwork::built_in", |b| {
        b.iter(|| black_box(SubwayNetwork::built_in()))
    });
}

fn recommend_benchmark(c: &mut Criterion) {
    let campus = campus_recommender();
    let subway = subway_recommender();

    c.bench_function("campus recommend I -> 신기숙사", |b| {
        b.iter(|| black_box(campus.recommend(black_box("I"), black_box("신기숙사"))))
    });

    c.bench_function("subway recommend 서울역 -> 북한산우이", |b| {
        b.iter(|| black_box(subway.recommend(black_box("서울역"), black_box("북한산우이"))))
    });
}

criterion_group!(benches, build_benchmark, recommend_benchmark);
criterion_main!(benches);
