// Criterion benchmarks for Trove Rank

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::Map;
use trove_rank::core::{haversine_km, Ranker, OUTPUT_LIMIT};
use trove_rank::models::{Candidate, Coordinates};

fn create_candidate(id: usize, lat: f64, lon: f64) -> Candidate {
    Candidate {
        id: id.to_string(),
        seller_rating: Some((id % 6) as f64),
        seller_latitude: Some(lat),
        seller_longitude: Some(lon),
        created_at: None,
        extra: Map::new(),
    }
}

fn requester() -> Coordinates {
    Coordinates {
        latitude: 40.7128,
        longitude: -74.0060,
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    let from = requester();
    let to = Coordinates {
        latitude: 40.72,
        longitude: -74.01,
    };

    c.bench_function("haversine_km", |b| {
        b.iter(|| haversine_km(black_box(from), black_box(to)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::with_default_weights();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 200].iter() {
        let candidates: Vec<Candidate> = (0..*candidate_count)
            .map(|i| {
                let lat_offset = (i as f64 * 0.001) % 0.5;
                let lon_offset = (i as f64 * 0.001) % 0.5;
                create_candidate(i, 40.7128 + lat_offset, -74.0060 + lon_offset)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(candidate_count),
            candidate_count,
            |b, _| {
                b.iter_batched(
                    || candidates.clone(),
                    |feed| ranker.rank(feed, Some(requester()), OUTPUT_LIMIT),
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_ranking_locationless(c: &mut Criterion) {
    let ranker = Ranker::with_default_weights();

    let candidates: Vec<Candidate> = (0..200)
        .map(|i| create_candidate(i, 40.7128, -74.0060))
        .collect();

    c.bench_function("ranking_locationless_200", |b| {
        b.iter_batched(
            || candidates.clone(),
            |feed| ranker.rank(feed, None, OUTPUT_LIMIT),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_ranking,
    bench_ranking_locationless
);
criterion_main!(benches);
