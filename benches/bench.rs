// Criterion benchmarks for the search engine

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use savr_search::core::{bounding_box, haversine_km, RankingMode, SearchEngine, UrgencyThresholds};
use savr_search::models::{GeoPoint, ListingCandidate, SearchQuery};
use savr_search::services::{FixedClock, InMemorySource};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn create_listing(id: i64, lat: f64, lon: f64) -> ListingCandidate {
    ListingCandidate {
        id,
        title: format!("Surprise bag {}", id),
        description: Some("Assorted leftovers".to_string()),
        price: 5.0 + (id % 20) as f64,
        original_price: Some(30.0),
        location: GeoPoint::new(lat, lon),
        pickup_start: fixed_now() - Duration::hours(1),
        pickup_end: fixed_now() + Duration::hours(1 + id % 12),
        category_ids: vec![1 + id % 5],
        is_halal: id % 2 == 0,
        business_id: 1 + id % 50,
    }
}

fn create_query() -> SearchQuery {
    SearchQuery {
        center: GeoPoint::new(41.3092, 69.2401),
        radius_km: 5.0,
        page: 1,
        limit: 20,
        price_min: None,
        price_max: None,
        category_ids: vec![],
        is_halal: None,
        text: None,
        ranking: RankingMode::UrgencyFirst,
    }
}

fn bench_haversine(c: &mut Criterion) {
    let a = GeoPoint::new(41.3092, 69.2401);
    let b = GeoPoint::new(41.33, 69.27);

    c.bench_function("haversine_km", |bencher| {
        bencher.iter(|| haversine_km(black_box(&a), black_box(&b)));
    });
}

fn bench_bounding_box(c: &mut Criterion) {
    let center = GeoPoint::new(41.3092, 69.2401);

    c.bench_function("bounding_box", |bencher| {
        bencher.iter(|| bounding_box(black_box(&center), black_box(5.0)));
    });
}

fn bench_listing_search(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    let query = create_query();

    let mut group = c.benchmark_group("search_listings");

    for candidate_count in [10, 100, 1000, 5000].iter() {
        let listings: Vec<ListingCandidate> = (0..i64::from(*candidate_count))
            .map(|i| {
                let lat_offset = (i as f64 * 0.0007) % 0.1;
                let lon_offset = (i as f64 * 0.0007) % 0.1;
                create_listing(i, 41.3092 + lat_offset, 69.2401 + lon_offset)
            })
            .collect();

        let engine = SearchEngine::new(
            InMemorySource::with_listings(listings),
            FixedClock(fixed_now()),
            UrgencyThresholds::default(),
        );

        group.bench_with_input(
            BenchmarkId::new("urgency_first", candidate_count),
            candidate_count,
            |bencher, _| {
                bencher.iter(|| {
                    rt.block_on(engine.search_listings(black_box(&query)))
                        .expect("search")
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_haversine, bench_bounding_box, bench_listing_search);
criterion_main!(benches);
