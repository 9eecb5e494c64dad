use criterion::{Criterion, criterion_group, criterion_main};
use grflex::{
    estimator::{Estimator, RoofInput, Season},
    locator::{self, Locator, Supplier, SupplierKind},
    shared::Coordinate,
};
use std::{env, hint::black_box, time::Duration};

fn synthetic_suppliers(count: usize) -> Vec<Supplier> {
    (0..count)
        .map(|i| {
            let step = i as f64 / count as f64;
            Supplier {
                id: format!("b{i}").into(),
                name: format!("Bench Supplier {i}").into(),
                kind: SupplierKind::Stockist,
                city: "Bench".into(),
                postcode: "BN1".into(),
                phone: "0000 000000".into(),
                coordinate: Coordinate::from((50.0 + step * 8.0, -5.5 + step * 7.0)),
            }
        })
        .collect()
}

fn load_suppliers() -> Vec<Supplier> {
    match env::var("GRFLEX_SUPPLIERS") {
        Ok(path) => locator::load_csv_file(&path).expect("Failed to load supplier CSV"),
        Err(_) => synthetic_suppliers(50_000),
    }
}

fn rank(locator: &Locator) {
    let origin = Coordinate::from((52.4862, -1.8904));
    let _ = black_box(locator.rank(&origin));
}

fn estimate(estimator: &Estimator) {
    let input = RoofInput::Dimensions {
        length: "12,5".into(),
        width: "8".into(),
    };
    let _ = black_box(estimator.estimate(&input, Season::Winter));
}

fn criterion_benchmark(c: &mut Criterion) {
    let locator = Locator::new().with_suppliers(load_suppliers());
    let estimator = Estimator::default();

    let mut group = c.benchmark_group("Locator");
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));
    group.bench_function("Rank suppliers", |b| b.iter(|| rank(&locator)));
    group.finish();

    c.bench_function("Estimate dimensions", |b| b.iter(|| estimate(&estimator)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
