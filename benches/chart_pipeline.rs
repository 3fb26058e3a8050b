use criterion::{Criterion, black_box, criterion_group, criterion_main};
use poisson_explorer::{Domain, ParameterSnapshot, PlotFrame, Rate, density_view, pmf, rasterize};

fn bench_pmf(c: &mut Criterion) {
    let mut group = c.benchmark_group("pmf");

    group.bench_function("lambda_4_narrow", |b| {
        let domain = Domain::new(0, 20).unwrap();
        let rate = Rate::new(4.0).unwrap();
        b.iter(|| pmf(black_box(domain), black_box(rate)));
    });

    group.bench_function("lambda_60_wide", |b| {
        let domain = Domain::new(0, 200).unwrap();
        let rate = Rate::new(60.0).unwrap();
        b.iter(|| pmf(black_box(domain), black_box(rate)));
    });

    group.finish();
}

fn bench_rasterize(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize");

    let static_frame = {
        let dist = pmf(Domain::new(0, 20).unwrap(), Rate::new(4.0).unwrap());
        PlotFrame::from_distribution(dist)
    };

    group.bench_function("static_800x600", |b| {
        b.iter(|| rasterize(black_box(&static_frame), 800, 600));
    });

    let trailed_frame = {
        let dist = pmf(Domain::new(0, 80).unwrap(), Rate::new(35.0).unwrap());
        let trail = (1..=39)
            .map(|i| {
                let rate = Rate::new(1.0 + f64::from(i) * 0.85).unwrap();
                pmf(Domain::new(0, 80).unwrap(), rate)
            })
            .collect();
        PlotFrame {
            trail,
            y_max: 1.0,
            ..PlotFrame::from_distribution(dist)
        }
    };

    group.bench_function("full_trail_800x600", |b| {
        b.iter(|| rasterize(black_box(&trailed_frame), 800, 600));
    });

    group.finish();
}

fn bench_density_view(c: &mut Criterion) {
    c.bench_function("density_view_default", |b| {
        let params = ParameterSnapshot::default();
        b.iter(|| density_view(black_box(&params)));
    });
}

criterion_group!(benches, bench_pmf, bench_rasterize, bench_density_view);
criterion_main!(benches);
