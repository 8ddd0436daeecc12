//! Benchmark full recommendation runs and the coverage grid.

use camera_coverage::core::config::EngineConfig;
use camera_coverage::core::types::Point;
use camera_coverage::coverage::{BlindSpotDetector, CoverageGrid};
use camera_coverage::recommendation::RecommendationEngine;
use camera_coverage::venue::{Camera, FloorPlan, Zone, ZoneType};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Cameras spread on a lattice, rotating through the compass.
fn camera_lattice(count: usize, floor: FloorPlan) -> Vec<Camera> {
    let per_row = (count as f64).sqrt().ceil().max(1.0) as usize;
    (0..count)
        .map(|i| {
            let col = i % per_row;
            let row = i / per_row;
            let x = (col as f64 + 0.5) * floor.width / per_row as f64;
            let y = (row as f64 + 0.5) * floor.height / per_row as f64;
            Camera::new(format!("cam-{}", i), Point::new(x, y), 90.0, 150.0, (i * 45 % 360) as f64)
        })
        .collect()
}

fn venue_zones() -> Vec<Zone> {
    let kinds = [
        ZoneType::Entrance,
        ZoneType::Exit,
        ZoneType::EmergencyExit,
        ZoneType::HighTraffic,
        ZoneType::PlayArea,
    ];
    (0..10)
        .map(|i| {
            let x = 80.0 + 90.0 * i as f64;
            let y = if i % 2 == 0 { 100.0 } else { 650.0 };
            Zone::new(
                format!("zone-{}", i),
                format!("Zone {}", i),
                kinds[i % kinds.len()],
                vec![
                    Point::new(x - 30.0, y - 30.0),
                    Point::new(x + 30.0, y - 30.0),
                    Point::new(x + 30.0, y + 30.0),
                    Point::new(x - 30.0, y + 30.0),
                ],
            )
        })
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let engine = RecommendationEngine::default();
    let floor = FloorPlan::new(1000.0, 800.0);
    let zones = venue_zones();

    let mut group = c.benchmark_group("generate");
    for count in [0, 8, 32] {
        let cameras = camera_lattice(count, floor);
        group.bench_with_input(BenchmarkId::from_parameter(count), &cameras, |b, cameras| {
            b.iter(|| engine.generate(black_box(&floor), black_box(&zones), black_box(cameras)))
        });
    }
    group.finish();
}

fn bench_coverage_grid(c: &mut Criterion) {
    let floor = FloorPlan::new(1000.0, 800.0);
    let cameras = camera_lattice(16, floor);
    let detector = BlindSpotDetector::from_config(&EngineConfig::default());

    let mut group = c.benchmark_group("coverage_grid");
    for size in [20, 50, 100] {
        group.bench_with_input(BenchmarkId::new("build", size), &size, |b, &size| {
            b.iter(|| CoverageGrid::build(black_box(&cameras), floor, size))
        });

        let grid = CoverageGrid::build(&cameras, floor, size);
        group.bench_with_input(BenchmarkId::new("blind_spots", size), &grid, |b, grid| {
            b.iter(|| detector.detect(black_box(grid), &cameras))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_coverage_grid);
criterion_main!(benches);
