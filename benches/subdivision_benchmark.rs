// benches/subdivision_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fractal_demos::palette::Palette;
use fractal_demos::{FractalSubdivider, Point2, Point3, RandomWalkSampler, SeedPolicy, Tetrahedron, Triangle};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn base_triangle() -> Triangle {
    Triangle::new(Point2::new(-1.0, -1.0), Point2::new(0.0, 1.0), Point2::new(1.0, -1.0))
}

fn base_tetrahedron() -> Tetrahedron {
    Tetrahedron::new(
        Point3::new(0.0, 0.0, -1.0),
        Point3::new(0.0, 0.9428, 0.3333),
        Point3::new(-0.8165, -0.4714, 0.3333),
        Point3::new(0.8165, -0.4714, 0.3333),
    )
}

fn subdivision_benchmark_fn(c: &mut Criterion) {
    let mut group = c.benchmark_group("Subdivision");

    for depth in [3u32, 5, 7] {
        group.bench_with_input(BenchmarkId::new("triangle_gasket", depth), &depth, |b, &depth| {
            b.iter(|| FractalSubdivider::subdivide_triangle(black_box(base_triangle()), black_box(depth)))
        });
        group.bench_with_input(BenchmarkId::new("tetrahedron_gasket", depth), &depth, |b, &depth| {
            b.iter(|| {
                FractalSubdivider::subdivide_tetrahedron_with_palette(
                    black_box(base_tetrahedron()),
                    black_box(depth),
                    &Palette::TETRA_FACES,
                )
            })
        });
    }
    group.finish();
}

fn chaos_game_benchmark_fn(c: &mut Criterion) {
    let corners = base_triangle().corners();
    let sampler = RandomWalkSampler::new(&corners, SeedPolicy::TriangleInterior);

    let mut group = c.benchmark_group("ChaosGame");
    group.bench_function("chaos_triangle_5000", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| sampler.generate(black_box(5000), &mut rng))
    });
    group.finish();
}

criterion_group!(benches, subdivision_benchmark_fn, chaos_game_benchmark_fn);
criterion_main!(benches);
