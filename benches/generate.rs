use rotating_ball::prelude::*;
use criterion::{ Criterion, criterion_group, criterion_main };
use ndarray::Array2;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("eps_ball", |bencher| {
        let side = 64;
        let centers = circle_centers(&sample_angles(256, DEFAULT_SEED), side);

        bencher.iter(||{
            eps_ball(&[side, side], &centers, 6.0)
        })
    });

    c.bench_function("eps_ball 3d", |bencher| {
        let centers = Array2::from_elem((32, 3), 15.5);

        bencher.iter(||{
            eps_ball(&[32, 32, 32], &centers, 8.0)
        })
    });

    c.bench_function("gen_data_s1", |bencher| {
        let options = S1Options::new(256, 64, 6.0);

        bencher.iter(||{
            options.generate(None)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
