use criterion::{black_box, criterion_group, criterion_main, Criterion};
use my_math_lib::math::Complex;
use rand::Rng as _;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;

fn random_values(rng: &mut Pcg64, count: usize) -> Vec<Complex<f64>> {
    (0..count)
        .map(|_| Complex::new(rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3)))
        .collect()
}

fn add_f64(c: &mut Criterion) {
    let mut rng: Pcg64 = Seeder::from(&[0xff]).make_rng();
    let values = random_values(&mut rng, 4096);

    c.bench_function("add (f64, 4096)", |b| {
        b.iter(|| {
            black_box(
                values
                    .iter()
                    .fold(Complex::new(0., 0.), |acc, v| acc + *v),
            )
        })
    });
}

fn add_by_ref_i64(c: &mut Criterion) {
    let mut rng: Pcg64 = Seeder::from(&[0xff]).make_rng();
    let values: Vec<Complex<i64>> = (0..4096)
        .map(|_| Complex::new(rng.gen_range(-1000..1000), rng.gen_range(-1000..1000)))
        .collect();

    c.bench_function("add by ref (i64, 4096)", |b| {
        b.iter(|| {
            black_box(
                values
                    .iter()
                    .fold(Complex::new(0, 0), |acc, v| &acc + v),
            )
        })
    });
}

fn display_f64(c: &mut Criterion) {
    let mut rng: Pcg64 = Seeder::from(&[0xff]).make_rng();
    let values = random_values(&mut rng, 256);

    c.bench_function("display (f64, 256)", |b| {
        b.iter(|| {
            for v in &values {
                black_box(v.to_string());
            }
        })
    });
}

criterion_group!(benches, add_f64, add_by_ref_i64, display_f64);
criterion_main!(benches);
