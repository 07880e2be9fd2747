use colorwell::{
    check_wcag_compliance, delta_e_matrix, generate_mix_sequence, simulate_color_blindness,
    ColorInfo, DeltaEMetric, Rgb,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_palette(size: usize) -> Vec<ColorInfo> {
    (0..size)
        .map(|i| {
            let level = (i * 255 / size) as u8;
            ColorInfo::from_rgb(Rgb::new(level, 255 - level, (i * 37 % 256) as u8))
        })
        .collect()
}

fn benchmark_delta_e(c: &mut Criterion) {
    let palette = sample_palette(16);
    let mut group = c.benchmark_group("delta_e_matrix");
    for metric in [DeltaEMetric::Cie76, DeltaEMetric::Cie94, DeltaEMetric::Ciede2000] {
        group.bench_function(format!("{:?}", metric), |b| {
            b.iter(|| delta_e_matrix(black_box(&palette), metric))
        });
    }
    group.finish();
}

fn benchmark_simulation(c: &mut Criterion) {
    let palette = sample_palette(8);
    c.bench_function("simulate_color_blindness_8", |b| {
        b.iter(|| simulate_color_blindness(black_box(&palette)))
    });
}

fn benchmark_mix_sequence(c: &mut Criterion) {
    let palette = sample_palette(4);
    c.bench_function("mix_sequence_frames_100", |b| {
        b.iter(|| {
            let sequence = generate_mix_sequence(black_box(&palette), 100).unwrap();
            sequence.frames().count()
        })
    });
}

fn benchmark_wcag(c: &mut Criterion) {
    c.bench_function("check_wcag_gray_on_white", |b| {
        b.iter(|| check_wcag_compliance(black_box("#777777"), black_box("#FFFFFF")))
    });
}

criterion_group!(
    benches,
    benchmark_delta_e,
    benchmark_simulation,
    benchmark_mix_sequence,
    benchmark_wcag
);
criterion_main!(benches);
