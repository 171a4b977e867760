// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_shout::ui::banner::{LayoutEngine, LayoutInput};
use std::hint::black_box;

fn layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("banner_layout");

    let inputs: Vec<LayoutInput> = [(true, false), (true, true), (false, false), (false, true)]
        .into_iter()
        .map(|(has_image, subtitle_empty)| LayoutInput {
            has_image,
            subtitle_empty,
            title_height: 20.0,
            subtitle_height: if subtitle_empty { 0.0 } else { 34.0 },
            viewport_width: 390.0,
            status_bar_hidden: false,
        })
        .collect();

    group.bench_function("compute_geometry_all_variants", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(LayoutEngine::compute_geometry(black_box(input)));
            }
        });
    });

    group.bench_function("compute_geometry_rotation", |b| {
        let mut input = inputs[0];
        b.iter(|| {
            input.viewport_width = if input.viewport_width < 500.0 { 844.0 } else { 390.0 };
            input.status_bar_hidden = !input.status_bar_hidden;
            black_box(LayoutEngine::compute_geometry(&input))
        });
    });

    group.finish();
}

criterion_group!(benches, layout_benchmark);
criterion_main!(benches);
