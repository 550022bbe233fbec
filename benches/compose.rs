// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use image_rs::{Rgba, RgbaImage};
use std::hint::black_box;
use studio_lens::application::port::{Overlay, Surface};
use studio_lens::domain::editing::{
    AdjustmentPercent, BorderStyle, BorderWidth, Color, FrameStyle, StylisticFilter,
};
use studio_lens::domain::geometry::Size;
use studio_lens::domain::locator::Locator;
use studio_lens::editor::recipes::stylistic_ops;
use studio_lens::editor::{border_overlay, compose_filter_stack, frame_overlay, EditState};
use studio_lens::infrastructure::SkiaSurface;
use studio_lens::media::{LoadedBitmap, Placement};

fn photo() -> RgbaImage {
    RgbaImage::from_fn(1200, 800, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    })
}

fn edited_state() -> EditState {
    let mut state = EditState::default();
    state.brightness = AdjustmentPercent::new(30);
    state.contrast = AdjustmentPercent::new(-15);
    state.filter = StylisticFilter::Cyberpunk;
    state
}

fn filter_stack_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_stack");
    let source = photo();
    let state = edited_state();

    group.bench_function("compose", |b| {
        b.iter(|| black_box(compose_filter_stack(black_box(&state))));
    });
    group.bench_function("apply_cyberpunk", |b| {
        let stack = compose_filter_stack(&state);
        b.iter(|| black_box(stack.apply(black_box(&source))));
    });
    group.bench_function("stylistic_ops_lookup", |b| {
        b.iter(|| black_box(stylistic_ops(black_box(StylisticFilter::Hdr))));
    });

    group.finish();
}

fn rasterize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize");
    let surface_size = Size::new(800.0, 600.0);
    let bitmap = LoadedBitmap::from_pixels(photo(), Locator::parse("bench/photo.png"));
    let placement = Placement::fit(bitmap.size(), surface_size, 0.8);

    let mut surface = SkiaSurface::new(surface_size, Color::WHITE);
    surface.load_image(bitmap, placement);
    surface.apply_filter_stack(compose_filter_stack(&edited_state()));
    if let Some(image) = surface.main_bounds() {
        if let Some(frame) = frame_overlay(FrameStyle::Ornate, image) {
            surface.add_overlay(Overlay::Frame(frame));
        }
        if let Some(border) =
            border_overlay(BorderStyle::Dashed, BorderWidth::default(), Color::BLACK, image)
        {
            surface.add_overlay(Overlay::Border(border));
        }
    }

    group.bench_function("export_native", |b| {
        let region = surface.content_bounds().expect("content");
        let scale = surface.export_scale().expect("scale");
        b.iter(|| black_box(surface.rasterize(region, scale)));
    });
    group.bench_function("preview", |b| {
        b.iter(|| black_box(surface.render_preview()));
    });

    group.finish();
}

criterion_group!(benches, filter_stack_benchmark, rasterize_benchmark);
criterion_main!(benches);
