//! Benchmarks for the label layout passes.

use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lunaris_scene::mock::{MockAtlas, MockScene};
use lunaris_text::{GlyphFont, GlyphLabel, HorizontalAlignment, Justify};

/// An ASCII font covering the printable range, 20px advance each.
fn setup_font() -> Arc<GlyphFont> {
    let mut atlas = MockAtlas::new();
    let mut descriptor = String::from("common lineHeight=32\n");
    for id in 32u16..127 {
        atlas.add(&id.to_string(), 18.0, 26.0);
        descriptor.push_str(&format!("char id={} xoffset=0 yoffset=0 xadvance=20\n", id));
    }
    Arc::new(GlyphFont::from_descriptor(&descriptor, &atlas).expect("bench font"))
}

fn bench_content_pass(c: &mut Criterion) {
    let font = setup_font();
    let mut group = c.benchmark_group("content_pass");

    let paragraph = "The quick brown fox jumps over the lazy dog\n".repeat(8);
    let texts: Vec<(&str, &str)> = vec![
        ("single_char", "A"),
        ("single_word", "Hello"),
        ("short_line", "Hello, World!"),
        ("paragraph", &paragraph),
    ];

    for (name, content) in texts {
        group.bench_function(name, |b| {
            let mut scene = MockScene::new();
            let mut label = GlyphLabel::new(&mut scene, "", font.clone(), 2.0);
            let mut flip = false;
            b.iter(|| {
                // Alternate suffixes so every iteration is a real
                // content pass over a warm pool.
                flip = !flip;
                let text = format!("{}{}", content, if flip { "." } else { "!" });
                label.set_text(&mut scene, &text);
                black_box(label.size())
            });
        });
    }

    group.finish();
}

fn bench_justify_pass(c: &mut Criterion) {
    let font = setup_font();
    let mut group = c.benchmark_group("justify_pass");

    let paragraph = "The quick brown fox jumps over the lazy dog\n".repeat(8);
    let mut scene = MockScene::new();
    let mut label = GlyphLabel::new(&mut scene, paragraph.as_str(), font, 2.0);

    group.bench_function("block_alignment", |b| {
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            label.set_horizontal_alignment(if flip {
                HorizontalAlignment::Left
            } else {
                HorizontalAlignment::Right
            });
            black_box(label.quads().len())
        });
    });

    group.bench_function("per_line_justify", |b| {
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            label.set_justify(if flip { Justify::Right } else { Justify::Center });
            black_box(label.quads().len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_content_pass, bench_justify_pass);
criterion_main!(benches);
