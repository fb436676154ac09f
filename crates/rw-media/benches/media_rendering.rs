//! Benchmarks for media directive expansion.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rw_media::{
    Cursor, Escaping, InlineProcessor, Media, MediaExtension, MediaKind, MediaOptions,
    MediaParser, render_media,
};

/// Generate markdown with `directives` media directives spread over paragraphs.
fn generate_markdown(paragraphs: usize, directives: usize) -> String {
    let mut md = String::with_capacity(paragraphs * (120 + directives * 40));
    md.push_str("# Media\n\n");

    for i in 0..paragraphs {
        md.push_str(&format!(
            "Paragraph {i} with **bold** text and a ![plain](img{i}.png) image."
        ));
        for j in 0..directives {
            let flag = ['v', 'a', 'p'][j % 3];
            md.push_str(&format!(" !{flag}[clip {j}](https://example.org/{i}/{j}.bin)"));
        }
        md.push_str("\n\n```\n!v[skipped](code.mp4)\n```\n\n");
    }
    md
}

fn bench_parse_directive(c: &mut Criterion) {
    let parser = MediaParser::new(MediaOptions::default());

    c.bench_function("parse_video_directive", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(black_box("!v[Train](https://x/v.webm) departs"));
            parser.parse_media(&mut cursor)
        });
    });
}

fn bench_render_media(c: &mut Criterion) {
    let options = MediaOptions::default().with_autoplay(true).with_muted(true);
    let media = Media::build(MediaKind::Audio, "Anthem", "a.mp3?x=1&y=2", &options);

    let mut group = c.benchmark_group("render_media");
    for escaping in [Escaping::Double, Escaping::Single] {
        group.bench_with_input(
            BenchmarkId::new("audio", escaping),
            &escaping,
            |b, &escaping| b.iter(|| render_media(black_box(&media), escaping)),
        );
    }
    group.finish();
}

fn bench_convert_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_by_size");

    for (paragraphs, directives) in [(10, 1), (50, 3), (200, 5)] {
        let markdown = generate_markdown(paragraphs, directives);
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("markdown", format!("{paragraphs}p_{directives}d")),
            &markdown,
            |b, md| {
                b.iter(|| {
                    let mut processor =
                        InlineProcessor::new().with_extension(&MediaExtension::with_defaults());
                    processor.convert(md)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_directive,
    bench_render_media,
    bench_convert_by_size
);
criterion_main!(benches);
