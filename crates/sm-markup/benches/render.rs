//! Benchmarks for document rendering performance.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sm_markup::{HtmlHandler, TextParser};

/// Generate a plain-text document with the given structure.
fn generate_document(sections: usize, paragraphs_per_section: usize) -> String {
    let mut text = String::with_capacity(sections * paragraphs_per_section * 120);
    text.push_str("Generated Document\n\n");

    for i in 0..sections {
        text.push_str(&format!("Section {i}\n\n"));
        for j in 0..paragraphs_per_section {
            text.push_str(&format!(
                "Paragraph {j} of section {i}, with a link to https://example.org/{i}/{j} \
                 and some *emphasis* sprinkled in, padded to a realistic prose length:\n\n"
            ));
        }
        text.push_str("- first point\n\n- second point\n\n- third point\n\n");
    }
    text
}

fn render(text: &str) -> String {
    let mut handler = HtmlHandler::new();
    TextParser::new().parse(text, &mut handler);
    handler.into_html()
}

fn bench_render_simple(c: &mut Criterion) {
    let text = "Hello\n\nA single paragraph of entirely unremarkable content:";
    c.bench_function("render_simple_document", |b| b.iter(|| render(text)));
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_by_size");

    for (sections, paragraphs) in [(5, 2), (20, 3), (50, 5)] {
        let text = generate_document(sections, paragraphs);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("document", format!("{sections}s_{paragraphs}p")),
            &text,
            |b, text| b.iter(|| render(text)),
        );
    }

    group.finish();
}

fn bench_render_list_heavy(c: &mut Criterion) {
    let mut text = String::from("Checklist\n\n");
    for i in 0..500 {
        text.push_str(&format!("- item number {i}\n\n"));
    }

    let mut group = c.benchmark_group("render_lists");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("500_items", |b| b.iter(|| render(&text)));
    group.finish();
}

criterion_group!(
    benches,
    bench_render_simple,
    bench_render_varying_sizes,
    bench_render_list_heavy
);
criterion_main!(benches);
