use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gistrs::{has_article_content, Extractor};
use scraper::Html;

fn paragraph(i: usize) -> String {
    format!(
        "<p>Paragraph {i} of the report describes what happened in some detail, \
         with enough words to look like real prose for the heuristics.</p>"
    )
}

/// Synthetic pages, one per strategy the cascade can end on.
fn build_pages(paragraphs: usize) -> Vec<(&'static str, String)> {
    let body: String = (0..paragraphs).map(paragraph).collect();
    let chrome = r#"<nav><a href="/">Home</a><a href="/a">About</a></nav>
        <footer class="site-footer"><p>Contact us</p></footer>"#;

    vec![
        (
            "known_container",
            format!("<html><body>{chrome}<article>{body}</article></body></html>"),
        ),
        (
            "largest_block",
            format!(
                "<html><body>{chrome}<div class=\"sidebar\">{body}</div><div>{body}</div></body></html>"
            ),
        ),
        (
            "paragraph_salvage",
            format!("<html><body>{chrome}{body}</body></html>"),
        ),
    ]
}

fn bench_extract_by_strategy(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let extractor = Extractor::default();

    for (name, html) in build_pages(40) {
        let document = Html::parse_document(&html);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("doc", name), &document, |b, document| {
            b.iter(|| std::hint::black_box(extractor.extract(document.root_element())));
        });
    }

    group.finish();
}

fn bench_parse_and_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_and_extract");
    let extractor = Extractor::default();

    for size in [10, 100, 500] {
        let (_, html) = build_pages(size).swap_remove(1);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("paragraphs", size), &html, |b, html| {
            b.iter(|| std::hint::black_box(extractor.extract_html(std::hint::black_box(html))));
        });
    }

    group.finish();
}

fn bench_eligibility_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("eligibility");
    let (_, html) = build_pages(100).swap_remove(2);
    let document = Html::parse_document(&html);

    group.bench_function("has_article_content", |b| {
        b.iter(|| std::hint::black_box(has_article_content(document.root_element(), None)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_extract_by_strategy,
    bench_parse_and_extract,
    bench_eligibility_check
);
criterion_main!(benches);
