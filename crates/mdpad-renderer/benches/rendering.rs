//! Benchmarks for markdown rendering throughput.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mdpad_renderer::MarkdownRenderer;

/// Generate markdown with sections, paragraphs and one table per section.
fn generate_markdown(sections: usize, paragraphs_per_section: usize) -> String {
    let mut md = String::with_capacity(sections * 400 + sections * paragraphs_per_section * 100);
    md.push_str("# Document Title\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        for j in 0..paragraphs_per_section {
            md.push_str(&format!(
                "Paragraph {j} in section {i} has **bold**, *italic* and `code`.\n\n"
            ));
        }
        md.push_str("| Key | Value |\n|-----|-------|\n");
        md.push_str(&format!("| section | {i} |\n| items | {paragraphs_per_section} |\n\n"));
        md.push_str("- first\n- second\n\n");
    }
    md
}

fn bench_render_simple(c: &mut Criterion) {
    let renderer = MarkdownRenderer::new();

    c.bench_function("render_simple_markdown", |b| {
        b.iter(|| renderer.render(black_box("# Hello\n\nSimple content.")));
    });
}

fn bench_render_code_blocks(c: &mut Criterion) {
    let markdown = r#"# Code Examples

```rust
fn main() {
    let x = 42;
    println!("{}", x * 2);
}
```

```python
def greet(name):
    return f"Hello, {name}!"
```
"#;
    let renderer = MarkdownRenderer::new();

    c.bench_function("render_code_blocks", |b| {
        b.iter(|| renderer.render(black_box(markdown)));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let renderer = MarkdownRenderer::new();
    let mut group = c.benchmark_group("render_by_size");

    for (sections, paragraphs) in [(5, 2), (20, 3), (100, 5)] {
        let markdown = generate_markdown(sections, paragraphs);

        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("markdown", format!("{sections}s_{paragraphs}p")),
            &markdown,
            |b, md| b.iter(|| renderer.render(md)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_simple,
    bench_render_code_blocks,
    bench_render_varying_sizes,
);
criterion_main!(benches);
