use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stencil_parser::parse_style_block;

fn parse_simple_block(c: &mut Criterion) {
    let source = r#"
        padding: 8px 16px;
        background-color: #3366FF;
    "#;

    c.bench_function("parse_simple_block", |b| {
        b.iter(|| parse_style_block(black_box(source)))
    });
}

fn parse_block_with_states(c: &mut Criterion) {
    let source = r#"
        padding: 16px;
        background-color: white;
        border-radius: 8px;
        box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
        font-family: Inter, sans-serif;

        &:hover {
            box-shadow: 0 4px 8px rgba(0, 0, 0, 0.15);
            background-color: #F0F0F0;
        }

        &:focus-visible {
            outline: 2px solid #3366FF;
        }
    "#;

    c.bench_function("parse_block_with_states", |b| {
        b.iter(|| parse_style_block(black_box(source)))
    });
}

fn parse_large_block(c: &mut Criterion) {
    let mut source = String::new();
    for i in 0..200 {
        source.push_str(&format!("margin-top: {}px;\n", i));
        source.push_str(&format!("--token-{}: #FF{:04X};\n", i, i * 100));
    }
    for state in [":hover", ":focus", ":active", ":disabled"] {
        source.push_str(&format!("&{} {{ color: red; width: 50%; }}\n", state));
    }

    c.bench_function("parse_large_block", |b| {
        b.iter(|| parse_style_block(black_box(&source)))
    });
}

fn tokenize_only(c: &mut Criterion) {
    use stencil_parser::tokenize;

    let source = r#"
        padding: 8px 16px;
        background-color: #3366FF;
        &:hover { color: blue; }
    "#;

    c.bench_function("tokenize_only", |b| {
        b.iter(|| tokenize(black_box(source)))
    });
}

criterion_group!(
    benches,
    parse_simple_block,
    parse_block_with_states,
    parse_large_block,
    tokenize_only
);
criterion_main!(benches);
