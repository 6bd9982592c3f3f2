use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stencil_template::{compile, AuthorNode, RawValue};

fn card(index: usize) -> AuthorNode {
    AuthorNode::component("Box")
        .attr("data-index", index as i64)
        .style(
            r#"
                padding: 16px;
                border-radius: 8px;
                &:hover { background-color: #F0F0F0; }
            "#,
        )
        .child(
            AuthorNode::component("Heading")
                .attr("tag", "h2")
                .child(AuthorNode::placeholder("Card title")),
        )
        .child(
            AuthorNode::component("Link")
                .attr("href", RawValue::page("pageId"))
                .attr("data-label", RawValue::expression("$ws$dataSource$title"))
                .child("Read more"),
        )
        .into()
}

fn compile_small_tree(c: &mut Criterion) {
    let tree: AuthorNode = AuthorNode::component("Body")
        .child(AuthorNode::component("Box"))
        .child(AuthorNode::component("Box"))
        .into();

    c.bench_function("compile_small_tree", |b| b.iter(|| compile(black_box(&tree))));
}

fn compile_card_grid(c: &mut Criterion) {
    let tree: AuthorNode = AuthorNode::component("Body")
        .style("display: grid; gap: 1rem;")
        .children((0..100).map(card))
        .into();

    c.bench_function("compile_card_grid_100", |b| {
        b.iter(|| compile(black_box(&tree)))
    });
}

criterion_group!(benches, compile_small_tree, compile_card_grid);
criterion_main!(benches);
