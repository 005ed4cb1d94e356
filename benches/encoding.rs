use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use toon_encoder::{encode, node, to_node, to_string, Delimiter, EncodeOptions, Encoder, Node};

#[derive(Serialize, Clone)]
struct Component {
    name: String,
    file: String,
    props: u32,
    exported: bool,
}

#[derive(Serialize, Clone)]
struct Route {
    path: String,
    methods: Vec<String>,
}

fn components(size: u32) -> Vec<Component> {
    (0..size)
        .map(|i| Component {
            name: format!("Component{}", i),
            file: format!("src/components/Component{}.tsx", i),
            props: i % 7,
            exported: i % 2 == 0,
        })
        .collect()
}

fn benchmark_encode_simple(c: &mut Criterion) {
    let tree = node!({
        "framework": "react",
        "entry": "src/main.tsx",
        "stats": { "totalComponents": 12, "totalHooks": 4 }
    });

    c.bench_function("encode_simple_mapping", |b| b.iter(|| encode(black_box(&tree))));
}

fn benchmark_tabular(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_tabular");

    for size in [10, 50, 100, 500].iter() {
        let tree = to_node(&components(*size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| encode(black_box(tree)))
        });
    }
    group.finish();
}

fn benchmark_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_list");

    for size in [10, 100].iter() {
        let routes: Vec<Route> = (0..*size)
            .map(|i| Route {
                path: format!("/api/resource{}", i),
                methods: vec!["GET".to_string(), "POST".to_string()],
            })
            .collect();
        let tree = to_node(&routes).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| encode(black_box(tree)))
        });
    }
    group.finish();
}

fn benchmark_primitive_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitive_array");

    let numbers: Node = (0..100i64).map(Node::from).collect();
    let strings: Node = (0..100).map(|i| Node::from(format!("file{}.ts", i))).collect();
    let ambiguous: Node = (0..100).map(|i| Node::from(i.to_string())).collect();

    group.bench_function("integers", |b| b.iter(|| encode(black_box(&numbers))));
    group.bench_function("plain_strings", |b| b.iter(|| encode(black_box(&strings))));
    group.bench_function("quoted_strings", |b| {
        b.iter(|| encode(black_box(&ambiguous)))
    });

    group.finish();
}

fn benchmark_delimiters(c: &mut Criterion) {
    let mut group = c.benchmark_group("delimiters");
    let tree = to_node(&components(100)).unwrap();

    for delimiter in [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe] {
        let encoder = Encoder::new(EncodeOptions::new().with_delimiter(delimiter));
        group.bench_function(delimiter.to_string(), |b| {
            b.iter(|| encoder.encode(black_box(&tree)))
        });
    }
    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let data = components(50);
    let mut group = c.benchmark_group("comparison");

    group.bench_function("toon", |b| b.iter(|| to_string(black_box(&data))));
    group.bench_function("json", |b| {
        b.iter(|| serde_json::to_string(black_box(&data)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_simple,
    benchmark_tabular,
    benchmark_list,
    benchmark_primitive_array,
    benchmark_delimiters,
    benchmark_comparison_with_json
);
criterion_main!(benches);
