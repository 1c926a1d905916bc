use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graph_insight::{
    extract_features, render_graph, shortest_path, spring_layout, traverse, Edge, EdgeList,
    FeatureSet, GraphClassifier, Highlights, LayoutOptions, RenderOptions, RuleBasedClassifier,
    TraversalAlgorithm,
};

/// Ladder graph: two rails of `n` nodes joined by rungs
fn ladder(n: usize) -> EdgeList {
    let mut edges = Vec::with_capacity(3 * n);
    for i in 0..n {
        edges.push(Edge::new(format!("a{}", i), format!("b{}", i)));
        if i + 1 < n {
            edges.push(Edge::new(format!("a{}", i), format!("a{}", i + 1)));
            edges.push(Edge::new(format!("b{}", i), format!("b{}", i + 1)));
        }
    }
    EdgeList::from(edges)
}

/// Benchmark feature extraction
fn bench_features(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_features");

    for size in [10, 50, 200] {
        let edges = ladder(size);
        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &edges, |b, edges| {
            b.iter(|| black_box(extract_features(edges, FeatureSet::Basic)));
        });
    }

    group.finish();
}

/// Benchmark rule-based classification
fn bench_classify(c: &mut Criterion) {
    let classifier = RuleBasedClassifier::new();
    let edges = ladder(50);

    c.bench_function("classify_rules_ladder_50", |b| {
        b.iter(|| black_box(classifier.classify(&edges).unwrap()));
    });
}

/// Benchmark shortest path and traversal
fn bench_paths(c: &mut Criterion) {
    let edges = ladder(200);

    c.bench_function("shortest_path_ladder_200", |b| {
        b.iter(|| black_box(shortest_path(&edges, "a0", "b199").unwrap()));
    });

    c.bench_function("bfs_ladder_200", |b| {
        b.iter(|| black_box(traverse(&edges, "a0", TraversalAlgorithm::Bfs).unwrap()));
    });
}

/// Benchmark layout and rendering
fn bench_layout(c: &mut Criterion) {
    let edges = ladder(20);
    let options = LayoutOptions::default();

    c.bench_function("spring_layout_ladder_20", |b| {
        b.iter(|| black_box(spring_layout(&edges, &options)));
    });

    let mut group = c.benchmark_group("render");
    group.sample_size(10);
    group.bench_function("png_ladder_20", |b| {
        b.iter(|| {
            black_box(render_graph(&edges, &Highlights::default(), &RenderOptions::default()).unwrap())
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_features,
    bench_classify,
    bench_paths,
    bench_layout
);

criterion_main!(benches);
