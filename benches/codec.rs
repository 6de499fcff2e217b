use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lookml_tree::{build, lookml, render, visit, LookmlMap, Value};

fn view_with_dimensions(count: usize) -> LookmlMap {
    let dimensions = (0..count)
        .map(|i| {
            Value::from(lookml!({
                "name": (format!("field_{}", i)),
                "type": "string",
                "label": (format!("Field {}", i)),
                "sql": (format!("${{TABLE}}.field_{}", i))
            }))
        })
        .collect::<Vec<_>>();

    let mut view = lookml!({
        "name": "events",
        "sql_table_name": "analytics.events",
        "drill_fields": ["id", "created_date", "user_id", "session_id", "event_type"]
    });
    view.insert("dimensions".to_string(), Value::Array(dimensions));

    let mut model = LookmlMap::new();
    model.insert("view".to_string(), Value::Object(view));
    model
}

fn benchmark_build_simple(c: &mut Criterion) {
    let model = lookml!({
        "connection": "warehouse",
        "includes": ["*.view"],
        "explore": { "name": "events", "label": "Events" }
    });

    c.bench_function("build_simple_model", |b| b.iter(|| build(black_box(&model))));
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_view");

    for size in [10, 50, 100, 500].iter() {
        let model = view_with_dimensions(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &model, |b, model| {
            b.iter(|| build(black_box(model)))
        });
    }
    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_view");

    for size in [10, 50, 100, 500].iter() {
        let tree = build(&view_with_dimensions(*size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| render(black_box(tree)))
        });
    }
    group.finish();
}

fn benchmark_visit(c: &mut Criterion) {
    let mut group = c.benchmark_group("visit_view");

    for size in [10, 50, 100, 500].iter() {
        let tree = build(&view_with_dimensions(*size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| visit(black_box(tree)))
        });
    }
    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let model = view_with_dimensions(100);

    c.bench_function("roundtrip_view_100", |b| {
        b.iter(|| {
            let tree = build(black_box(&model)).unwrap();
            visit(&tree).unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_build_simple,
    benchmark_build,
    benchmark_render,
    benchmark_visit,
    benchmark_roundtrip
);
criterion_main!(benches);
