use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use yamlbuddy::Value;

fn wide_mapping(rows: usize, keys: usize) -> Value {
    let mut arr = Vec::with_capacity(rows);
    for i in 0..rows {
        let row: Value = (0..keys).map(|k| (format!("k{}", k), (i + k) as i64)).collect();
        arr.push(row);
    }
    [("rows", Value::Sequence(arr))].into_iter().collect()
}

fn nested_mapping(depth: usize, breadth: usize) -> Value {
    fn rec(d: usize, b: usize) -> Value {
        if d == 0 { return Value::from(1i64); }
        (0..b).map(|i| (format!("k{}", i), rec(d - 1, b))).collect()
    }
    rec(depth, breadth)
}

fn deep_sequence(depth: usize) -> Value {
    let mut v = Value::Null;
    for _ in 0..depth { v = Value::Sequence(vec![v]); }
    v
}

pub fn normalize_benchmarks(c: &mut Criterion) {
    let cases = [
        ("wide_1k", wide_mapping(1000, 4)),
        ("nested", nested_mapping(4, 4)),
        ("deep_2k", deep_sequence(2_000)),
    ];
    let mut group = c.benchmark_group("normalize");
    for (name, v) in cases {
        group.bench_function(name, |b| {
            b.iter(|| black_box(yamlbuddy::normalize(black_box(&v)).unwrap()))
        });
        group.bench_function(format!("into_normalized::{name}"), |b| {
            b.iter_batched(
                || v.clone(),
                |vv| black_box(vv.into_normalized().unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, normalize_benchmarks);
criterion_main!(benches);
