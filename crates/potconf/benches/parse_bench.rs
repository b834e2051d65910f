use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn make_scalars(entries: usize) -> String {
    let mut s = String::from("# generated\n");
    for i in 0..entries {
        s.push_str(&format!("key_{i}=\"value {i} with = sign\"\n"));
    }
    s
}

fn make_arrays(entries: usize, elements: usize) -> String {
    let mut s = String::new();
    for i in 0..entries {
        s.push_str(&format!("list_{i}=[\n"));
        for j in 0..elements {
            s.push_str(&format!("    \"elem {j} \\\"quoted\\\"\",\n"));
        }
        s.push_str("]\n");
    }
    s
}

pub fn parse_benchmarks(c: &mut Criterion) {
    let cases = vec![
        ("scalars_1k", make_scalars(1000)),
        ("arrays_100x20", make_arrays(100, 20)),
    ];
    let mut group = c.benchmark_group("parse");
    for (name, input) in cases {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(name, |b| {
            b.iter_batched(
                || input.clone(),
                |s| black_box(potconf::parse_str(&s).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, parse_benchmarks);
criterion_main!(benches);
