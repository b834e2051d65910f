use criterion::{Criterion, criterion_group, criterion_main};
use potconf::{ArrayLayout, ConfigTable, ConfigValue, Options};
use std::hint::black_box;

fn make_table(entries: usize) -> ConfigTable {
    let mut t = ConfigTable::new();
    for i in 0..entries {
        if i % 4 == 0 {
            let items = (0..8).map(|j| format!("item {j} \"q\" \\")).collect::<Vec<_>>();
            t.insert(format!("list_{i}"), ConfigValue::Array(items));
        } else {
            t.insert(format!("key_{i}"), format!("value {i}"));
        }
    }
    t
}

pub fn encode_benchmarks(c: &mut Criterion) {
    let table = make_table(1000);
    let mut group = c.benchmark_group("encode");
    group.bench_function("inline", |b| {
        b.iter(|| black_box(potconf::encode_to_string(&table, &Options::default()).unwrap()))
    });
    let multiline = Options {
        array_layout: ArrayLayout::Multiline,
        ..Options::default()
    };
    group.bench_function("multiline", |b| {
        b.iter(|| black_box(potconf::encode_to_string(&table, &multiline).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, encode_benchmarks);
criterion_main!(benches);
