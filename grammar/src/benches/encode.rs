use super::{random_users, users};
use commonware_grammar::Encoder;
use criterion::{black_box, criterion_group, BatchSize, Criterion};

/// Benchmark encoding tables of increasing size.
fn bench_encode(c: &mut Criterion) {
    let grammar = users();
    for count in [10, 1_000, 100_000] {
        let value = random_users(count);
        c.bench_function(&format!("{}/users={}", module_path!(), count), |b| {
            b.iter_batched(
                || value.clone(),
                |value| black_box(grammar.encode::<String>(value).unwrap()),
                BatchSize::LargeInput,
            );
        });
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_encode
}
