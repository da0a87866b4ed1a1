use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ntclose::{run, Closer, Options};

/// Generate `n_predicates` disjoint chains of `chain_len` hops each.
/// Chains are the worst case for ancestor propagation: every prefix of a
/// chain derives an edge to every later node.
fn generate_chains(n_predicates: usize, chain_len: usize) -> String {
    let mut doc = String::new();
    for p in 0..n_predicates {
        for i in 0..chain_len {
            doc.push_str(&format!(
                "<http://example.org/node/{i}> <http://example.org/pred/{p}> <http://example.org/node/{next}> .\n",
                next = i + 1
            ));
        }
    }
    doc
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for n in [1_000, 10_000] {
        let doc = generate_chains(20, n / 20);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &doc, |b, doc| {
            b.iter(|| {
                let mut closer = Closer::new(Options::default());
                closer.load(doc.as_bytes()).unwrap();
                closer.num_relations()
            });
        });
    }
    group.finish();
}

fn bench_close(c: &mut Criterion) {
    let mut group = c.benchmark_group("close");
    for chain_len in [16, 64, 256] {
        let doc = generate_chains(4, chain_len);
        group.throughput(Throughput::Elements((4 * chain_len) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(chain_len), &doc, |b, doc| {
            b.iter(|| {
                let mut out = Vec::new();
                run(doc.as_bytes(), &mut out, Options::default()).unwrap();
                out.len()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_close);
criterion_main!(benches);
