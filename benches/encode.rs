use bitvec::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use secded::SecDedCode;

fn random_message(rng: &mut StdRng, len: usize) -> BitVec<u8, Msb0> {
    let mut bits = bitvec![u8, Msb0; 0; len];
    for k in 0..len {
        bits.set(k, rng.gen_bool(0.5));
    }
    bits
}

fn bench_encode(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("secded_encode");

    for &width in &[8usize, 32, 64, 247] {
        let code = SecDedCode::new(width).unwrap();
        let message = random_message(&mut rng, width);
        group.bench_function(format!("width_{}", width), |b| {
            b.iter(|| code.encode(black_box(&message)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
