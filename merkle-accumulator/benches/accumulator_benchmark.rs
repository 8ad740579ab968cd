use std::hint::black_box;

use batch_merkle_accumulator::{
    Blake3Hasher, CryptoHash, Keccak256Hasher, MerkleAccumulator, verify_inclusion,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

/// Deterministic batch of `count` leaves.
fn batch(count: usize) -> Vec<CryptoHash> {
    (0..count as u64)
        .map(|i| *blake3::hash(&i.to_be_bytes()).as_bytes())
        .collect()
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("accumulator construction");
        for size in [16usize, 256, 4096] {
            let leaves = batch(size);
            group.bench_with_input(BenchmarkId::new("blake3", size), &leaves, |b, leaves| {
                b.iter(|| MerkleAccumulator::<Blake3Hasher>::from_leaves(black_box(leaves)))
            });
            group.bench_with_input(BenchmarkId::new("keccak256", size), &leaves, |b, leaves| {
                b.iter(|| MerkleAccumulator::<Keccak256Hasher>::from_leaves(black_box(leaves)))
            });
        }
    }

    c.bench_function("accumulator proof generation (256 leaves)", |b| {
        let tree = MerkleAccumulator::<Blake3Hasher>::new(batch(256)).expect("batch");
        let mut index = 0usize;
        b.iter(|| {
            index = (index + 97) % 256;
            tree.get_proof(black_box(index)).expect("index in range")
        });
    });

    c.bench_function("accumulator proof verification (256 leaves)", |b| {
        let leaves = batch(256);
        let tree = MerkleAccumulator::<Blake3Hasher>::from_leaves(&leaves).expect("batch");
        let root = tree.root();
        let proofs: Vec<_> = tree.proofs().collect();
        let mut index = 0usize;
        b.iter(|| {
            index = (index + 97) % 256;
            let proof = &proofs[index];
            assert!(verify_inclusion::<Blake3Hasher>(
                &leaves[index],
                index,
                proof.siblings(),
                &root
            ));
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench
);
criterion_main!(benches);
