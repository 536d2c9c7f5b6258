use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming_ecc::cs::ecc::bits::flip;
use hamming_ecc::cs::ecc::HammingCode;
use num_bigint::{BigUint, RandBigInt};
use rand::{rngs::StdRng, SeedableRng};

fn random_data(code: &HammingCode) -> BigUint {
    let mut rng = StdRng::seed_from_u64(42);
    rng.gen_biguint(code.data_bits())
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_encode");
    for parity_bits in [4u32, 8, 12] {
        let code = HammingCode::new(parity_bits).unwrap();
        let data = random_data(&code);

        group.bench_with_input(
            BenchmarkId::from_parameter(parity_bits),
            &data,
            |b, data| b.iter(|| code.encode(black_box(data)).unwrap()),
        );
    }
    group.finish();
}

fn bench_decode_with_error(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_decode_with_error");
    for parity_bits in [4u32, 8, 12] {
        let code = HammingCode::new(parity_bits).unwrap();
        let encoded = code.encode(&random_data(&code)).unwrap();
        let corrupted = flip(code.total_bits() / 2, &encoded).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(parity_bits),
            &corrupted,
            |b, corrupted| b.iter(|| code.decode(black_box(corrupted)).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode_with_error);
criterion_main!(benches);
