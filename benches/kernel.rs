use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use bitsim::{BitVector, UnsignedInt};
use quadvec::QuadBitVector;
use quadvec::kernel::*;

const LHS: u64 = 0x1122334455667788;
const RHS: u64 = 0x0f1e2d3c4b5a6978;

fn setup_quad(width: usize) -> (QuadBitVector, QuadBitVector) {
    (
        QuadBitVector::from_u64(width, LHS),
        QuadBitVector::from_u64(width, RHS),
    )
}

fn setup_unknown(width: usize) -> (QuadBitVector, QuadBitVector) {
    let (lhs, mut rhs) = setup_quad(width);
    rhs.set(width / 2, quadvec::QuadValue::X);
    (lhs, rhs)
}

fn setup_typed() -> (UnsignedInt, UnsignedInt) {
    (
        UnsignedInt::from_u64(64, LHS),
        UnsignedInt::from_u64(64, RHS),
    )
}

pub fn quad_kernel(c: &mut Criterion) {
    c.bench_function("add_64", |b| {
        b.iter_batched(
            || setup_quad(64),
            |(lhs, rhs)| add_general_width_bv(&lhs, &rhs),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("add_256", |b| {
        b.iter_batched(
            || setup_quad(256),
            |(lhs, rhs)| add_general_width_bv(&lhs, &rhs),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("sub_64", |b| {
        b.iter_batched(
            || setup_quad(64),
            |(lhs, rhs)| sub_general_width_bv(&lhs, &rhs),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("mul_64", |b| {
        b.iter_batched(
            || setup_quad(64),
            |(lhs, rhs)| mul_general_width_bv(&lhs, &rhs),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("and_64", |b| {
        b.iter_batched(
            || setup_quad(64),
            |(lhs, rhs)| land(&lhs, &rhs),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("and_64_unknown", |b| {
        b.iter_batched(
            || setup_unknown(64),
            |(lhs, rhs)| land(&lhs, &rhs),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("hex_string_256", |b| {
        b.iter_batched(
            || setup_quad(256).0,
            |value| value.hex_string(),
            BatchSize::SmallInput,
        )
    });
}

pub fn native_fast_path(c: &mut Criterion) {
    c.bench_function("typed_add_64", |b| {
        b.iter_batched(
            setup_typed,
            |(lhs, rhs)| lhs + rhs,
            BatchSize::SmallInput,
        )
    });

    c.bench_function("typed_mul_64", |b| {
        b.iter_batched(
            setup_typed,
            |(lhs, rhs)| lhs * rhs,
            BatchSize::SmallInput,
        )
    });

    c.bench_function("bit_vector_mul_256", |b| {
        b.iter_batched(
            || {
                (
                    BitVector::from_u64(256, LHS),
                    BitVector::from_u64(256, RHS),
                )
            },
            |(lhs, rhs)| lhs.wrapping_mul(&rhs),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, quad_kernel, native_fast_path);
criterion_main!(benches);
