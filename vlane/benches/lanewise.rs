use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use vlane::prelude::*;

/// Per-lane reference fold used as the baseline for the dispatched path.
fn scalar_add<const N: usize>(a: &[i32; N], b: &[i32; N]) -> [i32; N] {
    let mut out = [0i32; N];
    for i in 0..N {
        out[i] = a[i].wrapping_add(b[i]);
    }
    out
}

fn bench_lanewise_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanewise_add");

    let a: [i32; 8] = [1, -2, 3, -4, 5, -6, 7, -8];
    let b: [i32; 8] = [10, 20, 30, 40, 50, 60, 70, 80];
    let (va, vb) = (Vector::<i32, 8>::from_array(a), Vector::<i32, 8>::from_array(b));

    group.bench_function("dispatched_i32x8", |bch| {
        bch.iter(|| black_box(va).lanewise(BinaryOp::Add, black_box(vb)))
    });
    group.bench_function("scalar_fold_i32x8", |bch| {
        bch.iter(|| scalar_add(black_box(&a), black_box(&b)))
    });

    // Two lanes never fill a block, so this species always runs lane by lane.
    let (na, nb) = (
        Vector::<i32, 2>::from_array([1, -2]),
        Vector::<i32, 2>::from_array([10, 20]),
    );
    group.bench_function("dispatched_i32x2", |bch| {
        bch.iter(|| black_box(na).lanewise(BinaryOp::Add, black_box(nb)))
    });

    group.finish();
}

fn bench_float_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("float_pipeline");

    let xs = Vector::<f32, 4>::from_array([1.5, -2.25, 3.75, 0.5]);
    let ys = Vector::<f32, 4>::from_array([0.25, 4.0, -1.0, 2.0]);
    let zs = Vector::<f32, 4>::broadcast(0.125);

    group.bench_function("mul_add_f32x4", |bch| {
        bch.iter(|| black_box(xs).lanewise_ternary(TernaryOp::FusedMultiplyAdd, black_box(ys), black_box(zs)))
    });
    group.bench_function("sum_f32x4", |bch| {
        bch.iter(|| black_box(xs).reduce_lanes(ReduceOp::Add))
    });

    group.finish();
}

fn bench_table_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_lookup");

    let table = Vector::<i8, 16>::from_fn(|i| (i as i8).wrapping_mul(3));
    let picks = Vector::<i8, 16>::from_fn(|i| ((i * 7) % 16) as i8);

    group.bench_function("select_from_i8x16", |bch| {
        bch.iter(|| black_box(picks).select_from(black_box(table)))
    });

    let shuffle = Shuffle::<i8, 16>::from_fn(|i| ((i * 5) % 16) as i64);
    group.bench_function("rearrange_i8x16", |bch| {
        bch.iter(|| black_box(table).rearrange(black_box(shuffle)))
    });

    group.finish();
}

fn bench_memory_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_transfer");

    let data: Vec<i32> = (0..1024).collect();
    group.bench_function("from_slice_i32x8", |bch| {
        bch.iter(|| {
            let mut acc = Vector::<i32, 8>::ZERO;
            let mut offset = 0;
            while offset + 8 <= data.len() {
                let v = Vector::<i32, 8>::from_slice(black_box(&data), offset).unwrap();
                acc = acc.lanewise(BinaryOp::Add, v).unwrap();
                offset += 8;
            }
            black_box(acc)
        })
    });

    let image = vec![0u8; 4096];
    group.bench_function("from_bytes_le_i32x4", |bch| {
        bch.iter(|| Vector::<i32, 4>::from_bytes(black_box(&image), 64, ByteOrder::Little))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lanewise_add,
    bench_float_pipeline,
    bench_table_lookup,
    bench_memory_transfer
);
criterion_main!(benches);
