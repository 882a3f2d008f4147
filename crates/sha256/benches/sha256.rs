use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sha256::{Digest as _, Sha256, digest, digest_reader};

fn inputs() -> Vec<(usize, Vec<u8>)> {
  // Padding edges, one block, and large throughput.
  let sizes = [0usize, 3, 55, 56, 64, 65, 1024, 16 * 1024, 1024 * 1024];
  sizes
    .into_iter()
    .map(|len| {
      let mut v = vec![0u8; len];
      for (i, b) in v.iter_mut().enumerate() {
        *b = (i as u8).wrapping_mul(31).wrapping_add(7);
      }
      (len, v)
    })
    .collect()
}

fn oneshot(c: &mut Criterion) {
  let inputs = inputs();
  let mut group = c.benchmark_group("sha256/oneshot");

  for (len, data) in &inputs {
    group.throughput(Throughput::Bytes(*len as u64));

    group.bench_with_input(BenchmarkId::new("framer", len), data, |b, d| b.iter(|| black_box(digest(black_box(d)))));
    group.bench_with_input(BenchmarkId::new("sha2", len), data, |b, d| {
      b.iter(|| {
        use sha2::Digest as _;
        black_box(sha2::Sha256::digest(black_box(d)))
      })
    });
  }

  group.finish();
}

fn streaming(c: &mut Criterion) {
  let mut group = c.benchmark_group("sha256/streaming");
  let data = vec![0u8; 1024 * 1024];
  group.throughput(Throughput::Bytes(data.len() as u64));

  group.bench_function("hasher/64B-chunks", |b| {
    b.iter(|| {
      let mut h = Sha256::new();
      for chunk in black_box(&data).chunks(64) {
        h.update(chunk);
      }
      black_box(h.finalize())
    })
  });

  group.bench_function("hasher/1000B-chunks", |b| {
    b.iter(|| {
      let mut h = Sha256::new();
      for chunk in black_box(&data).chunks(1000) {
        h.update(chunk);
      }
      black_box(h.finalize())
    })
  });

  group.bench_function("reader", |b| {
    b.iter(|| black_box(digest_reader(std::io::Cursor::new(black_box(&data)))))
  });

  group.finish();
}

criterion_group!(benches, oneshot, streaming);
criterion_main!(benches);
