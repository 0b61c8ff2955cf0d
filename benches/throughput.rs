//! Criterion benchmarks for the pre-stream pipeline and the emission path.
//!
//! Run with:
//!   cargo bench --bench throughput
//!
//! The write loop itself is unbounded, so emission is measured as timed
//! bursts into /dev/null rather than through `emit::run`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use fyes::line::build_line;
use fyes::tile;

fn argv(args: &[&str]) -> Vec<Vec<u8>> {
    args.iter().map(|a| a.as_bytes().to_vec()).collect()
}

fn bench_build_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_line");

    for &(name, count, len) in &[("few_short", 4usize, 8usize), ("many_short", 400, 8), ("few_long", 4, 4096)] {
        let arg = "x".repeat(len);
        let args: Vec<&str> = std::iter::repeat(arg.as_str()).take(count).collect();
        let argv = argv(&args);
        let bytes = (len + 1) * count;
        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::new("join", name), &argv, |b, argv| {
            b.iter(|| build_line(argv, None))
        });
    }

    group.finish();
}

fn bench_tile_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile_fill");

    for &line_len in &[2usize, 12, 100, 4096] {
        let mut line = vec![b'q'; line_len - 1];
        line.push(b'\n');
        group.throughput(Throughput::Bytes(
            fyes::config::WRITE_BUF_CAPACITY as u64,
        ));
        group.bench_with_input(BenchmarkId::new("fill", line_len), &line, |b, line| {
            b.iter(|| tile::fill(line).unwrap())
        });
    }

    group.finish();
}

#[cfg(unix)]
fn bench_devnull_emission(c: &mut Criterion) {
    use std::fs::OpenOptions;
    use std::os::unix::io::AsRawFd;

    use fyes::emit::write_all;

    let devnull = OpenOptions::new()
        .write(true)
        .open("/dev/null")
        .expect("open /dev/null");
    let fd = devnull.as_raw_fd();

    let line = b"y\n";
    let payload = tile::fill(line).unwrap();

    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("devnull_one_buffer", |b| {
        b.iter(|| write_all(fd, &payload))
    });
    group.finish();
}

#[cfg(not(unix))]
fn bench_devnull_emission(_c: &mut Criterion) {}

criterion_group!(
    benches,
    bench_build_line,
    bench_tile_fill,
    bench_devnull_emission
);
criterion_main!(benches);
