#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use regex::bytes::{NoExpand, Regex};
use txtscan::{is_whitespace, linelize, space_swap};

const SAMPLE: &[u8] = b"  \nline-a\t\x0B\n\nline-b\n\nline-c\nline-d\t\x0B\n\nline-en\n";
const REPLACEMENT: &str = "––";

/// Deterministically repeat `SAMPLE` until the payload reaches `target_len`.
fn make_payload(target_len: usize) -> Vec<u8> {
    SAMPLE.iter().copied().cycle().take(target_len).collect()
}

/// Same transform, letting the output grow as it goes.
fn space_swap_growing(buf: &[u8], replacement: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut in_run = false;
    for &b in buf {
        if is_whitespace(b) {
            if !in_run {
                out.extend_from_slice(replacement);
            }
            in_run = true;
        } else {
            out.push(b);
            in_run = false;
        }
    }
    out
}

fn bench_space_swap(c: &mut Criterion) {
    let re = Regex::new(r"[ \t\n\x0B\x0C\r]+").unwrap();
    let replacement = REPLACEMENT.as_bytes();
    let expected = re.replace_all(SAMPLE, NoExpand(replacement)).into_owned();
    assert_eq!(space_swap(SAMPLE, replacement), expected);
    assert_eq!(space_swap_growing(SAMPLE, replacement), expected);

    let mut group = c.benchmark_group("space_swap");
    for size in [SAMPLE.len(), 4 * 1024, 256 * 1024] {
        let payload = make_payload(size);
        group.bench_with_input(BenchmarkId::new("presized", size), &payload, |b, p| {
            b.iter(|| space_swap(black_box(p), black_box(replacement)));
        });
        group.bench_with_input(BenchmarkId::new("growing", size), &payload, |b, p| {
            b.iter(|| space_swap_growing(black_box(p), black_box(replacement)));
        });
        group.bench_with_input(BenchmarkId::new("regex", size), &payload, |b, p| {
            b.iter(|| re.replace_all(black_box(p), NoExpand(replacement)).into_owned());
        });
    }
    group.finish();
}

fn bench_linelize(c: &mut Criterion) {
    let mut group = c.benchmark_group("linelize");
    for size in [4 * 1024, 256 * 1024] {
        let payload = make_payload(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &payload, |b, p| {
            b.iter(|| linelize(black_box(p)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_space_swap, bench_linelize);
criterion_main!(benches);
