use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use zstd_codec_core::context::{CompressContext, DecompressContext};
use zstd_codec_core::stream::{CompressStream, DecompressStream};

fn sample(len: usize) -> Vec<u8> {
    b"streaming compression benchmark payload, mildly repetitive. "
        .iter()
        .cycle()
        .take(len)
        .copied()
        .collect()
}

fn compress_frame(data: &[u8], level: i32) -> Vec<u8> {
    let mut ctx = CompressContext::create().unwrap();
    ctx.set_compression_level(level).unwrap();
    let mut stream = CompressStream::with_original_size(ctx, data.len() as u64).unwrap();
    let mut out = Vec::new();
    stream.compress(data, |c| out.extend_from_slice(c)).unwrap();
    stream.complete(|c| out.extend_from_slice(c)).unwrap();
    out
}

fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream");
    for &len in &[64 * 1024, 1024 * 1024, 8 * 1024 * 1024] {
        let data = sample(len);
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("compress_l3", len), &data, |b, data| {
            b.iter(|| black_box(compress_frame(data, 3)))
        });

        let frame = compress_frame(&data, 3);
        group.bench_with_input(BenchmarkId::new("decompress", len), &frame, |b, frame| {
            b.iter(|| {
                let mut stream =
                    DecompressStream::with_context(DecompressContext::create().unwrap()).unwrap();
                let mut total = 0usize;
                stream.decompress(frame, |c| total += c.len()).unwrap();
                black_box(total)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_stream);
criterion_main!(benches);
