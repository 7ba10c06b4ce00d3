use proptest::prelude::*;

use zstd_codec_core::context::{CompressContext, DecompressContext};
use zstd_codec_core::stream::{CompressStream, DecompressStream};

fn compress_in_steps(data: &[u8], step: usize, level: i32) -> Vec<u8> {
    let mut ctx = CompressContext::create().unwrap();
    ctx.set_compression_level(level).unwrap();
    let mut stream = CompressStream::with_context(ctx).unwrap();

    let mut out = Vec::new();
    for piece in data.chunks(step) {
        stream.compress(piece, |c| out.extend_from_slice(c)).unwrap();
    }
    stream.complete(|c| out.extend_from_slice(c)).unwrap();
    out
}

fn decompress_in_steps(frame: &[u8], step: usize) -> Vec<u8> {
    let mut stream = DecompressStream::with_context(DecompressContext::create().unwrap()).unwrap();
    let mut out = Vec::new();
    for piece in frame.chunks(step) {
        stream.decompress(piece, |c| out.extend_from_slice(c)).unwrap();
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn chunked_round_trip(
        data in proptest::collection::vec(any::<u8>(), 0..20_000),
        step in 1usize..4_096,
        dstep in 1usize..512,
        level in 1i32..10,
    ) {
        let frame = compress_in_steps(&data, step, level);
        prop_assert_eq!(decompress_in_steps(&frame, dstep), data.clone());
        prop_assert_eq!(zstd::stream::decode_all(frame.as_slice()).unwrap(), data);
    }

    #[test]
    fn repetitive_input_round_trip(
        unit in proptest::collection::vec(any::<u8>(), 1..64),
        repeats in 1usize..2_000,
        step in 1usize..8_192,
    ) {
        let data = unit.repeat(repeats);
        let frame = compress_in_steps(&data, step, 3);
        prop_assert_eq!(decompress_in_steps(&frame, frame.len().max(1)), data);
    }
}
