#[cfg(test)]
mod tests {
    use zstd_codec_core::context::CompressContext;
    use zstd_codec_core::stream::{CompressStream, StreamState};
    use zstd_codec_core::types::CodecError;

    fn fox_text() -> Vec<u8> {
        "the quick brown fox".repeat(10_000).into_bytes()
    }

    fn compress_all(stream: &mut CompressStream, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        stream.compress(data, |c| out.extend_from_slice(c)).expect("compress");
        stream.complete(|c| out.extend_from_slice(c)).expect("complete");
        out
    }

    #[test]
    fn fox_scenario_shrinks_and_round_trips() {
        let _ = env_logger::builder().is_test(true).try_init();
        let input = fox_text();
        let mut ctx = CompressContext::create().unwrap();
        ctx.set_compression_level(5).unwrap();
        ctx.set_original_size(input.len() as u64).unwrap();

        let mut stream = CompressStream::with_context(ctx).unwrap();
        let frame = compress_all(&mut stream, &input);
        stream.close().unwrap();

        assert!(frame.len() < input.len(), "compressed {} >= input {}", frame.len(), input.len());
        assert_eq!(zstd::stream::decode_all(frame.as_slice()).unwrap(), input);
        assert_eq!(
            zstd_codec_core::engine::frame_content_size(&frame).unwrap(),
            Some(input.len() as u64)
        );
    }

    #[test]
    fn with_original_size_records_content_size() {
        let input = vec![7u8; 50_000];
        let ctx = CompressContext::create().unwrap();
        let mut stream = CompressStream::with_original_size(ctx, input.len() as u64).unwrap();
        let frame = compress_all(&mut stream, &input);

        assert_eq!(
            zstd_codec_core::simple::content_size(&frame).unwrap(),
            Some(50_000)
        );
    }

    #[test]
    fn empty_input_never_calls_sink() {
        let mut stream = CompressStream::with_context(CompressContext::create().unwrap()).unwrap();
        let mut calls = 0;
        stream.compress(&[], |_| calls += 1).unwrap();
        assert_eq!(calls, 0);
    }

    #[test]
    fn complete_without_input_yields_empty_frame() {
        let mut stream = CompressStream::with_context(CompressContext::create().unwrap()).unwrap();
        let mut frame = Vec::new();
        let mut calls = 0;
        stream
            .complete(|c| {
                calls += 1;
                frame.extend_from_slice(c)
            })
            .unwrap();

        assert!(calls >= 1);
        assert!(zstd::stream::decode_all(frame.as_slice()).unwrap().is_empty());
    }

    #[test]
    fn sink_never_receives_empty_chunks() {
        let input: Vec<u8> = (0..600_000u32).map(|i| (i % 251) as u8).collect();
        let mut stream = CompressStream::with_context(CompressContext::create().unwrap()).unwrap();
        let mut chunks: Vec<usize> = Vec::new();
        stream.compress(&input, |c| chunks.push(c.len())).unwrap();
        stream.flush(|c| chunks.push(c.len())).unwrap();
        stream.complete(|c| chunks.push(c.len())).unwrap();

        assert!(!chunks.is_empty());
        assert!(chunks.iter().all(|&n| n > 0));
    }

    #[test]
    fn many_small_calls_round_trip() {
        let input = fox_text();
        let mut stream = CompressStream::with_context(CompressContext::create().unwrap()).unwrap();
        let mut frame = Vec::new();
        for piece in input.chunks(997) {
            stream.compress(piece, |c| frame.extend_from_slice(c)).unwrap();
        }
        stream.complete(|c| frame.extend_from_slice(c)).unwrap();

        assert_eq!(zstd::stream::decode_all(frame.as_slice()).unwrap(), input);
    }

    #[test]
    fn flush_only_frame_has_unknown_content_size() {
        let input = b"flushed but never completed".repeat(100);
        let mut stream = CompressStream::with_context(CompressContext::create().unwrap()).unwrap();
        let mut out = Vec::new();
        stream.compress(&input, |c| out.extend_from_slice(c)).unwrap();
        stream.flush(|c| out.extend_from_slice(c)).unwrap();

        assert!(!out.is_empty(), "flush must emit buffered data");
        assert_eq!(zstd_codec_core::engine::frame_content_size(&out).unwrap(), None);
    }

    #[test]
    fn flushed_output_decodes_to_the_prefix() {
        let first = b"first half, ".repeat(50);
        let second = b"second half".repeat(50);
        let mut stream = CompressStream::with_context(CompressContext::create().unwrap()).unwrap();

        let mut out = Vec::new();
        stream.compress(&first, |c| out.extend_from_slice(c)).unwrap();
        stream.flush(|c| out.extend_from_slice(c)).unwrap();

        let mut decoded = Vec::new();
        let mut dstream = zstd_codec_core::stream::DecompressStream::with_context(
            zstd_codec_core::context::DecompressContext::create().unwrap(),
        )
        .unwrap();
        dstream.decompress(&out, |c| decoded.extend_from_slice(c)).unwrap();
        assert_eq!(decoded, first);

        stream.compress(&second, |c| out.extend_from_slice(c)).unwrap();
        stream.complete(|c| out.extend_from_slice(c)).unwrap();
        let mut expected = first.clone();
        expected.extend_from_slice(&second);
        assert_eq!(zstd::stream::decode_all(out.as_slice()).unwrap(), expected);
    }

    #[test]
    fn pledge_mismatch_is_an_engine_error() {
        let mut ctx = CompressContext::create().unwrap();
        ctx.set_original_size(100).unwrap();
        let mut stream = CompressStream::with_context(ctx).unwrap();

        let mut sink = |_: &[u8]| {};
        let outcome = match stream.compress(&[1u8; 10], &mut sink) {
            Ok(()) => stream.complete(&mut sink),
            Err(e) => Err(e),
        };

        match outcome {
            Err(CodecError::Engine { code, message }) => {
                assert!(code.is_some());
                assert!(message.starts_with("op=compress_stream("), "{}", message);
            }
            other => panic!("expected engine error, got {:?}", other),
        }
    }

    #[test]
    fn close_is_terminal_and_idempotent() {
        let mut stream = CompressStream::with_context(CompressContext::create().unwrap()).unwrap();
        assert_eq!(stream.state(), StreamState::Active);
        assert!(stream.close().is_ok());
        assert!(stream.close().is_ok());
        assert_eq!(stream.state(), StreamState::Closed);

        assert!(matches!(stream.compress(b"x", |_| {}), Err(CodecError::Closed(_))));
        assert!(matches!(stream.flush(|_| {}), Err(CodecError::Closed(_))));
        assert!(matches!(stream.complete(|_| {}), Err(CodecError::Closed(_))));
    }

    #[test]
    fn stream_from_closed_context_fails() {
        let mut ctx = CompressContext::create().unwrap();
        ctx.close().unwrap();
        assert!(matches!(CompressStream::with_context(ctx), Err(CodecError::Closed(_))));
    }

    #[test]
    fn second_frame_after_complete() {
        let mut stream = CompressStream::with_context(CompressContext::create().unwrap()).unwrap();
        let mut out = Vec::new();
        stream.compress(b"frame one ", |c| out.extend_from_slice(c)).unwrap();
        stream.complete(|c| out.extend_from_slice(c)).unwrap();
        stream.compress(b"frame two", |c| out.extend_from_slice(c)).unwrap();
        stream.complete(|c| out.extend_from_slice(c)).unwrap();

        assert_eq!(stream.counters().frames_completed, 2);
        assert_eq!(
            zstd::stream::decode_all(out.as_slice()).unwrap(),
            b"frame one frame two".to_vec()
        );
    }

    #[test]
    fn counters_track_sink_traffic() {
        let input = fox_text();
        let mut stream = CompressStream::with_context(CompressContext::create().unwrap()).unwrap();
        let mut total = 0usize;
        let mut calls = 0u64;
        stream
            .compress(&input, |c| {
                total += c.len();
                calls += 1
            })
            .unwrap();
        stream
            .complete(|c| {
                total += c.len();
                calls += 1
            })
            .unwrap();

        let counters = stream.counters();
        assert_eq!(counters.bytes_in, input.len() as u64);
        assert_eq!(counters.bytes_out, total as u64);
        assert_eq!(counters.chunks_out, calls);
        assert_eq!(counters.frames_completed, 1);
        assert!(counters.ratio() < 1.0);
    }
}
