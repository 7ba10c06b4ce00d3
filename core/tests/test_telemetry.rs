#[cfg(test)]
mod telemetry_counter_tests {
    use zstd_codec_core::telemetry::StreamCounters;

    fn make_counters() -> StreamCounters {
        StreamCounters {
            bytes_in: 1_000,
            bytes_out: 250,
            chunks_out: 3,
            frames_completed: 1,
        }
    }

    #[test]
    fn default_is_zeroed() {
        let counters = StreamCounters::default();
        assert_eq!(counters.bytes_in, 0);
        assert_eq!(counters.ratio(), 0.0);
    }

    #[test]
    fn add_methods_accumulate() {
        let mut counters = StreamCounters::default();
        counters.add_input(100);
        counters.add_output(40);
        counters.add_output(10);
        counters.add_frame();

        assert_eq!(counters.bytes_in, 100);
        assert_eq!(counters.bytes_out, 50);
        assert_eq!(counters.chunks_out, 2);
        assert_eq!(counters.frames_completed, 1);
        assert!((counters.ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn merge_and_add_assign_agree() {
        let mut merged = make_counters();
        merged.merge(&make_counters());

        let mut summed = make_counters();
        summed += make_counters();

        assert_eq!(merged, summed);
        assert_eq!(merged.bytes_in, 2_000);
        assert_eq!(merged.frames_completed, 2);
    }

    #[test]
    fn serializes_to_json() {
        let json = make_counters().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["bytes_in"], 1_000);
        assert_eq!(value["chunks_out"], 3);
    }
}
