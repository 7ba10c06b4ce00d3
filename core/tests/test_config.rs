#[cfg(test)]
mod tests {
    use zstd_codec_core::config::CodecConfig;
    use zstd_codec_core::context::CompressContext;
    use zstd_codec_core::types::CodecError;

    #[test]
    fn default_config_sets_nothing() {
        let config = CodecConfig::default();
        assert_eq!(config, CodecConfig::new(None, None, None));

        let ctx = config.build().unwrap();
        assert_eq!(ctx.pledged_size(), None);
    }

    #[test]
    fn parses_camel_case_json() {
        let config =
            CodecConfig::from_json(r#"{"compressionLevel": 7, "checksum": true, "originalSize": 2048}"#)
                .unwrap();
        assert_eq!(config, CodecConfig::new(Some(7), Some(true), Some(2048)));
    }

    #[test]
    fn partial_json_leaves_other_fields_unset() {
        let config = CodecConfig::from_json(r#"{"checksum": false}"#).unwrap();
        assert_eq!(config.compression_level, None);
        assert_eq!(config.checksum, Some(false));
        assert_eq!(config.original_size, None);
    }

    #[test]
    fn rejects_unknown_fields_and_bad_types() {
        assert!(matches!(
            CodecConfig::from_json(r#"{"level": 3}"#),
            Err(CodecError::Config(_))
        ));
        assert!(matches!(
            CodecConfig::from_json(r#"{"originalSize": -1}"#),
            Err(CodecError::Config(_))
        ));
    }

    #[test]
    fn apply_forwards_pledge() {
        let mut ctx = CompressContext::create().unwrap();
        CodecConfig::new(Some(4), None, Some(512)).apply(&mut ctx).unwrap();
        assert_eq!(ctx.pledged_size(), Some(512));
    }

    #[test]
    fn apply_on_closed_context_fails() {
        let mut ctx = CompressContext::create().unwrap();
        ctx.close().unwrap();
        let result = CodecConfig::new(Some(1), None, None).apply(&mut ctx);
        assert!(matches!(result, Err(CodecError::Closed(_))));
    }
}
