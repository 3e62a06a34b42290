#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::error::AnalysisError;
    use crate::workflow::{TimingKeys, TimingScope, is_reported, launch};
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    const WELL_FORMED: &str = include_str!("../../tests/fixtures/analysis_response.json");

    /// 收集日志输出，便于断言写到stderr的内容
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn offline_config(temp_dir: &TempDir, response: &str) -> Config {
        let input_path = temp_dir.path().join("brief.txt");
        let raw_path = temp_dir.path().join("response.json");
        std::fs::write(&input_path, "Launch our oat drink in London and Manchester.").unwrap();
        std::fs::write(&raw_path, response).unwrap();

        Config {
            input_path,
            output_path: temp_dir.path().join("output"),
            raw_response_path: Some(raw_path),
            ..Default::default()
        }
    }

    #[test]
    fn test_timing_scope_records_phases_in_order() {
        let mut timing = TimingScope::new();
        timing.start_phase(TimingKeys::READ);
        timing.start_phase(TimingKeys::ANALYZE);
        assert!(timing.end_phase(TimingKeys::ANALYZE).is_some());
        assert!(timing.end_phase(TimingKeys::READ).is_some());
        assert!(timing.end_phase(TimingKeys::OUTPUT).is_none());

        let phases: Vec<&str> = timing.get_phase_durations().iter().map(|(p, _)| *p).collect();
        assert_eq!(phases, vec![TimingKeys::ANALYZE, TimingKeys::READ]);

        let report = timing.generate_timing_report();
        assert!(report.starts_with("总执行时间"));
        assert!(report.contains("- analyze: "));
    }

    #[tokio::test]
    async fn test_offline_launch_writes_outputs() {
        let temp_dir = TempDir::new().unwrap();
        let config = offline_config(&temp_dir, WELL_FORMED);

        launch(&config).await.unwrap();

        let output = temp_dir.path().join("output");
        assert!(output.join(config.target_language.report_filename()).exists());
        assert!(output.join("analysis.json").exists());
        assert!(!output.join("improved_brief.md").exists());
    }

    #[tokio::test]
    async fn test_offline_launch_surfaces_schema_violation() {
        let temp_dir = TempDir::new().unwrap();
        let config = offline_config(&temp_dir, r#"{"overall_score": 82}"#);

        let err = launch(&config).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::SchemaViolation { .. })
        ));
        assert!(!temp_dir.path().join("output").exists());
    }

    #[tokio::test]
    async fn test_failed_analysis_keeps_response_text_out_of_default_logs() {
        let temp_dir = TempDir::new().unwrap();
        let config = offline_config(
            &temp_dir,
            r#"{"overall_score": 82, "note": "CONFIDENTIAL-7731", "#,
        );

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let err = {
            let _guard = tracing::subscriber::set_default(subscriber);
            launch(&config).await.unwrap_err()
        };

        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::MalformedResponse { .. })
        ));
        assert!(is_reported(&err));
        assert!(!logs.text().contains("CONFIDENTIAL-7731"));
    }

    #[tokio::test]
    async fn test_missing_brief_is_not_reported_by_launch() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = offline_config(&temp_dir, WELL_FORMED);
        config.input_path = temp_dir.path().join("missing.txt");

        let err = launch(&config).await.unwrap_err();

        assert!(!is_reported(&err));
    }
}
