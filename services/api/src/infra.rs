use arch_advisor::advisor::{AnswerStore, JsonFileStore};
use arch_advisor::config::StorageConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Answer store shared by the CLI and HTTP surfaces, backed by the configured JSON file.
pub(crate) fn open_answer_store(config: &StorageConfig) -> Arc<AnswerStore<JsonFileStore>> {
    Arc::new(AnswerStore::new(JsonFileStore::new(&config.answers_path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arch_advisor::advisor::Answers;
    use std::path::PathBuf;

    #[test]
    fn answer_store_points_at_configured_file() {
        let config = StorageConfig {
            answers_path: PathBuf::from("target/never-written/answers.json"),
        };

        let store = open_answer_store(&config);

        assert_eq!(store.inner().path(), config.answers_path.as_path());
        assert_eq!(store.load(), Answers::default());
    }
}
