use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::advisor::answers::{
    Answers, BackgroundWork, Budget, Consistency, LatencyTarget, OpsMaturity, Regulation,
    TeamSize, Throughput,
};
use crate::advisor::engine::Recommendation;
use crate::advisor::options::ArchitectureOption;
use crate::advisor::store::{AnswerStore, InMemoryStore, KeyValueStore, StoreError};

pub(super) fn multi_team_high_load() -> Answers {
    Answers {
        team: TeamSize::Multi,
        rps_now: Throughput::Over1000,
        rps_soon: Throughput::Over1000,
        indep_deploys: true,
        ..Answers::default()
    }
}

pub(super) fn platform_team() -> Answers {
    Answers {
        team: TeamSize::Multi,
        rps_now: Throughput::From100To1000,
        rps_soon: Throughput::Over1000,
        consistency: Consistency::Eventual,
        integrations: 9,
        indep_deploys: true,
        ops: OpsMaturity::High,
        budget: Budget::ManagedOk,
        regulation: Regulation::Unregulated,
        ..Answers::default()
    }
}

pub(super) fn score_of(recommendation: &Recommendation, option: ArchitectureOption) -> i16 {
    recommendation
        .scores
        .iter()
        .find(|entry| entry.option == option)
        .map(|entry| entry.score)
        .expect("every option is scored")
}

/// Every combination of categorical answers, with a few integration counts.
pub(super) fn answer_space() -> Vec<Answers> {
    let mut space = Vec::new();
    for &team in TeamSize::ALL {
        for &rps_now in Throughput::ALL {
            for &rps_soon in Throughput::ALL {
                for spikes in [false, true] {
                    for &bg_work in BackgroundWork::ALL {
                        for &latency in LatencyTarget::ALL {
                            for &consistency in Consistency::ALL {
                                for integrations in [0, 6] {
                                    for indep_deploys in [false, true] {
                                        for &ops in OpsMaturity::ALL {
                                            for &budget in Budget::ALL {
                                                for &regulation in Regulation::ALL {
                                                    space.push(Answers {
                                                        team,
                                                        rps_now,
                                                        rps_soon,
                                                        spikes,
                                                        bg_work,
                                                        latency,
                                                        consistency,
                                                        integrations,
                                                        indep_deploys,
                                                        ops,
                                                        budget,
                                                        regulation,
                                                    });
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
    space
}

pub(super) fn memory_answer_store() -> Arc<AnswerStore<InMemoryStore>> {
    Arc::new(AnswerStore::new(InMemoryStore::default()))
}

/// Store whose every operation fails, to exercise fallback and error paths.
pub(super) struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("offline".to_string()))
    }

    fn set(&self, _key: &str, _value: String) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("offline".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("offline".to_string()))
    }
}

pub(super) fn scratch_path(label: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let id = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir()
        .join(format!("arch-advisor-{}-{label}-{id}", std::process::id()))
        .join("answers.json")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
