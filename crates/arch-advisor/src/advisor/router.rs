use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::error;

use super::answers::Answers;
use super::engine::recommend;
use super::glossary;
use super::questionnaire::questions;
use super::store::{AnswerStore, KeyValueStore, StoreError};

/// Router builder exposing the advisor over HTTP.
pub fn advisor_router<S>(store: Arc<AnswerStore<S>>) -> Router
where
    S: KeyValueStore + 'static,
{
    Router::new()
        .route("/api/v1/recommendation", post(recommend_handler))
        .route(
            "/api/v1/answers",
            get(load_answers_handler::<S>)
                .put(save_answers_handler::<S>)
                .delete(reset_answers_handler::<S>),
        )
        .route(
            "/api/v1/answers/recommendation",
            get(stored_recommendation_handler::<S>),
        )
        .route("/api/v1/glossary", get(glossary_handler))
        .route("/api/v1/glossary/:term", get(glossary_term_handler))
        .route("/api/v1/questionnaire", get(questionnaire_handler))
        .with_state(store)
}

pub(crate) async fn recommend_handler(axum::Json(answers): axum::Json<Answers>) -> Response {
    (StatusCode::OK, axum::Json(recommend(&answers))).into_response()
}

pub(crate) async fn load_answers_handler<S>(State(store): State<Arc<AnswerStore<S>>>) -> Response
where
    S: KeyValueStore + 'static,
{
    (StatusCode::OK, axum::Json(store.load())).into_response()
}

pub(crate) async fn save_answers_handler<S>(
    State(store): State<Arc<AnswerStore<S>>>,
    axum::Json(answers): axum::Json<Answers>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    match store.save(&answers) {
        Ok(()) => (StatusCode::OK, axum::Json(recommend(&answers))).into_response(),
        Err(err) => store_failure(err),
    }
}

pub(crate) async fn reset_answers_handler<S>(State(store): State<Arc<AnswerStore<S>>>) -> Response
where
    S: KeyValueStore + 'static,
{
    match store.reset() {
        Ok(()) => (StatusCode::OK, axum::Json(Answers::default())).into_response(),
        Err(err) => store_failure(err),
    }
}

pub(crate) async fn stored_recommendation_handler<S>(
    State(store): State<Arc<AnswerStore<S>>>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    let answers = store.load();
    (StatusCode::OK, axum::Json(recommend(&answers))).into_response()
}

pub(crate) async fn glossary_handler() -> Response {
    (StatusCode::OK, axum::Json(glossary::entries())).into_response()
}

pub(crate) async fn glossary_term_handler(Path(term): Path<String>) -> Response {
    match glossary::lookup(&term) {
        Some(entry) => (StatusCode::OK, axum::Json(entry)).into_response(),
        None => {
            let payload = json!({
                "error": format!("unknown glossary term '{term}'"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn questionnaire_handler() -> Response {
    (StatusCode::OK, axum::Json(questions())).into_response()
}

fn store_failure(err: StoreError) -> Response {
    error!(error = %err, "answer store failure");
    let payload = json!({
        "error": err.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
