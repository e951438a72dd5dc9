use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::desk::FaqDesk;

#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

/// Router builder exposing the question endpoint and a catalog summary.
pub fn faq_router(desk: Arc<FaqDesk>) -> Router {
    Router::new()
        .route("/api/v1/faq", get(catalog_handler))
        .route("/api/v1/faq/ask", post(ask_handler))
        .with_state(desk)
}

pub(crate) async fn ask_handler(
    State(desk): State<Arc<FaqDesk>>,
    Json(request): Json<AskRequest>,
) -> Response {
    let query = request.query.trim();
    if query.is_empty() {
        let payload = json!({ "error": "query must not be blank" });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }

    let reply = desk.ask(query);
    info!(status = ?reply.status(), tier = ?reply.tier(), "faq question answered");
    (StatusCode::OK, Json(reply.view())).into_response()
}

pub(crate) async fn catalog_handler(State(desk): State<Arc<FaqDesk>>) -> Response {
    (StatusCode::OK, Json(desk.catalog())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faq::desk::{NOT_LOADED_REPLY, ReplyTemplates};
    use crate::faq::domain::{FaqEntry, FaqSet};
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn desk() -> Arc<FaqDesk> {
        Arc::new(FaqDesk::new(FaqSet::new([FaqEntry::new(
            "How do I apply?",
            "Apply online.",
        )
        .with_keywords(["admission"])])))
    }

    async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn ask(query: &str) -> Request<Body> {
        Request::post("/api/v1/faq/ask")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "query": query }).to_string()))
            .expect("request builds")
    }

    #[tokio::test]
    async fn ask_returns_answer_with_tier() {
        let response = faq_router(desk())
            .oneshot(ask("admission deadline"))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json_body(response).await;
        assert_eq!(body["status"], "answered");
        assert_eq!(body["tier"], "keyword");
        assert_eq!(body["reply"], "Apply online.");
    }

    #[tokio::test]
    async fn ask_rejects_blank_queries() {
        let response = ask_handler(
            State(desk()),
            Json(AskRequest {
                query: "   ".to_string(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn ask_reports_not_loaded_for_empty_desk() {
        let desk = Arc::new(FaqDesk::unloaded(ReplyTemplates::default()));
        let response = ask_handler(
            State(desk),
            Json(AskRequest {
                query: "fees".to_string(),
            }),
        )
        .await;

        let body = read_json_body(response).await;
        assert_eq!(body["status"], "not_loaded");
        assert_eq!(body["reply"], NOT_LOADED_REPLY);
        assert!(body["tier"].is_null());
    }

    #[tokio::test]
    async fn catalog_of_unloaded_desk_has_null_load_time() {
        let desk = Arc::new(FaqDesk::unloaded(ReplyTemplates::default()));
        let body = read_json_body(catalog_handler(State(desk)).await).await;

        assert_eq!(body["entries"], 0);
        assert!(body["loaded_at"].is_null());
    }

    #[tokio::test]
    async fn catalog_reports_entry_count() {
        let response = faq_router(desk())
            .oneshot(
                Request::get("/api/v1/faq")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        let body = read_json_body(response).await;
        assert_eq!(body["entries"], 1);
        assert!(body["loaded_at"].is_string());
    }
}
