//! axum router and handlers (§4.6).
//!
//! Handlers do request decoding, a single synchronous call into the
//! `Coordinator`, and response serialization — nothing else. All domain
//! validation lives in `coach-engine` so the same rules apply regardless of
//! transport. No handler holds the reservation lock across an `.await`:
//! the `Coordinator` acquires and releases it internally, synchronously.

use crate::error::HttpError;
use crate::extract::ValidatedJson;
use crate::state::AppState;
use crate::types::{
    AvailableResponse, BookRequest, BookedResponse, CancelResponse, HealthResponse, TicketResponse,
};
use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use coach_engine::Coordinator;
use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/available", get(available))
        .route("/booked", get(booked))
        .route("/book", post(book))
        .route("/cancel/{id}", post(cancel))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        backend_ok: true,
    })
}

async fn available(State(state): State<AppState>) -> Json<AvailableResponse> {
    Json(state.coordinator().available().into())
}

async fn booked(State(state): State<AppState>) -> Json<BookedResponse> {
    Json(state.coordinator().booked().into())
}

async fn book(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<BookRequest>,
) -> Result<Json<TicketResponse>, HttpError> {
    let group = req.passengers.into_iter().map(Into::into).collect();
    let ticket = state.coordinator().book(group)?;
    Ok(Json(TicketResponse::from(&ticket)))
}

async fn cancel(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<CancelResponse>, HttpError> {
    state.coordinator().cancel(coach_core::TicketId::new(id))?;
    Ok(Json(CancelResponse {
        message: format!("ticket {id} cancelled"),
    }))
}

/// Build the router and serve it on `bind_addr` until the process is
/// terminated.
pub async fn run_server(
    coordinator: Arc<Coordinator>,
    bind_addr: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state = AppState::new(coordinator);
    let app = create_router(state);

    let std_listener = StdTcpListener::bind(bind_addr)?;
    std_listener.set_nonblocking(true)?;
    let listener = tokio::net::TcpListener::from_std(std_listener)?;

    info!(addr = bind_addr, "starting reservation HTTP server");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use coach_inventory::CapacityConfig;
    use tower::ServiceExt;

    fn router() -> Router {
        let coordinator = Arc::new(Coordinator::new(CapacityConfig::default(), 10));
        create_router(AppState::new(coordinator))
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn book_then_cancel_round_trip() {
        let app = router();
        let book_body = r#"{"passengers":[{"name":"Alice","age":65,"gender":"female"}]}"#;
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/book")
                    .header("content-type", "application/json")
                    .body(Body::from(book_body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let ticket: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let ticket_id = ticket["ticket_id"].as_u64().unwrap();
        assert_eq!(ticket["status"], "confirmed");

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/cancel/{ticket_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn book_rejects_empty_group_with_400() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/book")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"passengers":[]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn book_rejects_invalid_gender_with_error_body() {
        let body = r#"{"passengers":[{"name":"Alice","age":65,"gender":"robot"}]}"#;
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/book")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn cancel_unknown_ticket_returns_404() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/cancel/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
