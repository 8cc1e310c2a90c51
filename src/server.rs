//! Stateless HTTP front end: one `POST /ask` runs the whole pipeline.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::deck::Card;
use crate::engine::{Asked, Engine};
use crate::error::AskError;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub card: Card,
    pub question: String,
    pub takeaway: String,
    pub answer: String,
    /// Base64 image bytes, or `null` when the image stage came back empty.
    pub image: Option<String>,
    pub mime_type: Option<String>,
    pub warnings: Vec<String>,
}

type SharedEngine = Arc<dyn Engine>;

/// Build the router. Split from [`serve`] so tests can drive it in-process.
pub fn router(engine: SharedEngine) -> Router {
    Router::new()
        .route("/ask", post(ask))
        .route("/health", get(|| async { "ok" }))
        .layer(CorsLayer::permissive())
        .with_state(engine)
}

/// Bind and serve until the process is stopped.
pub async fn serve(engine: SharedEngine, bind: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(%bind, text_model = engine.text_model(), image_model = engine.image_model(), "koolbox listening");
    axum::serve(listener, router(engine)).await?;
    Ok(())
}

async fn ask(
    State(engine): State<SharedEngine>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = body else {
        return error(StatusCode::BAD_REQUEST, "Invalid JSON");
    };
    let question = request.question.unwrap_or_default();

    match engine.ask(&question).await {
        Ok(asked) => Json(to_response(asked)).into_response(),
        Err(AskError::EmptyQuestion) => error(StatusCode::BAD_REQUEST, "Empty question"),
        Err(e) => {
            tracing::warn!(error = %e, "ask failed");
            error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

fn to_response(asked: Asked) -> AskResponse {
    let Asked { session, notices } = asked;
    let card = session.card().copied().unwrap_or(Card {
        id: session.card_key,
        title: "",
        content: "",
    });
    let (image, mime_type) = match session.generated_image {
        Some(image) => (Some(BASE64.encode(&image.data)), image.mime_type),
        None => (None, None),
    };

    AskResponse {
        card,
        question: session.question,
        takeaway: session.takeaway,
        answer: session.answer,
        image,
        mime_type,
        warnings: notices.into_iter().map(|n| n.message).collect(),
    }
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
