use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::GenerateError;
use crate::models::{QuestionRecord, SentenceItem, TextPayload};
use crate::problems::ProblemGenerator;
use crate::segment::numbered_sentences;

#[derive(Clone)]
struct AppState {
    generator: ProblemGenerator,
}

pub async fn run_server(config: AppConfig, generator: ProblemGenerator) -> Result<()> {
    let app = build_router(&config, generator)?;

    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address: {}", config.bind_addr))?;
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(config: &AppConfig, generator: ProblemGenerator) -> Result<Router> {
    let state = AppState { generator };

    let router = Router::new()
        .route("/health", get(health))
        .route("/inserting", post(inserting_handler))
        .route("/ordering", post(ordering_handler))
        .route("/sentences", post(sentences_handler))
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

fn cors_layer(config: &AppConfig) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    if config.allows_any_origin() {
        return Ok(layer.allow_origin(AllowOrigin::any()));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn inserting_handler(
    State(state): State<AppState>,
    Json(payload): Json<TextPayload>,
) -> Result<Json<Vec<QuestionRecord>>, ApiError> {
    let records = state.generator.inserting(&payload.text)?;
    Ok(Json(records))
}

async fn ordering_handler(
    State(state): State<AppState>,
    Json(payload): Json<TextPayload>,
) -> Result<Json<Vec<QuestionRecord>>, ApiError> {
    let records = state.generator.ordering(&payload.text)?;
    Ok(Json(records))
}

async fn sentences_handler(
    Json(payload): Json<TextPayload>,
) -> Result<Json<Vec<SentenceItem>>, ApiError> {
    let items = numbered_sentences(&payload.text);
    if items.is_empty() {
        return Err(GenerateError::NoSentencesFound.into());
    }
    Ok(Json(items))
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<GenerateError> for ApiError {
    fn from(value: GenerateError) -> Self {
        tracing::warn!("rejected passage: {}", value);
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: value.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}
