use axum::{
    extract::State,
    routing::{get, post},
    Router,
    Json,
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::magic_loops::MagicLoopsError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TranslationRequest {
    pub text: Option<Value>,
}

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Relay endpoint
        .route("/traduccion", post(translate))
        // Health check
        .route("/api/health", get(health_check))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "magic_loops": state.config.magic_loops_config.loop_url
    }))
}

async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslationRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.magic_loops.run_loop(payload.text).await {
        Ok(output) => {
            let translated_text = output
                .translated_text
                .unwrap_or_else(|| "No translatedText found".to_string());
            Ok(Json(json!({ "translatedText": translated_text })))
        }
        Err(MagicLoopsError::InvalidResponse(reason)) => {
            warn!("Upstream response failed the shape check: {}", reason);
            Err((
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Invalid response from translation API"})),
            ))
        }
        Err(MagicLoopsError::Transport(e)) => {
            warn!("Could not reach the translation service: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": "Translation service unreachable"})),
            ))
        }
    }
}
