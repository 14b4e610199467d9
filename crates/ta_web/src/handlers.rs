use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use ta_core::analysis::{detect_language, DetectedLanguage, TextStats};
use ta_core::types::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use ta_inference::Summary;
use tracing::info;

use crate::error::ApiError;
use crate::AppState;

fn default_min_length() -> u32 {
    DEFAULT_MIN_LENGTH
}

fn default_max_length() -> u32 {
    DEFAULT_MAX_LENGTH
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "ar".to_string()
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default = "default_min_length")]
    pub min_length: u32,
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    #[serde(default)]
    pub bullet_points: bool,
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub pipelines: BTreeMap<String, String>,
}

pub async fn root() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let registry = state.service.registry();
    let pipelines = registry
        .loaded()
        .map(|(kind, name)| (kind.to_string(), name.to_string()))
        .collect();

    let status = if registry.is_complete() { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        started_at: state.started_at,
        pipelines,
    })
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<Summary>, ApiError> {
    match state
        .service
        .summarize(
            &request.text,
            request.min_length,
            request.max_length,
            request.bullet_points,
        )
        .await
    {
        Ok(summary) => Ok(Json(summary)),
        Err(err) => match err.sentinel() {
            Some(message) => {
                info!("summarize declined: {}", message);
                Ok(Json(Summary {
                    summary: message,
                    bullet_points: None,
                }))
            }
            None => Err(err.into()),
        },
    }
}

pub async fn translate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let translation = match state
        .service
        .translate(&request.text, &request.source_language, &request.target_language)
        .await
    {
        Ok(translation) => translation,
        Err(err) => match err.sentinel() {
            Some(message) => {
                info!("translate declined: {}", message);
                message
            }
            None => return Err(err.into()),
        },
    };

    Ok(Json(TranslateResponse { translation }))
}

pub async fn detect(Json(request): Json<TextRequest>) -> Json<DetectedLanguage> {
    Json(detect_language(&request.text))
}

pub async fn stats(Json(request): Json<TextRequest>) -> Json<TextStats> {
    Json(TextStats::from_text(&request.text))
}
