//! API handlers
//!
//! The shared [`AppState`] handle is built once at process startup and passed
//! to every handler via axum state injection; the trained model lives in a
//! slot on it rather than behind implicit global state.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::dataset::{self, Label, MissingFieldPolicy, PredictionResult, RawRow};
use crate::model::{self, TrainedModel, TrainingOptions, TrainingReport};
use crate::notify::{build_result_email, validate_email, ResultSender};
use crate::report::{filter_predictions, ClassFilter};

/// Shared application state
pub struct AppState {
    pub model: RwLock<Option<TrainedModel>>,
    pub predictions: RwLock<Vec<PredictionResult>>,
    pub last_result: RwLock<Option<(Label, f64)>>,
    pub sender: Option<Arc<dyn ResultSender>>,
    pub policy: MissingFieldPolicy,
    pub options: TrainingOptions,
}

impl AppState {
    pub fn new(
        policy: MissingFieldPolicy,
        options: TrainingOptions,
        sender: Option<Arc<dyn ResultSender>>,
    ) -> Self {
        Self {
            model: RwLock::new(None),
            predictions: RwLock::new(Vec::new()),
            last_result: RwLock::new(None),
            sender,
            policy,
            options,
        }
    }
}

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.to_string()),
        }
    }
}

/// Ad hoc prediction request
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub label: Label,
    pub confidence: f64,
}

#[derive(Debug, Deserialize)]
pub struct NotifyRequest {
    pub recipient: String,
}

// === API Handlers ===

/// Health check
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Train a model on the posted rows and cache predictions for the full set
pub async fn train(
    State(state): State<Arc<AppState>>,
    Json(rows): Json<Vec<RawRow>>,
) -> Result<Json<ApiResponse<TrainingReport>>, StatusCode> {
    let records = match dataset::resolve_rows(rows, state.policy) {
        Ok(records) => records,
        Err(e) => return Ok(Json(ApiResponse::error(&e.to_string()))),
    };

    let (trained, report) = match model::train(&records, state.options) {
        Ok(result) => result,
        Err(e) => {
            warn!("training failed: {}", e);
            return Ok(Json(ApiResponse::error(&e.to_string())));
        }
    };

    let predictions = trained.predict_records(&records);

    *state.predictions.write().await = predictions;
    *state.model.write().await = Some(trained);

    Ok(Json(ApiResponse::success(report)))
}

/// Classify an ad hoc (subject, body) pair
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<ApiResponse<PredictResponse>>, StatusCode> {
    let model = state.model.read().await;
    let Some(model) = model.as_ref() else {
        return Ok(Json(ApiResponse::error("no trained model; train first")));
    };

    let text = crate::dataset::features::build_text(&req.subject, &req.body);
    match model.predict_text(&text) {
        Ok((label, confidence)) => {
            *state.last_result.write().await = Some((label, confidence));
            Ok(Json(ApiResponse::success(PredictResponse {
                label,
                confidence,
            })))
        }
        Err(e) => Ok(Json(ApiResponse::error(&e.to_string()))),
    }
}

/// Filtered view over the cached full-dataset predictions
pub async fn predictions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ApiResponse<Vec<PredictionResult>>>, StatusCode> {
    let filter = match params
        .get("class")
        .map(|s| s.as_str())
        .unwrap_or("all")
        .parse::<ClassFilter>()
    {
        Ok(filter) => filter,
        Err(e) => return Ok(Json(ApiResponse::error(&e.to_string()))),
    };

    let predictions = state.predictions.read().await;
    Ok(Json(ApiResponse::success(filter_predictions(
        &predictions,
        filter,
    ))))
}

/// Email the most recent ad hoc result
pub async fn notify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NotifyRequest>,
) -> Result<Json<ApiResponse<String>>, StatusCode> {
    let Some(sender) = state.sender.as_ref() else {
        return Ok(Json(ApiResponse::error("notifications are not configured")));
    };

    if let Err(e) = validate_email(&req.recipient) {
        return Ok(Json(ApiResponse::error(&e.to_string())));
    }

    let last = state.last_result.read().await;
    let Some((label, confidence)) = *last else {
        return Ok(Json(ApiResponse::error("no prediction to report yet")));
    };
    drop(last);

    let email = build_result_email(&req.recipient, label, confidence, Utc::now());

    // SMTP delivery blocks; keep it off the runtime workers
    let sender = Arc::clone(sender);
    let delivered = tokio::task::spawn_blocking(move || sender.deliver(&email)).await;
    match delivered {
        Ok(Ok(())) => Ok(Json(ApiResponse::success("Result email sent".to_string()))),
        Ok(Err(e)) => Ok(Json(ApiResponse::error(&format!(
            "Failed to send result: {}",
            e
        )))),
        Err(e) => Ok(Json(ApiResponse::error(&format!(
            "Delivery task failed: {}",
            e
        )))),
    }
}
