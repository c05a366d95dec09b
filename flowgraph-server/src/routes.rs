//! HTTP routes: create graph, run graph, inspect run, health.
//!
//! Status mapping is the core's error taxonomy: compile/validation errors
//! are 400, unknown graph/run ids are 404, execution failures are a normal
//! 200 whose body carries the failed outcome.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info_span;

use flowgraph::{
    CompileError, GraphDefinition, RunError, RunOutcome, RunStatus, StoreError, WorkflowService,
};

/// Builds the application router over a shared service.
pub fn app(service: Arc<WorkflowService>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/graph/create", post(create_graph))
        .route("/graph/run", post(run_graph))
        .route("/graph/state/:run_id", get(run_state))
        .layer(
            TraceLayer::new_for_http().make_span_with(
                |req: &axum::http::Request<axum::body::Body>| {
                    info_span!("request", method = %req.method(), uri = %req.uri())
                },
            ),
        )
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Error surfaced to HTTP callers, with the status each family maps to.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Compile(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Body of `POST /graph/run`.
#[derive(Debug, Deserialize)]
pub struct RunRequest {
    pub graph_id: String,
    pub initial_state: flowgraph::State,
}

/// Body returned by `POST /graph/run`: the run id plus its immediate
/// outcome, since execution is synchronous.
#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub run_id: String,
    pub status: RunStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_state: Option<flowgraph::State>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RunError>,
    pub logs: Vec<String>,
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "online", "engine": "flowgraph" }))
}

async fn create_graph(
    State(service): State<Arc<WorkflowService>>,
    Json(definition): Json<GraphDefinition>,
) -> Result<Json<Value>, ApiError> {
    let graph_id = service.create_graph(&definition)?;
    Ok(Json(json!({
        "graph_id": graph_id,
        "message": "Graph created successfully"
    })))
}

async fn run_graph(
    State(service): State<Arc<WorkflowService>>,
    Json(request): Json<RunRequest>,
) -> Result<Json<RunResponse>, ApiError> {
    let run_id = service
        .run_graph(&request.graph_id, request.initial_state)
        .await?;
    let outcome = service.run_outcome(&run_id)?;
    Ok(Json(RunResponse {
        run_id,
        status: outcome.status,
        final_state: outcome.final_state,
        error: outcome.error,
        logs: outcome.logs,
    }))
}

async fn run_state(
    State(service): State<Arc<WorkflowService>>,
    Path(run_id): Path<String>,
) -> Result<Json<RunOutcome>, ApiError> {
    Ok(Json(service.run_outcome(&run_id)?))
}
