use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;

use nosh_core::error::EngineError;
use nosh_core::models::{FoodProfile, LogEntry, TargetUpdate, Targets, TodaySummary};
use nosh_core::service::NoshService;

const BODY_LIMIT: usize = 16 * 1024; // 16 KB

#[derive(Clone)]
struct AppState {
    service: Arc<NoshService>,
}

// --- Request / Response types ---

#[derive(Deserialize)]
struct LogMealRequest {
    food: String,
    amount: f64,
}

#[derive(Serialize)]
struct LogMealResponse {
    message: String,
    entry: LogEntry,
}

#[derive(Serialize)]
struct FoodItem {
    name: String,
    #[serde(flatten)]
    profile: FoodProfile,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// --- Error handling ---

enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => {
                tracing::error!("Internal server error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::UnknownFood(_) => Self::NotFound(err.to_string()),
            EngineError::InvalidAmount(_) | EngineError::InvalidTarget { .. } => {
                Self::BadRequest(err.to_string())
            }
            // Catalog validation happens at startup; a per-request integrity
            // fault would mean corrupted reference data.
            EngineError::CorruptCatalog(_) => Self::Internal(err.to_string()),
        }
    }
}

// --- Handlers ---

async fn list_foods(State(state): State<AppState>) -> Json<Vec<FoodItem>> {
    let items = state
        .service
        .foods()
        .iter()
        .map(|(name, profile)| FoodItem {
            name: name.to_string(),
            profile: profile.clone(),
        })
        .collect();
    Json(items)
}

async fn get_targets(State(state): State<AppState>) -> Json<Targets> {
    Json(state.service.targets())
}

async fn set_targets(
    State(state): State<AppState>,
    Json(update): Json<TargetUpdate>,
) -> Result<Json<Targets>, ApiError> {
    let updated = state.service.update_targets(&update)?;
    Ok(Json(updated))
}

async fn log_meal(
    State(state): State<AppState>,
    Json(req): Json<LogMealRequest>,
) -> Result<(StatusCode, Json<LogMealResponse>), ApiError> {
    let entry = state.service.log_meal(&req.food, req.amount)?;
    let cal = entry.calories;
    let name = &entry.food;
    let message = format!("Logged {cal:.0} kcal from {name}!");
    Ok((StatusCode::CREATED, Json(LogMealResponse { message, entry })))
}

async fn get_summary(State(state): State<AppState>) -> Json<TodaySummary> {
    Json(state.service.today_summary())
}

// --- Router builder ---

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/foods", get(list_foods))
        .route("/api/targets", get(get_targets).post(set_targets))
        .route("/api/log", post(log_meal))
        .route("/api/summary", get(get_summary))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(cors)
        .with_state(state)
}

// --- Server startup ---

pub async fn start_server(service: NoshService, port: u16, bind: &str) -> anyhow::Result<()> {
    let state = AppState {
        service: Arc::new(service),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{bind}:{port}")).await?;
    info!("Listening on http://{bind}:{port}");
    axum::serve(listener, app).await?;

    Ok(())
}
