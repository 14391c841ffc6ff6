use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{CourseCalendar, CourseConfig, CourseSchedule, ScheduleSummary, Session, persistence};

/// The only mutable state in the service: the current course
/// configuration. Schedules are generated fresh on every request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<RwLock<CourseConfig>>,
    calendar: Arc<CourseCalendar>,
}

impl AppState {
    pub fn new(config: CourseConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            calendar: Arc::new(CourseCalendar::default()),
        }
    }

    pub fn with_shared(config: Arc<RwLock<CourseConfig>>) -> Self {
        Self {
            config,
            calendar: Arc::new(CourseCalendar::default()),
        }
    }

    fn config(&self) -> Arc<RwLock<CourseConfig>> {
        self.config.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Invalid(String),
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                let body = Json(ErrorBody {
                    error: "not_found",
                    message,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub sessions: Vec<Session>,
    pub target_reached: bool,
    pub summary: Option<ScheduleSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HolidayRow {
    pub date: NaiveDate,
    pub name: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/config", get(get_config).put(update_config))
        .route("/schedule", get(get_schedule))
        .route("/holidays", get(list_holidays))
        .route("/holidays/:date", get(get_holiday))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, config: CourseConfig) -> std::io::Result<()> {
    let state = AppState::new(config);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn get_config(State(state): State<AppState>) -> Json<CourseConfig> {
    let config = state.config();
    let snapshot = {
        let guard = config.read();
        guard.clone()
    };
    Json(snapshot)
}

async fn update_config(
    State(state): State<AppState>,
    Json(new_config): Json<CourseConfig>,
) -> Result<Json<CourseConfig>, ApiError> {
    persistence::validate_config(&new_config).map_err(|err| ApiError::invalid(err.to_string()))?;
    let config = state.config();
    {
        let mut guard = config.write();
        *guard = new_config.clone();
    }
    Ok(Json(new_config))
}

async fn get_schedule(State(state): State<AppState>) -> Json<ScheduleResponse> {
    let config = state.config();
    let snapshot = {
        let guard = config.read();
        guard.clone()
    };
    let schedule = CourseSchedule::build_with_calendar(&snapshot, &state.calendar);
    let summary = schedule.summary();
    let target_reached = schedule.target_reached();
    Json(ScheduleResponse {
        sessions: schedule.into_sessions(),
        target_reached,
        summary,
    })
}

async fn list_holidays(State(state): State<AppState>) -> Json<Vec<HolidayRow>> {
    let rows = state
        .calendar
        .holidays()
        .map(|(date, name)| HolidayRow {
            date,
            name: name.to_string(),
        })
        .collect();
    Json(rows)
}

async fn get_holiday(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<HolidayRow>, ApiError> {
    match state.calendar.holiday_name(date) {
        Some(name) => Ok(Json(HolidayRow {
            date,
            name: name.to_string(),
        })),
        None => Err(ApiError::not_found(format!("{date} is not a holiday"))),
    }
}
