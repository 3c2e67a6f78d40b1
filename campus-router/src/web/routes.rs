//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::{Local, NaiveTime, Timelike};
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::cache::RouteQuery;
use crate::domain::{InvalidWeightMode, NodeId, TimeError, WeightMode, format_hhmm, parse_hhmm};
use crate::planner::{Algorithm, InvalidAlgorithm, Planner, QueryError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/landmarks", get(landmarks))
        .route("/api/route", get(plan_route))
        .route("/api/distances", get(distances))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the route form.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = IndexTemplate {
        landmarks: LandmarkView::all(&state.graph),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html))
}

/// All landmarks, in id order.
async fn landmarks(State(state): State<AppState>) -> Json<Vec<LandmarkResult>> {
    let landmarks = state
        .graph
        .nodes()
        .map(|node| LandmarkResult {
            id: node.id,
            name: node.name.clone(),
            tags: node.tags.iter().cloned().collect(),
        })
        .collect();

    Json(landmarks)
}

/// Shortest distances between every pair of landmarks.
async fn distances(State(state): State<AppState>) -> Json<DistancesResponse> {
    Json(DistancesResponse::from_matrix(&state.distances))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Which search a route request asks for.
#[derive(Debug, Clone, PartialEq)]
enum SearchKind {
    Shortest(Algorithm),
    Keyword(String),
}

impl SearchKind {
    fn from_request(req: &RouteRequest) -> Result<Self, AppError> {
        let algo = req.algo.as_deref().map(str::trim).unwrap_or("astar");
        if algo.eq_ignore_ascii_case("keyword") {
            let keyword = req.kw.clone().ok_or_else(|| AppError::BadRequest {
                message: "kw is required when algo=keyword".to_string(),
            })?;
            return Ok(SearchKind::Keyword(keyword));
        }
        Ok(SearchKind::Shortest(algo.parse::<Algorithm>()?))
    }
}

/// The departure time of a request, to the minute.
fn departure_time(req: &RouteRequest) -> Result<NaiveTime, AppError> {
    let time = match req.time.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        Some(raw) => parse_hhmm(raw)?,
        None => Local::now().time(),
    };
    Ok(NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time))
}

/// Plan a route between two landmarks.
async fn plan_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RouteRequest>,
) -> Result<Response, AppError> {
    let start = NodeId(req.start);
    let goal = NodeId(req.goal);
    let mode = match req.mode.as_deref() {
        Some(raw) => raw.parse::<WeightMode>()?,
        None => WeightMode::Time,
    };
    let depart = departure_time(&req)?;
    let search = SearchKind::from_request(&req)?;

    let planner = Planner::new(&state.graph, &state.config);
    planner.validate(start, goal)?;

    let routes = match search {
        SearchKind::Shortest(algorithm) => {
            let query = RouteQuery::shortest(algorithm, start, goal, mode, depart);
            state
                .cache
                .get_or_compute(query, || {
                    planner
                        .shortest_path(algorithm, start, goal, mode, depart)
                        .map(|route| route.into_iter().collect())
                })
                .await?
        }
        SearchKind::Keyword(keyword) => {
            let k = state.config.alternatives_for(req.k);
            let query = RouteQuery::keyword(&keyword, k, start, goal, mode, depart);
            state
                .cache
                .get_or_compute(query, || {
                    planner.routes_by_keyword(start, goal, &keyword, Some(k), mode, depart)
                })
                .await?
        }
    };

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = RouteResultsTemplate {
            routes: routes
                .iter()
                .enumerate()
                .map(|(i, route)| RouteView::from_route(i + 1, route, &state.graph))
                .collect(),
            depart: format_hhmm(depart),
            mode: mode.to_string(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        let results = routes
            .iter()
            .map(|route| RouteResult::from_route(route, &state.graph))
            .collect();

        Ok(Json(RouteResponse {
            depart: format_hhmm(depart),
            mode,
            routes: results,
        })
        .into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::UnknownNode(_) => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl From<TimeError> for AppError {
    fn from(e: TimeError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidWeightMode> for AppError {
    fn from(e: InvalidWeightMode) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidAlgorithm> for AppError {
    fn from(e: InvalidAlgorithm) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
