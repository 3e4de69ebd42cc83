//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::title_case;
use crate::network::LoadError;
use crate::planner::{Itinerary, Planner, RouteError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Most results a station search returns.
const MAX_SEARCH_RESULTS: usize = 50;

/// Results a station search returns when no limit is given.
const DEFAULT_SEARCH_RESULTS: usize = 10;

/// Matches listed under the map view's search box.
const MAP_SEARCH_RESULTS: usize = 20;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let map_image = ServeFile::new(state.map_path.as_path());

    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/route", get(plan_route))
        .route("/map", get(map_page))
        .route_service("/map/image", map_image)
        .route("/api/stations", get(list_stations))
        .route("/api/stations/search", get(search_stations))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Route finder page.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = match state.network() {
        Ok(network) => IndexTemplate {
            stations: StationOption::list(network, "", ""),
            summary: Some(NetworkSummary::from_network(network)),
            load_error: None,
        },
        Err(e) => IndexTemplate {
            stations: Vec::new(),
            summary: None,
            load_error: Some(e.to_string()),
        },
    };

    render(&template)
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn plan(state: &AppState, req: &RouteRequest) -> Result<Itinerary, AppError> {
    let network = state.network()?;

    if req.source.trim().is_empty() || req.destination.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "Please select both a source and a destination station".into(),
        });
    }

    let planner = Planner::new(network, &state.config);
    Ok(planner.plan(&req.source, &req.destination)?)
}

/// Find and annotate the shortest route between two stations.
async fn plan_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RouteRequest>,
) -> Result<Response, AppError> {
    let outcome = plan(&state, &req);

    if !accepts_html(&headers) {
        let itinerary = outcome?;
        return Ok(Json(RouteResponse::from_itinerary(&itinerary)).into_response());
    }

    let stations = state
        .network()
        .map(|network| StationOption::list(network, &req.source, &req.destination))
        .unwrap_or_default();

    let (status, itinerary, error) = match outcome {
        Ok(itinerary) => (
            StatusCode::OK,
            Some(ItineraryView::from_itinerary(&itinerary)),
            None,
        ),
        Err(e) => {
            e.log();
            (e.status(), None, Some(e.to_string()))
        }
    };

    let page = render(&RouteTemplate {
        stations,
        itinerary,
        error,
    })?;

    Ok((status, page).into_response())
}

/// Map view with a station search box.
async fn map_page(
    State(state): State<AppState>,
    Query(req): Query<MapRequest>,
) -> Result<Html<String>, AppError> {
    let (matches, load_error) = match state.network() {
        Ok(network) => (
            network
                .search(&req.q, MAP_SEARCH_RESULTS)
                .into_iter()
                .map(ToString::to_string)
                .collect(),
            None,
        ),
        Err(e) => (Vec::new(), Some(e.to_string())),
    };

    render(&MapTemplate {
        map_available: state.map_available(),
        query: title_case(req.q.trim()),
        matches,
        load_error,
    })
}

/// List every station, sorted.
async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<StationListResponse>, AppError> {
    let network = state.network()?;
    Ok(Json(StationListResponse::from_stations(network.stations())))
}

/// Search stations by name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Result<Json<StationSearchResponse>, AppError> {
    let network = state.network()?;
    let limit = req
        .limit
        .unwrap_or(DEFAULT_SEARCH_RESULTS)
        .min(MAX_SEARCH_RESULTS);

    let stations = network
        .search(&req.q, limit)
        .into_iter()
        .map(ToString::to_string)
        .collect();

    Ok(Json(StationSearchResponse { stations }))
}

async fn not_found(uri: Uri) -> Response {
    let page = ErrorTemplate {
        title: "Page not found".into(),
        message: format!("Nothing lives at {}", uri.path()),
    }
    .render()
    .unwrap_or_else(|e| format!("Template error: {}", e));

    (StatusCode::NOT_FOUND, Html(page)).into_response()
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error("{message}")]
    BadRequest { message: String },
    #[error("{message}")]
    Unavailable { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Route(RouteError::NoPath { .. }) => StatusCode::NOT_FOUND,
            AppError::Route(_) | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable name of the error.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Route(RouteError::SameStation(_)) => "same_station",
            AppError::Route(RouteError::UnknownStation(_)) => "unknown_station",
            AppError::Route(RouteError::NoPath { .. }) => "no_path",
            AppError::BadRequest { .. } => "bad_request",
            AppError::Unavailable { .. } => "network_unavailable",
            AppError::Internal { .. } => "internal",
        }
    }

    fn log(&self) {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, kind = self.kind(), "{self}");
        } else {
            warn!(%status, kind = self.kind(), "{self}");
        }
    }
}

impl From<&LoadError> for AppError {
    fn from(e: &LoadError) -> Self {
        AppError::Unavailable {
            message: format!("metro network data is unavailable: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.to_string(),
            kind: self.kind(),
        });
        (status, body).into_response()
    }
}
