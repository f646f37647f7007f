//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, metrics)
//! - Serve the application shell and the resolve/route-list API
//! - Bind to a listener and shut down gracefully

use axum::{
    body::Body,
    extract::{Query, State},
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::RouterConfig;
use crate::history::HashLocation;
use crate::http::request::MakeRequestUuidV4;
use crate::lifecycle::signals::shutdown_signal;
use crate::observability::metrics;
use crate::routing::{Params, Resolution, Router as RouteTable, View};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub shell: Arc<str>,
    pub base: Arc<str>,
}

/// Development server for the single-page application.
pub struct DevServer {
    app: Router,
    config: RouterConfig,
}

impl DevServer {
    /// Create a server over an already compiled route table.
    pub fn new(config: RouterConfig, routes: Arc<RouteTable>, shell: String) -> Self {
        let state = AppState {
            routes,
            shell: Arc::from(shell),
            base: Arc::from(config.history.base.as_str()),
        };

        let app = Self::build_router(&config, state);
        Self { app, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RouterConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .route("/index.html", get(index_handler))
            .route("/api/routes", get(routes_handler))
            .route("/api/resolve", get(resolve_handler))
            .fallback(fallback_handler)
            .with_state(state)
            .layer(middleware::from_fn(track_metrics))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// The assembled application, for serving or in-process testing.
    pub fn app(&self) -> Router {
        self.app.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            base = %self.config.history.base,
            "Dev server starting"
        );

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Dev server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }
}

/// Route table entry as exposed by `/api/routes`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteSummary {
    pub name: String,
    pub path: String,
    pub view: View,
    /// Working link; `None` for routes that need parameters.
    pub href: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResolveQuery {
    location: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(state.shell.to_string())
}

async fn routes_handler(State(state): State<AppState>) -> Json<Vec<RouteSummary>> {
    let routes = state
        .routes
        .routes()
        .map(|route| RouteSummary {
            name: route.name().to_string(),
            path: route.pattern().to_string(),
            view: route.view(),
            href: state
                .routes
                .build_path(route.name(), &Params::new())
                .ok()
                .map(|path| format!("{}#{}", state.base, path)),
        })
        .collect();
    Json(routes)
}

async fn resolve_handler(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Response {
    let Some(input) = query.location else {
        return error_response(StatusCode::BAD_REQUEST, "missing `location` query parameter");
    };

    let location = match HashLocation::parse(&input) {
        Ok(location) => location,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    let resolution = state.routes.resolve_location(&location);
    metrics::record_resolution(resolution.outcome());
    tracing::debug!(location = %location, outcome = resolution.outcome(), "Resolved location");

    let status = match resolution {
        Resolution::Matched { .. } => StatusCode::OK,
        Resolution::NotFound { .. } => StatusCode::NOT_FOUND,
    };
    (status, Json(resolution)).into_response()
}

async fn fallback_handler(request: Request<Body>) -> impl IntoResponse {
    tracing::debug!(path = %request.uri().path(), "No server route; application paths belong in the fragment");
    (StatusCode::NOT_FOUND, "Not Found")
}

async fn track_metrics(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let response = next.run(request).await;
    metrics::record_request(&method, response.status().as_u16(), start);
    response
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}
