pub mod admin;
pub mod chirps;
pub mod error;
pub mod hits;
pub mod users;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use chirp_db::Database;

use crate::hits::HitCounter;

/// Deployment environment. Destructive admin operations are only allowed
/// in `Dev`; anything other than the literal "dev" maps to `Prod`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Dev,
    Prod,
}

impl Platform {
    pub fn parse(value: &str) -> Self {
        if value == "dev" { Self::Dev } else { Self::Prod }
    }
}

/// Shared application state for all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub hits: Arc<HitCounter>,
    pub platform: Platform,
    pub site_dir: PathBuf,
    pub metrics_template: PathBuf,
}

async fn healthz() -> &'static str {
    "OK"
}

pub fn router(state: AppState) -> Router {
    // Static assets are the only routes behind the hit counter.
    let site: Router = Router::new()
        .fallback_service(ServeDir::new(&state.site_dir))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            hits::count_hits,
        ));

    Router::new()
        .route("/api/healthz", get(healthz))
        .route("/api/validate_chirp", post(chirps::validate_chirp))
        .route("/api/users", post(users::create_user))
        .route("/admin/metrics", get(admin::metrics))
        .route("/admin/reset", post(admin::reset))
        .nest_service("/app", site)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
