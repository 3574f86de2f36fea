use axum::extract::State;
use axum::response::{Html, IntoResponse};
use tracing::info;

use crate::error::ApiError;
use crate::{AppState, Platform};

/// Placeholder in the metrics template replaced with the current hit count.
const HITS_PLACEHOLDER: &str = "{hits}";

pub async fn metrics(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let template = tokio::fs::read_to_string(&state.metrics_template).await?;
    let hits = state.hits.snapshot();
    Ok(Html(template.replace(HITS_PLACEHOLDER, &hits.to_string())))
}

pub async fn reset(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    if state.platform != Platform::Dev {
        return Err(ApiError::ResetForbidden);
    }

    // The counter is zeroed before the user wipe; the two resets are not
    // transactional, so a failed wipe leaves the counter already at 0.
    state.hits.reset();

    let db = state.db.clone();
    tokio::task::spawn_blocking(move || db.reset_users())
        .await
        .map_err(|e| ApiError::Persistence {
            message: "Failed to reset users",
            source: anyhow::anyhow!("spawn_blocking join error: {}", e),
        })?
        .map_err(|e| ApiError::Persistence {
            message: "Failed to reset users",
            source: e,
        })?;

    info!("Admin reset: hits counter and users cleared");
    Ok("Hits and users reset to 0")
}
