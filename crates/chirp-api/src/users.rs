use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::info;
use uuid::Uuid;

use chirp_types::api::{CreateUserRequest, UserResponse};
use chirp_types::models::User;

use crate::AppState;
use crate::error::ApiError;

pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let now = chrono::Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        email: req.email,
        created_at: now,
        updated_at: now,
    };

    // Run blocking DB insert off the async runtime
    let db = state.db.clone();
    let id = user.id.to_string();
    let email = user.email.clone();
    let created_at = now.to_rfc3339();
    tokio::task::spawn_blocking(move || db.create_user(&id, &email, &created_at, &created_at))
        .await
        .map_err(|e| ApiError::Persistence {
            message: "Failed to create user",
            source: anyhow::anyhow!("spawn_blocking join error: {}", e),
        })?
        .map_err(|e| ApiError::Persistence {
            message: "Failed to create user",
            source: e,
        })?;

    info!("Created user {}", user.id);
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
