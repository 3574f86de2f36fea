use axum::Json;

use chirp_types::api::{ValidateChirpRequest, ValidateChirpResponse};

use crate::error::ApiError;

/// Maximum chirp length, counted in Unicode scalar values rather than bytes
/// so multi-byte text is not under-counted.
pub const MAX_CHIRP_LEN: usize = 140;

const BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];
const MASK: &str = "****";

/// Validate a chirp body and produce its sanitized form.
///
/// Over-long bodies are rejected outright, never truncated. Otherwise the
/// body is split on single spaces (runs of spaces yield empty tokens, which
/// survive untouched) and any token whose lowercased form contains a banned
/// word as a substring is replaced wholesale with the mask. Whole-token
/// masking on a mere substring hit is intentional.
pub fn validate(body: &str) -> Result<String, ApiError> {
    if body.chars().count() > MAX_CHIRP_LEN {
        return Err(ApiError::ChirpTooLong);
    }

    let cleaned = body
        .split(' ')
        .map(|token| {
            let lowered = token.to_lowercase();
            if BANNED_WORDS.iter().any(|word| lowered.contains(word)) {
                MASK
            } else {
                token
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    Ok(cleaned)
}

pub async fn validate_chirp(
    Json(req): Json<ValidateChirpRequest>,
) -> Result<Json<ValidateChirpResponse>, ApiError> {
    let cleaned_body = validate(&req.body)?;
    Ok(Json(ValidateChirpResponse { cleaned_body }))
}
