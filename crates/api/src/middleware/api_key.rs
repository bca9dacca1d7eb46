//! Shared-secret extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use portfolio_core::error::CoreError;

use crate::error::AppError;
use crate::query::last_value;
use crate::state::AppState;

/// Query parameter carrying the shared secret.
pub const API_KEY_PARAM: &str = "api_key";

/// Proof that the request carried the configured API key.
///
/// List it as the first extractor of a handler so the key is checked before
/// any path, query or body parsing:
///
/// ```ignore
/// async fn my_handler(_: RequireApiKey, State(state): State<AppState>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireApiKey;

impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let provided = last_value(parts.uri.query(), API_KEY_PARAM);

        match provided {
            Some(key) if state.config.api_key.matches(&key) => Ok(RequireApiKey),
            Some(_) => {
                tracing::warn!(path = %parts.uri.path(), "Rejected request with invalid API key");
                Err(AppError::Core(CoreError::Unauthorized))
            }
            None => {
                tracing::warn!(path = %parts.uri.path(), "Rejected request without API key");
                Err(AppError::Core(CoreError::Unauthorized))
            }
        }
    }
}
