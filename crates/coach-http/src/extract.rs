//! A `Json` extractor whose rejection is an [`HttpError`] instead of axum's
//! own plain-text `JsonRejection` (§4.6: every error response, wire-level or
//! domain-level, carries `{code, message}`).

use crate::error::HttpError;
use axum::extract::{FromRequest, Request};
use axum::Json;
use coach_engine::EngineError;
use serde::de::DeserializeOwned;

/// Drop-in replacement for `axum::Json` as a request extractor. Malformed
/// JSON and values that don't fit the target type (an invalid `gender`
/// string, for instance) are reported as `EngineError::Validation`, the same
/// path domain validation failures already take.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| EngineError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}
