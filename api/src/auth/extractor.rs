use std::future::Future;

use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use quill_common::caller::Caller;

use crate::{context::ApiContext, error::ApiError};

const MISSING_TOKEN: &str = "please log in first";
const BAD_TOKEN: &str = "session expired, please log in again";

/// Extractor that REQUIRES a valid bearer token.
///
/// Returns 401 Unauthorized if no `Authorization: Bearer <token>` header is
/// present or the token fails verification. The two cases produce distinct
/// messages but the same status.
///
/// # Examples
///
/// ```rust,ignore
/// use quill_api::auth::Auth;
///
/// pub async fn delete_article(
///     Auth(caller): Auth,  // ← extracts the authenticated caller
///     Path(id): Path<i64>,
/// ) -> Result<(), ApiError> {
///     // ... delete article as `caller`
///     Ok(())
/// }
/// ```
pub struct Auth(pub Caller);

impl FromRequestParts<ApiContext> for Auth {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &ApiContext,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let keys = state.tokens.clone();
        let token = bearer_token(parts);
        async move {
            let token = token.ok_or(ApiError::Unauthorized(MISSING_TOKEN))?;
            let claims = keys
                .verify(&token)
                .map_err(|_| ApiError::Unauthorized(BAD_TOKEN))?;
            Ok(Auth(claims.into()))
        }
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
/// A missing header, a different scheme, or a blank token all count as
/// "no token supplied".
fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
