use axum::{Json, extract::State};
use quill_common::{params::CredentialsParams, views::User};
use quill_db::storage::UserStore;
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::{context::ApiContext, error::ApiError};

#[cfg(test)]
mod tests;

/// Response for a successful registration.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    /// The created user, without the password hash.
    pub user: User,
}

/// Response for a successful login - includes the session token.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    /// Bearer token for subsequent requests, valid for seven days.
    pub token: String,
    pub user: User,
}

#[utoipa::path(
    post,
    path = "/api/register",
    tags = ["auth"],
    request_body(content = CredentialsParams, content_type = "application/json"),
    responses(
        (status = 200, description = "User created", body = RegisterResponse),
        (status = 400, description = "Missing fields or username taken"),
    )
)]
pub async fn register(
    State(ctx): State<ApiContext>,
    Json(params): Json<CredentialsParams>,
) -> Result<Json<RegisterResponse>, ApiError> {
    if params.username.is_empty() || params.password.is_empty() {
        return Err(ApiError::Validation("username and password are required"));
    }

    let user = ctx.db.create_user(&params.username, &params.password).await?;
    info!(%user, "registered new user");

    Ok(Json(RegisterResponse {
        message: "registered successfully".into(),
        user: user.into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/login",
    tags = ["auth"],
    request_body(content = CredentialsParams, content_type = "application/json"),
    responses(
        (status = 200, description = "Successful login", body = LoginResponse),
        (status = 400, description = "Unknown user or wrong password"),
    )
)]
pub async fn login(
    State(ctx): State<ApiContext>,
    Json(params): Json<CredentialsParams>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = ctx
        .db
        .find_user(&params.username)
        .await?
        .ok_or(ApiError::InvalidCredentials("user does not exist"))?;

    let valid = user
        .verify_password(&params.password)
        .map_err(quill_db::storage::StoreError::from)?;
    if !valid {
        return Err(ApiError::InvalidCredentials("wrong password"));
    }

    let caller = user.to_caller();
    let token = ctx.tokens.issue(&caller).map_err(|e| anyhow::anyhow!(e))?;
    info!(%user, "user logged in");

    Ok(Json(LoginResponse {
        message: "logged in successfully".into(),
        token,
        user: user.into(),
    }))
}
