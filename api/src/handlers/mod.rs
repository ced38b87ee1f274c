use axum::extract::State;
use quill_db::storage::Storage;

use crate::{context::ApiContext, error::ApiError};

pub mod articles;
pub mod auth;

#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses((status = 200, description = "Service is healthy"))
)]
pub async fn health_check(State(ctx): State<ApiContext>) -> Result<&'static str, ApiError> {
    ctx.db.ping().await?;
    Ok("Healthy")
}
