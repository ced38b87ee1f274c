use axum::{
    Json,
    extract::{Path, State},
};
use quill_common::{params::CreateArticleParams, views::Article};
use quill_db::storage::ArticleStore;
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::{auth::Auth, context::ApiContext, error::ApiError};

/// Response for article creation - echoes the stored article back.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateArticleResponse {
    pub message: String,
    pub article: Article,
}

/// Response for operations that only confirm success.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    tags = ["articles"],
    responses(
        (status = 200, description = "All articles, newest day first", body = [Article]),
    )
)]
pub async fn list_articles(State(ctx): State<ApiContext>) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = ctx.db.list_articles().await?;
    Ok(Json(articles.into_iter().map(Article::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/articles",
    tags = ["articles"],
    request_body(content = CreateArticleParams, content_type = "application/json"),
    responses(
        (status = 200, description = "Article published", body = CreateArticleResponse),
        (status = 400, description = "Missing fields"),
        (status = 401, description = "No or invalid token"),
    )
)]
pub async fn create_article(
    State(ctx): State<ApiContext>,
    Auth(caller): Auth,
    Json(params): Json<CreateArticleParams>,
) -> Result<Json<CreateArticleResponse>, ApiError> {
    if params.title.is_empty() || params.content.is_empty() {
        return Err(ApiError::Validation("title and content are required"));
    }

    let article = ctx
        .db
        .create_article(caller.user_id, &params.title, &params.content)
        .await?;
    info!(article_id = article.id, author = %caller.username, "published article");

    Ok(Json(CreateArticleResponse {
        message: "article published".into(),
        article: article.into(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    tags = ["articles"],
    params(("id" = i64, Path, description = "Id of the article to delete")),
    responses(
        (status = 200, description = "Article deleted", body = MessageResponse),
        (status = 401, description = "No or invalid token"),
        (status = 403, description = "Caller is neither the author nor an admin"),
        (status = 404, description = "No such article"),
    )
)]
pub async fn delete_article(
    State(ctx): State<ApiContext>,
    Auth(caller): Auth,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    ctx.db.delete_article(&caller, id).await?;
    info!(article_id = id, user = %caller.username, "deleted article");

    Ok(Json(MessageResponse {
        message: "article deleted".into(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quill_common::caller::Caller;
    use quill_db::storage::{StoreError, json::JsonStore};
    use tempfile::TempDir;

    use super::*;
    use crate::auth::jwt::TokenKeys;
    use crate::config::QuillApiConfig;

    fn test_context(dir: &TempDir) -> ApiContext {
        let config = QuillApiConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            data_file: dir.path().join("database.json"),
            dump_openapi: false,
            jwt_secret: Some("test-secret".into()),
            jwt_secret_file: None,
        };
        let db = Arc::new(JsonStore::new(config.data_file.clone()));
        let tokens = TokenKeys::from_secret("test-secret");
        ApiContext::new(config, db, tokens)
    }

    fn caller(user_id: i64, is_admin: bool) -> Caller {
        Caller {
            user_id,
            username: format!("user{user_id}"),
            is_admin,
        }
    }

    fn params(title: &str, content: &str) -> Json<CreateArticleParams> {
        Json(CreateArticleParams {
            title: title.into(),
            content: content.into(),
        })
    }

    #[tokio::test]
    async fn create_then_list_shows_the_article() {
        let dir = TempDir::new().unwrap();
        let ctx = test_context(&dir);

        let Json(created) = create_article(
            State(ctx.clone()),
            Auth(caller(7, false)),
            params("a title", "a body"),
        )
        .await
        .unwrap();

        assert_eq!(created.article.author_id, 7);
        assert_eq!(created.article.date, chrono::Utc::now().date_naive());

        let Json(listed) = list_articles(State(ctx)).await.unwrap();
        assert_eq!(listed, vec![created.article]);
    }

    #[tokio::test]
    async fn create_rejects_missing_fields() {
        let dir = TempDir::new().unwrap();
        let ctx = test_context(&dir);

        let err = create_article(State(ctx.clone()), Auth(caller(7, false)), params("", "body"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let err = create_article(State(ctx), Auth(caller(7, false)), params("title", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_is_limited_to_author_or_admin() {
        let dir = TempDir::new().unwrap();
        let ctx = test_context(&dir);

        let Json(created) = create_article(
            State(ctx.clone()),
            Auth(caller(7, false)),
            params("a title", "a body"),
        )
        .await
        .unwrap();
        let id = created.article.id;

        // A stranger is refused and the article survives.
        let err = delete_article(State(ctx.clone()), Auth(caller(8, false)), Path(id))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Storage(StoreError::PermissionDenied)));

        let Json(listed) = list_articles(State(ctx.clone())).await.unwrap();
        assert_eq!(listed.len(), 1);

        // The author may delete; afterwards the list is empty.
        delete_article(State(ctx.clone()), Auth(caller(7, false)), Path(id))
            .await
            .unwrap();
        let Json(listed) = list_articles(State(ctx.clone())).await.unwrap();
        assert!(listed.is_empty());

        // Deleting again reports not found.
        let err = delete_article(State(ctx), Auth(caller(7, false)), Path(id))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Storage(StoreError::NotFound)));
    }
}
