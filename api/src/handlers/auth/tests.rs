use std::sync::Arc;

use axum::{Json, extract::State};
use quill_common::params::CredentialsParams;
use quill_db::storage::json::JsonStore;
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

fn credentials(username: &str, password: &str) -> Json<CredentialsParams> {
    Json(CredentialsParams {
        username: username.into(),
        password: password.into(),
    })
}

#[tokio::test]
async fn register_returns_the_public_user() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);

    let Json(res) = register(State(ctx), credentials("alice", "hunter2"))
        .await
        .unwrap();

    assert_eq!(res.user.username, "alice");
    assert!(!res.user.is_admin);
    assert_eq!(res.message, "registered successfully");
}

#[tokio::test]
async fn register_rejects_missing_fields() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);

    let err = register(State(ctx.clone()), credentials("", "pw"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    let err = register(State(ctx), credentials("alice", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn register_rejects_duplicate_usernames() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);

    register(State(ctx.clone()), credentials("alice", "hunter2"))
        .await
        .unwrap();
    let err = register(State(ctx), credentials("alice", "other"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApiError::Storage(quill_db::storage::StoreError::UsernameTaken)
    ));
}

#[tokio::test]
async fn login_issues_a_token_that_decodes_to_the_user() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);

    let Json(registered) = register(State(ctx.clone()), credentials("alice", "hunter2"))
        .await
        .unwrap();

    let Json(res) = login(State(ctx.clone()), credentials("alice", "hunter2"))
        .await
        .unwrap();
    assert_eq!(res.user, registered.user);

    let claims = ctx.tokens.verify(&res.token).unwrap();
    assert_eq!(claims.user_id, registered.user.id);
    assert_eq!(claims.username, "alice");
    assert!(!claims.is_admin);
}

#[tokio::test]
async fn login_with_the_wrong_password_fails() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);

    register(State(ctx.clone()), credentials("alice", "hunter2"))
        .await
        .unwrap();

    let err = login(State(ctx), credentials("alice", "hunter3"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidCredentials("wrong password")));
}

#[tokio::test]
async fn login_with_an_unknown_user_fails() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);

    let err = login(State(ctx), credentials("nobody", "pw")).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::InvalidCredentials("user does not exist")
    ));
}
