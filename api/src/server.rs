use std::sync::Arc;

use axum::{
    Router,
    extract::MatchedPath,
    http::{HeaderName, Request},
};
use quill_common::views::ErrorResponse;
use quill_db::storage::json::JsonStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info_span;
use utoipa::{
    ToSchema,
    openapi::{Info, OpenApi, RefOr, path::Operation},
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{auth::jwt::TokenKeys, config::QuillApiConfig, context::ApiContext, handlers};

const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn make(cfg: QuillApiConfig) -> anyhow::Result<(Router, OpenApi)> {
    let secret = cfg.get_jwt_secret()?;
    let db = Arc::new(JsonStore::new(cfg.data_file.clone()));
    let context = ApiContext::new(cfg, db, TokenKeys::from_secret(&secret));

    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<_>| {
                // Log the request ID as generated
                let request_id = req.headers().get(REQUEST_ID_HEADER);
                let span = info_span!(
                    "http_request",
                    method = req.method().to_string(),
                    request_id = Option::<&str>::None,
                    path = Option::<&str>::None,
                );

                if let Some(request_id) = request_id {
                    if let Ok(request_id) = request_id.to_str() {
                        span.record("request_id", request_id);
                    }
                };

                if let Some(path) = req.extensions().get::<MatchedPath>() {
                    span.record("path", path.as_str())
                } else {
                    span.record("path", req.uri().path())
                };

                span
            }),
        )
        // The frontend is served separately; the original allows any origin.
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::new(x_request_id));

    let openapi = OpenApi::builder()
        .info(
            Info::builder()
                .title("Quill API Reference")
                .description(Some("A minimal blogging backend"))
                .version(env!("CARGO_PKG_VERSION")),
        )
        .build();

    let (r, mut a) = OpenApiRouter::with_openapi(openapi)
        .routes(routes!(handlers::health_check))
        .routes(routes!(handlers::auth::register))
        .routes(routes!(handlers::auth::login))
        .routes(routes!(
            handlers::articles::list_articles,
            handlers::articles::create_article
        ))
        .routes(routes!(handlers::articles::delete_article))
        .layer(middleware)
        .with_state(context)
        .split_for_parts();

    a.paths.paths.iter_mut().for_each(|(_path, item)| {
        apply_default_errors(&mut item.get);
        apply_default_errors(&mut item.post);
        apply_default_errors(&mut item.delete);
    });

    Ok((r, a))
}

fn apply_default_errors(item: &mut Option<Operation>) {
    if let Some(item) = item {
        item.responses.responses.insert(
            "500".into(),
            RefOr::Ref(
                utoipa::openapi::Ref::builder()
                    .summary("Internal server error")
                    .ref_location_from_schema_name(ErrorResponse::name())
                    .build(),
            ),
        );
    }
}
