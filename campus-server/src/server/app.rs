use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_graphql::{Request, Response as GraphQLResponse};
use axum::{
    extract::{Json, State},
    http::{HeaderValue, Method, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use campus_core::AppContext;
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::health;
use crate::graphql::{build_schema, GraphQLContext, GraphQLSchema};

#[derive(Clone)]
pub struct AppState {
    pub graphql_schema: GraphQLSchema,
}

pub fn create_app(db: DatabaseConnection, cors_origin: Option<&str>) -> Result<Router> {
    let app = Arc::new(AppContext::new(db));
    let state = AppState {
        graphql_schema: build_schema(GraphQLContext::new(app)),
    };

    let allowed_origin = match cors_origin {
        Some(origin) => Some(
            origin
                .parse::<HeaderValue>()
                .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
        ),
        None => None,
    };
    let cors = match allowed_origin {
        Some(origin) => CorsLayer::new().allow_origin(origin),
        None => CorsLayer::new().allow_origin(Any),
    }
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers(Any)
    .allow_credentials(false);

    let router = Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/graphql",
            get(graphql_playground)
                .post(graphql_handler)
                .options(|| async { StatusCode::OK }),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state);

    Ok(router)
}

async fn graphql_handler(
    State(state): State<AppState>,
    Json(req): Json<Request>,
) -> Json<GraphQLResponse> {
    tracing::debug!("GraphQL request received");
    let response = state.graphql_schema.execute(req).await;
    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "GraphQL request completed with errors");
    } else {
        tracing::debug!("GraphQL request completed");
    }
    Json(response)
}

async fn graphql_playground() -> impl IntoResponse {
    Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}
