//! Application state, HTTP router construction and the serve loop.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_graphql::http::GraphiQLSource;
use async_graphql::{ObjectType, Schema, SubscriptionType};
use async_graphql_axum::{GraphQLProtocol, GraphQLRequest, GraphQLResponse, GraphQLWebSocket};
use axum::Router;
use axum::extract::{FromRef, State, WebSocketUpgrade};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::Config;
use crate::db::Database;
use crate::graphql::crud::{self, CrudOptions};
use crate::graphql::events::{self, EventsOptions};
use crate::graphql::users;
use crate::service_kind::ServiceKind;

/// Shared state for HTTP handlers, generic over the schema being served.
pub struct AppState<Q, M, S> {
    pub config: Arc<Config>,
    pub schema: Schema<Q, M, S>,
}

impl<Q, M, S> Clone for AppState<Q, M, S> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            schema: self.schema.clone(),
        }
    }
}

impl<Q, M, S> FromRef<AppState<Q, M, S>> for Arc<Config> {
    fn from_ref(state: &AppState<Q, M, S>) -> Self {
        state.config.clone()
    }
}

/// Build the full Axum router: health checks, /graphql, /graphql/ws and layers.
pub fn build_app<Q, M, S>(state: AppState<Q, M, S>) -> Router
where
    Q: ObjectType + 'static,
    M: ObjectType + 'static,
    S: SubscriptionType + 'static,
{
    Router::new()
        .merge(api::health::router::<AppState<Q, M, S>>())
        .route("/graphql", get(graphiql).post(graphql_handler::<Q, M, S>))
        .route("/graphql/ws", get(graphql_ws_handler::<Q, M, S>))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the schema selected by `config.service` and serve it until Ctrl-C.
pub async fn run(config: Config) -> Result<()> {
    let config = Arc::new(config);

    match config.service {
        ServiceKind::Events => {
            let db = Database::events_catalog(config.book_events_capacity);
            let options = EventsOptions {
                legacy_add_book_error: config.legacy_add_book_error,
            };
            tracing::info!(?options, "Events schema built");
            serve(config.clone(), events::build_schema(db, options)).await
        }
        ServiceKind::Crud => {
            let options = CrudOptions {
                legacy_authors_query: config.legacy_authors_query,
            };
            tracing::info!(?options, "CRUD schema built");
            serve(config.clone(), crud::build_schema(Database::crud_catalog(), options)).await
        }
        ServiceKind::Users => {
            tracing::info!("Users schema built");
            serve(config.clone(), users::build_schema()).await
        }
    }
}

async fn serve<Q, M, S>(config: Arc<Config>, schema: Schema<Q, M, S>) -> Result<()>
where
    Q: ObjectType + 'static,
    M: ObjectType + 'static,
    S: SubscriptionType + 'static,
{
    let addr = config.socket_addr();
    let app = build_app(AppState {
        config: config.clone(),
        schema,
    });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(service = %config.service, "Listening on {}", addr);
    tracing::info!("GraphQL playground: http://localhost:{}/graphql", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("axum::serve")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

/// GraphQL query/mutation handler
async fn graphql_handler<Q, M, S>(
    State(state): State<AppState<Q, M, S>>,
    req: GraphQLRequest,
) -> GraphQLResponse
where
    Q: ObjectType + 'static,
    M: ObjectType + 'static,
    S: SubscriptionType + 'static,
{
    state.schema.execute(req.into_inner()).await.into()
}

/// GraphiQL interactive playground (only for browsers)
async fn graphiql(headers: HeaderMap) -> impl IntoResponse {
    let accepts_html = headers
        .get(axum::http::header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/html"))
        .unwrap_or(false);

    if accepts_html {
        axum::response::Html(
            GraphiQLSource::build()
                .endpoint("/graphql")
                .subscription_endpoint("/graphql/ws")
                .finish(),
        )
        .into_response()
    } else {
        (
            axum::http::StatusCode::METHOD_NOT_ALLOWED,
            axum::Json(serde_json::json!({
                "error": "GET requests are not supported for GraphQL queries. Use POST with Content-Type: application/json"
            })),
        )
            .into_response()
    }
}

/// GraphQL WebSocket handler for subscriptions
async fn graphql_ws_handler<Q, M, S>(
    State(state): State<AppState<Q, M, S>>,
    protocol: GraphQLProtocol,
    ws: WebSocketUpgrade,
) -> impl IntoResponse
where
    Q: ObjectType + 'static,
    M: ObjectType + 'static,
    S: SubscriptionType + 'static,
{
    let schema = state.schema.clone();
    ws.protocols(["graphql-transport-ws", "graphql-ws"])
        .on_upgrade(move |socket| GraphQLWebSocket::new(socket, schema, protocol).serve())
}
