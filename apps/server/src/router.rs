use axum::Router;
use herald::kernel::server::ApiState;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "Herald", description = "Primary and qualified message senders"))]
struct ApiDoc;

/// Builds the full application: system and messaging routes, request tracing and API docs.
pub fn init(state: ApiState) -> Router {
    let (routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(herald::server::router::system_router())
        .merge(herald::server::router::messaging_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    Router::new().merge(routes).merge(Scalar::with_url("/api/docs", api_doc))
}
