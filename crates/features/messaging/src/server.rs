//! HTTP routes of the messaging slice.

use crate::Messaging;
use axum::extract::State;
use herald_domain::constants::MESSAGING_TAG;
use herald_kernel::server::{ApiState, ApiStateError};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn messaging_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(primary_send)).routes(routes!(qualifier_send))
}

/// Send through the primary sender
#[utoipa::path(
    get,
    path = "/api/primary/send",
    responses((status = OK, description = "Message dispatched", body = String, content_type = "text/plain")),
    tag = MESSAGING_TAG,
)]
#[allow(clippy::unused_async)]
async fn primary_send(State(state): State<ApiState>) -> Result<&'static str, ApiStateError> {
    Ok(state.try_get_slice::<Messaging>()?.bindings.primary.send())
}

/// Send through the configured qualifier
#[utoipa::path(
    get,
    path = "/api/qualifier/send",
    responses((status = OK, description = "Message dispatched", body = String, content_type = "text/plain")),
    tag = MESSAGING_TAG,
)]
#[allow(clippy::unused_async)]
async fn qualifier_send(State(state): State<ApiState>) -> Result<&'static str, ApiStateError> {
    Ok(state.try_get_slice::<Messaging>()?.bindings.qualified.send())
}
