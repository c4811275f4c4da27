//! Financial Report API 模块 (财务报告)

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reports", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{event_id}", get(handler::get_for_event))
        .layer(middleware::from_fn(require_permission("reports:read")))
}
