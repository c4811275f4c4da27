//! Split Sheet API 模块 (分成表编辑)

mod handler;

use axum::{Router, middleware, routing::post};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/splits", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/rebalance", post(handler::rebalance))
        .layer(middleware::from_fn(require_permission("events:write")))
}
