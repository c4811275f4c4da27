//! Event API 模块 (活动管理)

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/events", routes())
}

fn routes() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .layer(middleware::from_fn(require_permission("events:read")));

    // An event's entry listing is guarded by the entries permission
    let entry_routes = Router::new()
        .route("/{id}/entries", get(handler::list_entries))
        .layer(middleware::from_fn(require_permission("entries:read")));

    let write_routes = Router::new()
        .route("/", axum::routing::post(handler::create))
        .route("/{id}", axum::routing::put(handler::update))
        .route("/{id}", axum::routing::delete(handler::delete))
        .layer(middleware::from_fn(require_permission("events:write")));

    read_routes.merge(entry_routes).merge(write_routes)
}
