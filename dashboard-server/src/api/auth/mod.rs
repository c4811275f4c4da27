//! 认证 API
//!
//! 提供登录、登出和当前用户查询接口。`/api/auth/login` 是公开路由,
//! 其余接口需要有效的 Bearer token。

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub mod handler;

/// 认证路由
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/logout", post(handler::logout))
        .route("/me", get(handler::me))
}
