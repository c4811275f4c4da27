//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/health | GET | 健康检查 | 无 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "code": "0",
//!   "message": "Success",
//!   "data": {
//!     "status": "healthy",
//!     "version": "0.1.0",
//!     "uptime_seconds": 42,
//!     "store": { "events": 5, "entries": 5 }
//!   }
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::SystemTime;

use crate::AppError;
use crate::core::ServerState;
use crate::utils::{AppResponse, ok};

/// 健康检查路由 - 公共路由 (无需认证)
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (healthy | error)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 运行时间 (秒)
    uptime_seconds: u64,
    /// 存储计数
    store: StoreCounts,
}

/// 存储计数
#[derive(Serialize)]
pub struct StoreCounts {
    events: usize,
    entries: usize,
}

// 服务器启动时间 (懒加载静态变量)
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn get_uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// 基础健康检查
///
/// 包含存储计数，便于快速确认种子数据已加载
pub async fn health(
    State(state): State<ServerState>,
) -> Result<Json<AppResponse<HealthResponse>>, AppError> {
    let events = state.repo.list_events().await?;
    let entries = state.repo.list_entries(None).await?;

    Ok(ok(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: get_uptime_seconds(),
        store: StoreCounts {
            events: events.len(),
            entries: entries.len(),
        },
    }))
}
