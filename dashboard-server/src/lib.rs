//! Nightflow Dashboard Server - 夜店活动经济仪表盘后端
//!
//! # 架构概述
//!
//! 本模块是仪表盘后端的主入口，提供以下核心功能：
//!
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **存储** (`db`): 内存仓库 + 演示种子数据
//! - **报告** (`reports`): 场次财务报告推导
//! - **分成表** (`splits`): 分成表编辑与校验
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! dashboard-server/src/
//! ├── core/     # 配置、状态、服务器
//! ├── auth/     # JWT 认证、权限
//! ├── api/      # HTTP 路由和处理器
//! ├── db/       # 存储层
//! ├── reports/  # 财务报告计算
//! ├── splits/   # 分成表编辑
//! └── utils/    # 错误、日志、校验
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod reports;
pub mod splits;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    _   ___       __    __  ______
   / | / (_)___ _/ /_  / /_/ __/ /___ _      __
  /  |/ / / __ `/ __ \/ __/ /_/ / __ \ | /| / /
 / /|  / / /_/ / / / / /_/ __/ / /_/ / |/ |/ /
/_/ |_/_/\__, /_/ /_/\__/_/ /_/\____/|__/|__/
        /____/
    "#
    );
}
