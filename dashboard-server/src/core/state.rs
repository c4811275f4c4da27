use std::sync::Arc;

use crate::auth::{CredentialVerifier, JwtService, StaticCredentials};
use crate::core::Config;
use crate::db::{EventRepository, MemoryRepository, seed};

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是仪表盘服务的核心数据结构，持有所有服务的共享引用。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | repo | Arc<dyn EventRepository> | 活动/场次存储 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | credentials | Arc<dyn CredentialVerifier> | 登录凭证校验 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 活动与场次存储
    pub repo: Arc<dyn EventRepository>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 登录凭证校验
    pub credentials: Arc<dyn CredentialVerifier>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 方法代替
    pub fn new(
        config: Config,
        repo: Arc<dyn EventRepository>,
        jwt_service: Arc<JwtService>,
        credentials: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            config,
            repo,
            jwt_service,
            credentials,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 存储 (内存仓库)
    /// 2. 演示数据 (当 `seed_demo` 开启)
    /// 3. 凭证校验与 JWT 服务
    ///
    /// # Panics
    ///
    /// 密码哈希失败或演示数据写入失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        let repo: Arc<dyn EventRepository> = Arc::new(MemoryRepository::new());

        if config.seed_demo {
            seed::load_demo_data(repo.as_ref())
                .await
                .expect("Failed to load demo data");
            tracing::info!("Demo data loaded");
        }

        let credentials: Arc<dyn CredentialVerifier> = Arc::new(
            StaticCredentials::new(config.username.clone(), &config.password)
                .expect("Failed to hash admin password"),
        );
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Self::new(config.clone(), repo, jwt_service, credentials)
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
