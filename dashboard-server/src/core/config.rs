use anyhow::bail;

use crate::auth::JwtConfig;
use crate::auth::jwt::DEV_JWT_SECRET;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DASHBOARD_HOST | 0.0.0.0 | 监听地址 |
/// | DASHBOARD_PORT | 3000 | HTTP 服务端口 |
/// | DASHBOARD_JWT_SECRET | (dev fallback) | JWT 密钥 |
/// | DASHBOARD_USERNAME | admin | 管理员用户名 |
/// | DASHBOARD_PASSWORD | password | 管理员密码 |
/// | DASHBOARD_SEED_DEMO | true | 启动时加载演示数据 |
/// | DASHBOARD_LOG_DIR | (无) | 日志目录 (滚动文件输出) |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// DASHBOARD_PORT=8080 DASHBOARD_SEED_DEMO=false cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub host: String,
    /// HTTP API 服务端口
    pub port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 管理员账号
    pub username: String,
    /// 管理员密码 (启动时哈希，之后只保留在配置里用于重建状态)
    pub password: String,
    /// 是否加载演示数据
    pub seed_demo: bool,
    /// 日志目录; 设置后输出到按天滚动的文件
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let mut jwt = JwtConfig::default();
        if let Ok(secret) = std::env::var("DASHBOARD_JWT_SECRET") {
            jwt.secret = secret;
        }

        Self {
            host: std::env::var("DASHBOARD_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("DASHBOARD_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt,
            username: std::env::var("DASHBOARD_USERNAME").unwrap_or_else(|_| "admin".into()),
            password: std::env::var("DASHBOARD_PASSWORD").unwrap_or_else(|_| "password".into()),
            seed_demo: std::env::var("DASHBOARD_SEED_DEMO")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_dir: std::env::var("DASHBOARD_LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(
        username: impl Into<String>,
        password: impl Into<String>,
        seed_demo: bool,
    ) -> Self {
        let mut config = Self::from_env();
        config.username = username.into();
        config.password = password.into();
        config.seed_demo = seed_demo;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// 生产环境启动前检查
    ///
    /// 开发环境只告警，生产环境直接拒绝启动。
    pub fn production_checks(&self) -> anyhow::Result<()> {
        if self.jwt.secret == DEV_JWT_SECRET {
            if self.is_production() {
                bail!("DASHBOARD_JWT_SECRET must be set in production");
            }
            tracing::warn!("Using the development JWT secret; set DASHBOARD_JWT_SECRET");
        }

        if self.jwt.secret.len() < 32 {
            bail!("DASHBOARD_JWT_SECRET must be at least 32 characters long");
        }

        if self.username == "admin" && self.password == "password" {
            if self.is_production() {
                bail!("Default admin credentials are not allowed in production");
            }
            tracing::warn!("Using default admin credentials; set DASHBOARD_USERNAME/PASSWORD");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = Config::with_overrides("admin", "password", true);
        assert_eq!(config.jwt.issuer, "nightflow-dashboard");
        assert_eq!(config.jwt.audience, "dashboard-client");
        assert_eq!(config.jwt.expiration_minutes, 1440);
        assert!(!config.is_production());
    }

    #[test]
    fn test_production_checks_reject_defaults() {
        let mut config = Config::with_overrides("admin", "password", false);
        config.environment = "production".to_string();

        // Dev secret and default credentials both refuse to start
        assert!(config.production_checks().is_err());

        config.jwt.secret = "a-proper-production-secret-of-enough-length".to_string();
        assert!(config.production_checks().is_err());

        config.username = "operator".to_string();
        config.password = "s3cret-enough".to_string();
        assert!(config.production_checks().is_ok());

        // Short secrets are rejected in any environment
        config.jwt.secret = "short".to_string();
        assert!(config.production_checks().is_err());
    }
}
