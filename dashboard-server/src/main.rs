use dashboard_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(None, config.log_dir.as_deref());

    // 打印横幅
    print_banner();

    tracing::info!(
        environment = %config.environment,
        port = config.port,
        "Nightflow dashboard server starting..."
    );

    // 2. 启动前检查 (生产环境拒绝弱默认配置)
    config.production_checks()?;

    // 3. 初始化服务器状态
    let state = ServerState::initialize(&config).await;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
