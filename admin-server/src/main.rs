use admin_server::{AppState, Config, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 环境 (dotenv + 日志)
    dotenv::dotenv().ok();

    let config = Config::from_env();
    admin_server::init_logger_with_file(None, config.log_dir.as_deref());

    tracing::info!("CrmPlus admin server starting...");

    // 2. 初始化状态 (载入演示数据)
    let state = AppState::initialize(&config);

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
