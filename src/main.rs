use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use user_selector::{
    app::{users::UserService, AppState},
    build_router,
    config::load_config,
    infrastructure::Logger,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_path) = load_config()?;
    Logger::init(&config.logging)?;

    match &config_path {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let user_service = UserService::with_sample_users();
    info!("已初始化 {} 个示例用户", user_service.count().await);

    let app = build_router(AppState::new(user_service), &config.http);

    let address = config.http.socket_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("无法绑定到 {}", address))?;

    info!("服务器运行在 http://{}", address);
    info!("   GET  /users          - 获取所有用户");
    info!("   POST /users          - 创建新用户");
    info!("   GET  /users/adults   - 成年用户");
    info!("   GET  /users/random   - 随机半数用户");
    info!("   GET  /day            - 今天是星期几");
    info!("   POST /products       - 创建产品并计算总价");

    axum::serve(listener, app).await.context("服务器运行失败")?;

    Ok(())
}
