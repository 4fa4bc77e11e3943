use anyhow::Result;
use question_file_service::{logger, Config, Server};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行服务
    Server::initialize(config).await?.run().await?;

    Ok(())
}
