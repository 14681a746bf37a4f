use anyhow::Result;
use clap::Parser;

use image_search_download::cli::Cli;
use image_search_download::config::Config;
use image_search_download::orchestrator::App;
use image_search_download::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 解析命令行参数
    let config = Config::from_cli(Cli::parse());

    // 初始化并运行应用
    App::new(config).run().await?;

    Ok(())
}
