//! 命令行接口定义

use std::path::PathBuf;

use clap::Parser;

/// 并发抓取多个图片搜索引擎的结果，并把图片批量下载到按目标划分的目录
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// 搜索关键词（必填）
    #[arg(short, long)]
    pub query: String,

    /// 逗号分隔的搜索目标: google, bing, yandex 或 all
    #[arg(short, long, default_value = "all")]
    pub targets: String,

    /// 图片保存根目录
    #[arg(short, long, default_value = "images")]
    pub out: String,

    /// 单个目标的搜索超时（秒）
    #[arg(long, default_value_t = 60)]
    pub timeout: u64,

    /// Chrome/Chromium 可执行文件路径
    #[arg(long, env = "CHROME_EXECUTABLE")]
    pub chrome: Option<PathBuf>,

    /// 显示详细日志（打印每个候选图片 URL）
    #[arg(short, long)]
    pub verbose: bool,
}
