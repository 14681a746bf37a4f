use std::path::PathBuf;

use crate::cli::Cli;
use crate::models::SearchTarget;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 搜索关键词
    pub query: String,
    /// 目标名列表（原始字符串，调度时解析）
    pub targets: Vec<String>,
    /// 图片保存根目录
    pub output_root: PathBuf,
    /// 单个目标的搜索超时（秒）
    pub search_timeout_secs: u64,
    /// Chrome/Chromium 可执行文件路径（不设置时使用系统默认）
    pub chrome_executable: Option<PathBuf>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query: String::new(),
            targets: SearchTarget::all()
                .iter()
                .map(|target| target.name().to_string())
                .collect(),
            output_root: PathBuf::from("images"),
            search_timeout_secs: 60,
            chrome_executable: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从命令行参数构建配置
    pub fn from_cli(cli: Cli) -> Self {
        let default = Self::default();
        let targets = if cli.targets.trim() == "all" {
            default.targets
        } else {
            cli.targets
                .split(',')
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect()
        };

        Self {
            query: cli.query,
            targets,
            output_root: PathBuf::from(cli.out),
            search_timeout_secs: cli.timeout,
            chrome_executable: cli.chrome,
            verbose_logging: cli.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli_all_expands_to_every_target() {
        let cli = Cli::parse_from(["image_search_download", "--query", "cats"]);
        let config = Config::from_cli(cli);

        assert_eq!(config.query, "cats");
        assert_eq!(config.targets, vec!["google", "bing", "yandex"]);
        assert_eq!(config.output_root, PathBuf::from("images"));
        assert_eq!(config.search_timeout_secs, 60);
    }

    #[test]
    fn test_from_cli_splits_and_trims_targets() {
        let cli = Cli::parse_from([
            "image_search_download",
            "--query",
            "cats",
            "--targets",
            " google , bing ,,yandex",
        ]);
        let config = Config::from_cli(cli);

        assert_eq!(config.targets, vec!["google", "bing", "yandex"]);
    }

    #[test]
    fn test_from_cli_keeps_unknown_names_for_dispatch() {
        // 未知目标名不在这里过滤，由调度器上报后跳过
        let cli = Cli::parse_from([
            "image_search_download",
            "--query",
            "cats",
            "--targets",
            "google,altavista",
        ]);
        let config = Config::from_cli(cli);

        assert_eq!(config.targets, vec!["google", "altavista"]);
    }
}
