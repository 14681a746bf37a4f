//! 目标调度器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责多个搜索目标的调度和汇总。
//!
//! ## 核心功能
//!
//! 1. **目标解析**：把命令行传入的目标名解析为 SearchTarget，
//!    未知目标上报后跳过，重复目标折叠
//! 2. **并发调度**：每个目标一个独立任务（tokio::spawn），互不影响
//! 3. **失败隔离**：单个目标的失败在汇合点记录，不取消兄弟任务
//! 4. **汇合语义**：所有目标任务结束后才返回
//! 5. **全局统计**：汇总所有目标的处理结果并输出最终报告
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个目标的细节，委托给 workflow::TargetFlow
//! - **可替换来源**：对 UrlSource 泛型，测试用假来源即可驱动整个调度

use std::sync::Arc;

use anyhow::Result;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::engines::{BrowserSource, UrlSource};
use crate::error::TargetError;
use crate::models::SearchTarget;
use crate::services::BatchStats;
use crate::workflow::{TargetCtx, TargetFlow};

/// 调度统计
#[derive(Debug, Default, Clone)]
pub struct DispatchStats {
    /// 命令行请求的目标条目数（含未知与重复）
    pub requested: usize,
    /// 完整跑完搜索与下载的目标数
    pub completed: usize,
    /// 失败的目标数
    pub failed: usize,
    /// 未知目标条目数
    pub unknown_targets: usize,
    /// 下载成功的图片总数
    pub images_downloaded: usize,
    /// 下载失败的图片总数
    pub images_failed: usize,
}

/// 应用主结构
pub struct App<S> {
    config: Config,
    source: Arc<S>,
}

impl App<BrowserSource> {
    /// 使用无头浏览器来源初始化应用
    pub fn new(config: Config) -> Self {
        let source = Arc::new(BrowserSource::new(&config));
        Self::with_source(config, source)
    }
}

impl<S> App<S>
where
    S: UrlSource + 'static,
{
    /// 使用自定义 URL 来源初始化应用
    pub fn with_source(config: Config, source: Arc<S>) -> Self {
        Self { config, source }
    }

    /// 运行应用主逻辑
    ///
    /// 每个目标一个独立任务，全部结束后输出最终报告。
    /// 目标级失败只计入统计，永远不会从这里向上冒泡
    pub async fn run(&self) -> Result<DispatchStats> {
        log_startup(&self.config);

        let mut stats = DispatchStats {
            requested: self.config.targets.len(),
            ..Default::default()
        };

        // 为每个目标创建并发任务
        let mut handles: Vec<(SearchTarget, TaskHandle)> = Vec::new();
        let mut seen = Vec::new();
        for raw_name in &self.config.targets {
            let Some(target) = SearchTarget::find(raw_name) else {
                let err = TargetError::UnknownTarget {
                    name: raw_name.trim().to_string(),
                };
                warn!("⚠️ {}", err);
                stats.unknown_targets += 1;
                continue;
            };

            // 目标是集合语义，重复指定会让两个批次竞争同一组文件名
            if seen.contains(&target) {
                warn!("[{}] ⚠️ 目标重复指定，跳过", target);
                continue;
            }
            seen.push(target);

            let ctx = TargetCtx::new(
                target,
                self.config.query.clone(),
                self.config.output_root.join(target.name()),
            );
            let source = Arc::clone(&self.source);
            let config = self.config.clone();

            let handle = tokio::spawn(async move {
                let flow = TargetFlow::new(&config);
                flow.run(source.as_ref(), &ctx).await
            });
            handles.push((target, handle));
        }

        // 等待所有目标任务完成（汇合语义，失败不取消兄弟任务）
        for (target, handle) in handles {
            match handle.await {
                Ok(Ok(batch)) => {
                    stats.completed += 1;
                    stats.images_downloaded += batch.success;
                    stats.images_failed += batch.failed;
                }
                Ok(Err(e)) => {
                    error!("[{}] ❌ 目标处理失败: {}", target, e);
                    stats.failed += 1;
                }
                Err(e) => {
                    error!("[{}] 任务执行失败: {}", target, e);
                    stats.failed += 1;
                }
            }
        }

        log_completion(&stats);

        Ok(stats)
    }
}

type TaskHandle = JoinHandle<std::result::Result<BatchStats, TargetError>>;

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 并发图片搜索下载");
    info!("🔎 查询词: {}", config.query);
    info!("📌 搜索目标: {}", config.targets.join(", "));
    info!("📁 输出目录: {}", config.output_root.display());
    info!("⏱️ 单目标超时: {} 秒", config.search_timeout_secs);
    info!("{}", "=".repeat(60));
}

fn log_completion(stats: &DispatchStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 图片搜索与下载完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 完成目标: {}/{}", stats.completed, stats.requested);
    info!("❌ 失败目标: {}", stats.failed);
    if stats.unknown_targets > 0 {
        info!("⚠️ 未知目标: {}", stats.unknown_targets);
    }
    info!(
        "🖼️ 图片下载: 成功 {}, 失败 {}",
        stats.images_downloaded, stats.images_failed
    );
    info!("{}", "=".repeat(60));
}
