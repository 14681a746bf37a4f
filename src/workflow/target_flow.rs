//! 目标处理流程 - 流程层
//!
//! 核心职责：定义"一个搜索目标"的完整处理流程
//!
//! 流程顺序：
//! 1. 引擎搜索 → 候选 URL 列表
//! 2. 下载批次 → 每个 URL 一个并发任务
//! 3. 统计上报

use tracing::info;

use crate::config::Config;
use crate::engines::UrlSource;
use crate::error::TargetError;
use crate::services::{BatchStats, ImageDownloader};
use crate::utils::logging::truncate_text;
use crate::workflow::target_ctx::TargetCtx;

/// 目标处理流程
///
/// - 编排单个目标的完整处理流程
/// - 不持有任何浏览器资源
/// - 只依赖 UrlSource 能力和下载服务
pub struct TargetFlow {
    downloader: ImageDownloader,
    verbose_logging: bool,
}

impl TargetFlow {
    /// 创建新的目标处理流程
    pub fn new(config: &Config) -> Self {
        Self {
            downloader: ImageDownloader::new(),
            verbose_logging: config.verbose_logging,
        }
    }

    pub async fn run<S: UrlSource>(
        &self,
        source: &S,
        ctx: &TargetCtx,
    ) -> Result<BatchStats, TargetError> {
        info!("[{}] 🔍 开始搜索: {}", ctx.target, ctx.query);

        let urls = source.fetch_candidate_urls(ctx.target, &ctx.query).await?;
        info!(
            "[{}] ✓ 搜索完成，找到 {} 个候选图片",
            ctx.target,
            urls.len()
        );

        // 详细日志（如果启用）
        if self.verbose_logging {
            self.log_candidates(ctx, &urls);
        }

        let stats = self.downloader.download_batch(urls, ctx).await?;
        info!(
            "[{}] ✅ 批次完成: 成功 {}/{}",
            ctx.target, stats.success, stats.total
        );

        Ok(stats)
    }

    // ========== 日志辅助方法 ==========

    /// 显示候选图片 URL 列表
    fn log_candidates(&self, ctx: &TargetCtx, urls: &[String]) {
        for (i, url) in urls.iter().enumerate() {
            info!("[{}]   {}. {}", ctx.target, i + 1, truncate_text(url, 80));
        }
    }
}
