//! 图片下载服务 - 业务能力层
//!
//! ## 职责
//!
//! - 单张下载：HTTP GET + 流式写入目标文件
//! - 批次下载：确保目录存在，每个 URL 一个独立任务，批内汇合
//! - 单张失败只记录，不影响兄弟任务，也不中止批次

use std::path::Path;

use tokio::fs;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{error, info};

use crate::error::DownloadError;
use crate::models::{image_file_name, DownloadJob};
use crate::workflow::TargetCtx;

/// 批次下载统计
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchStats {
    /// 批内作业总数
    pub total: usize,
    /// 成功下载数
    pub success: usize,
    /// 失败数
    pub failed: usize,
}

/// 图片下载服务
///
/// 内部共享一个 reqwest::Client，克隆成本低，可安全分发到并发任务
#[derive(Clone)]
pub struct ImageDownloader {
    client: reqwest::Client,
}

impl ImageDownloader {
    /// 创建新的下载服务
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// 并发下载一个批次
    ///
    /// 文件名序号按 URL 的输入顺序取 1..N，与完成顺序无关；
    /// 空批次只创建目录，不算错误
    pub async fn download_batch(
        &self,
        urls: Vec<String>,
        ctx: &TargetCtx,
    ) -> Result<BatchStats, DownloadError> {
        // 创建输出目录（已存在时不报错）
        ensure_folder(&ctx.folder).await?;

        let mut handles = Vec::with_capacity(urls.len());
        for (i, url) in urls.into_iter().enumerate() {
            let index = i + 1;
            let file_path = ctx.folder.join(image_file_name(&ctx.query, index));
            let job = DownloadJob::new(url, file_path, index);

            let downloader = self.clone();
            let target = ctx.target;
            handles.push(tokio::spawn(async move {
                match downloader.download_one(&job).await {
                    Ok(()) => {
                        info!("[{}] ✓ 已下载 {}", target, job.file_path.display());
                        true
                    }
                    Err(e) => {
                        error!("[{}] ❌ 图片 {} 下载失败: {}", target, job.index, e);
                        false
                    }
                }
            }));
        }

        // 汇合语义：本批所有下载任务结束后才返回
        let mut stats = BatchStats {
            total: handles.len(),
            ..Default::default()
        };
        for handle in handles {
            match handle.await {
                Ok(true) => stats.success += 1,
                Ok(false) => stats.failed += 1,
                Err(e) => {
                    error!("[{}] 下载任务执行失败: {}", ctx.target, e);
                    stats.failed += 1;
                }
            }
        }

        Ok(stats)
    }

    /// 下载单张图片
    ///
    /// 响应体逐块写入目标文件，不走临时文件。中途失败会留下半截文件；
    /// 非 2xx 状态在创建文件之前就返回错误，不会留下空文件
    pub async fn download_one(&self, job: &DownloadJob) -> Result<(), DownloadError> {
        let mut response = self
            .client
            .get(&job.url)
            .send()
            .await
            .map_err(|e| DownloadError::Request {
                url: job.url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::BadStatus {
                url: job.url.clone(),
                status,
            });
        }

        let path_display = job.file_path.display().to_string();
        let mut file = File::create(&job.file_path)
            .await
            .map_err(|e| DownloadError::FileCreate {
                path: path_display.clone(),
                source: e,
            })?;

        while let Some(chunk) = response.chunk().await.map_err(|e| DownloadError::Request {
            url: job.url.clone(),
            source: e,
        })? {
            file.write_all(&chunk)
                .await
                .map_err(|e| DownloadError::FileWrite {
                    path: path_display.clone(),
                    source: e,
                })?;
        }

        file.flush().await.map_err(|e| DownloadError::FileWrite {
            path: path_display,
            source: e,
        })?;

        Ok(())
    }
}

impl Default for ImageDownloader {
    fn default() -> Self {
        Self::new()
    }
}

/// 确保输出目录存在（幂等创建）
async fn ensure_folder(folder: &Path) -> Result<(), DownloadError> {
    fs::create_dir_all(folder)
        .await
        .map_err(|e| DownloadError::FolderCreate {
            path: folder.display().to_string(),
            source: e,
        })
}
