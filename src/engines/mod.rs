//! 搜索引擎协作者 - 业务能力层
//!
//! ## 职责
//!
//! 对调度器只暴露一个能力：给定查询词，产出候选图片 URL 列表。
//!
//! ## 模块划分
//!
//! - `UrlSource` - 能力接口，调度器和流程层只依赖它
//! - `BrowserSource` - 生产实现：每次调用启动一个独立的无头浏览器会话，
//!   按目标分发到对应引擎，并施加墙钟超时
//! - `google` / `bing` / `yandex` - 各引擎的页面抓取逻辑

pub mod bing;
pub mod google;
pub mod yandex;

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use tokio::time::timeout;
use tracing::debug;

use crate::config::Config;
use crate::error::FetchError;
use crate::infrastructure::SearchSession;
use crate::models::SearchTarget;

/// 图片 URL 来源
///
/// 并发核心只依赖这一个接口，测试可以用固定列表或注入失败的假实现替换
pub trait UrlSource: Send + Sync {
    /// 给定查询词，产出该目标的候选图片 URL 列表
    fn fetch_candidate_urls(
        &self,
        target: SearchTarget,
        query: &str,
    ) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send;
}

/// 基于无头浏览器的图片 URL 来源
///
/// 每次调用启动一个全新会话，目标之间互不共享、用完即弃
pub struct BrowserSource {
    timeout_secs: u64,
    chrome_executable: Option<PathBuf>,
}

impl BrowserSource {
    /// 从配置创建
    pub fn new(config: &Config) -> Self {
        Self {
            timeout_secs: config.search_timeout_secs,
            chrome_executable: config.chrome_executable.clone(),
        }
    }

    /// 启动独立会话并调用对应引擎
    async fn search(
        &self,
        target: SearchTarget,
        query: &str,
    ) -> Result<Vec<String>, FetchError> {
        let session = SearchSession::launch(self.chrome_executable.as_deref()).await?;

        let result = match target {
            SearchTarget::Google => google::fetch_candidate_urls(&session, query).await,
            SearchTarget::Bing => bing::fetch_candidate_urls(&session, query).await,
            SearchTarget::Yandex => yandex::fetch_candidate_urls(&session, query).await,
        };

        session.close().await;
        result
    }
}

impl UrlSource for BrowserSource {
    fn fetch_candidate_urls(
        &self,
        target: SearchTarget,
        query: &str,
    ) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send {
        async move {
            let limit = Duration::from_secs(self.timeout_secs);
            match timeout(limit, self.search(target, query)).await {
                Ok(result) => result,
                // 超时后 search 的 Future 整体被丢弃，候选列表不做部分保留，
                // 浏览器进程随 Browser 的 Drop 结束
                Err(_) => {
                    debug!("[{}] 会话超过 {} 秒，已拆除", target, self.timeout_secs);
                    Err(FetchError::Timeout {
                        secs: self.timeout_secs,
                    })
                }
            }
        }
    }
}

/// 查询词编码：空格替换为 +
pub(crate) fn encode_query(query: &str) -> String {
    query.replace(' ', "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_query() {
        assert_eq!(encode_query("cats"), "cats");
        assert_eq!(encode_query("red pandas"), "red+pandas");
        assert_eq!(encode_query("a b c"), "a+b+c");
    }
}
