//! 搜索会话 - 基础设施层
//!
//! 持有唯一的浏览器资源，只暴露导航 / 执行 JS / 滚动等能力

use std::path::Path;
use std::time::Duration;

use chromiumoxide::{Browser, Page};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tokio::time::sleep;

use crate::browser::launch_headless_browser;
use crate::error::FetchError;

/// 搜索会话
///
/// 职责：
/// - 持有唯一的 Browser 和 Page 资源
/// - 暴露 navigate / exec / eval / scroll 能力
/// - 不认识搜索目标，不处理业务流程
/// - 由单个目标任务独占，用完即弃，从不复用
pub struct SearchSession {
    browser: Browser,
    page: Page,
}

impl SearchSession {
    /// 启动一个全新的独立会话
    pub async fn launch(chrome_executable: Option<&Path>) -> Result<Self, FetchError> {
        let (browser, page) = launch_headless_browser(chrome_executable).await?;
        Ok(Self { browser, page })
    }

    /// 导航到指定 URL
    pub async fn navigate(&self, url: &str) -> Result<(), FetchError> {
        self.page.goto(url).await.map_err(|e| FetchError::Navigation {
            url: url.to_string(),
            source: e,
        })?;
        Ok(())
    }

    /// 执行 JS 代码，忽略返回值
    ///
    /// 用于 scrollBy 这类没有返回值的语句
    pub async fn exec(&self, js_code: impl Into<String>) -> Result<(), FetchError> {
        self.page
            .evaluate(js_code.into())
            .await
            .map_err(|e| FetchError::ScriptEvaluation { source: e })?;
        Ok(())
    }

    /// 执行 JS 代码并返回 JSON 结果
    pub async fn eval(&self, js_code: impl Into<String>) -> Result<JsonValue, FetchError> {
        let result = self
            .page
            .evaluate(js_code.into())
            .await
            .map_err(|e| FetchError::ScriptEvaluation { source: e })?;
        let json_value = result
            .into_value()
            .map_err(|e| FetchError::ScriptResult { source: e })?;
        Ok(json_value)
    }

    /// 执行 JS 代码并反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(
        &self,
        js_code: impl Into<String>,
    ) -> Result<T, FetchError> {
        let json_value = self.eval(js_code).await?;
        let typed_value = serde_json::from_value(json_value)
            .map_err(|e| FetchError::ScriptResult { source: e })?;
        Ok(typed_value)
    }

    /// 反复滚动到页面底部，触发懒加载
    ///
    /// 每轮滚动后暂停 `pause`，等待新内容加载
    pub async fn scroll_to_bottom(
        &self,
        rounds: usize,
        pause: Duration,
    ) -> Result<(), FetchError> {
        for _ in 0..rounds {
            self.exec("window.scrollBy(0, document.body.scrollHeight);")
                .await?;
            sleep(pause).await;
        }
        Ok(())
    }

    /// 固定等待，让页面内容稳定下来
    pub async fn settle(&self, duration: Duration) {
        sleep(duration).await;
    }

    /// 优雅关闭会话
    ///
    /// 会话被直接 Drop（比如超时丢弃）时，浏览器进程随 Browser 的 Drop 结束
    pub async fn close(mut self) {
        let _ = self.browser.close().await;
        let _ = self.browser.wait().await;
    }
}
