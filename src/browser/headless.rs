use std::path::Path;
use std::time::Duration;

use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::error::FetchError;

/// 启动无头浏览器并打开一个空白页面
///
/// `chrome_executable` 未指定时使用系统默认的 Chrome/Chromium
pub async fn launch_headless_browser(
    chrome_executable: Option<&Path>,
) -> Result<(Browser, Page), FetchError> {
    info!("🚀 启动无头浏览器...");

    // 配置无头浏览器
    let mut builder = BrowserConfig::builder().new_headless_mode().args(vec![
        "--disable-gpu",             // 无头模式下禁用 GPU
        "--no-sandbox",              // 禁用沙盒，防止权限问题导致的崩溃
        "--disable-dev-shm-usage",   // 防止共享内存不足
        "--remote-debugging-port=0", // 让浏览器自动选择调试端口
    ]);
    if let Some(path) = chrome_executable {
        debug!("使用指定的浏览器: {}", path.display());
        builder = builder.chrome_executable(path);
    }
    let config = builder.build().map_err(|e| {
        error!("配置无头浏览器失败: {}", e);
        FetchError::BrowserConfig(e)
    })?;

    // 启动浏览器
    let (browser, mut handler) = Browser::launch(config).await.map_err(|e| {
        error!("启动无头浏览器失败: {}", e);
        FetchError::BrowserLaunch { source: e }
    })?;
    debug!("无头浏览器启动成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(Duration::from_millis(300)).await;

    // 创建空白页面，由调用方决定导航到哪里
    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("创建页面失败: {}", e);
        FetchError::PageCreation { source: e }
    })?;
    debug!("页面创建成功");

    Ok((browser, page))
}
