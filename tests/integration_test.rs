//! 真实浏览器集成测试
//!
//! 默认忽略，需要本机装有 Chrome/Chromium，手动运行：
//! cargo test -- --ignored

use std::sync::Arc;

use image_search_download::config::Config;
use image_search_download::engines::{BrowserSource, UrlSource};
use image_search_download::infrastructure::SearchSession;
use image_search_download::models::SearchTarget;
use image_search_download::orchestrator::App;
use image_search_download::utils::logging;

#[tokio::test]
#[ignore] // 需要本机浏览器
async fn test_session_launch_and_eval() {
    // 初始化日志
    logging::init();

    let session = SearchSession::launch(None)
        .await
        .expect("启动无头浏览器失败");

    let value: i64 = session.eval_as("40 + 2").await.expect("执行脚本失败");
    assert_eq!(value, 42);

    session.close().await;
}

#[tokio::test]
#[ignore] // 需要本机浏览器和外部网络
async fn test_google_search_returns_urls() {
    logging::init();

    let config = Config {
        query: "cats".to_string(),
        ..Config::default()
    };
    let source = BrowserSource::new(&config);

    let urls = source
        .fetch_candidate_urls(SearchTarget::Google, "cats")
        .await
        .expect("Google 搜索失败");

    println!("找到 {} 个候选图片", urls.len());
    assert!(!urls.is_empty(), "应该至少返回一个图片 URL");
    for url in urls.iter().take(3) {
        println!("  {}", url);
    }
}

#[tokio::test]
#[ignore] // 需要本机浏览器和外部网络
async fn test_full_run_downloads_images() {
    logging::init();

    let output_root = std::env::temp_dir().join(format!(
        "image_search_download_live_{}",
        std::process::id()
    ));
    let config = Config {
        query: "cats".to_string(),
        targets: vec!["google".to_string()],
        output_root: output_root.clone(),
        ..Config::default()
    };

    let app = App::new(config);
    let stats = app.run().await.expect("运行失败");

    println!(
        "完成目标 {}, 下载图片 {}",
        stats.completed, stats.images_downloaded
    );
    assert_eq!(stats.completed + stats.failed, 1);

    let _ = std::fs::remove_dir_all(&output_root);
}

#[tokio::test]
#[ignore] // 需要本机浏览器
async fn test_browser_source_timeout_fails_target() {
    logging::init();

    // 超时设为 0 秒，任何搜索都应以超时收场
    let config = Config {
        query: "cats".to_string(),
        search_timeout_secs: 0,
        ..Config::default()
    };
    let source = Arc::new(BrowserSource::new(&config));

    let result = source
        .fetch_candidate_urls(SearchTarget::Bing, "cats")
        .await;
    assert!(result.is_err(), "0 秒超时应该直接失败");
}
