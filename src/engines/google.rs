//! Google 图片搜索引擎
//!
//! 导航到 Google 图片搜索页，多轮滚动触发懒加载，
//! 从页面的 img 元素提取图片地址后过滤掉非内容图片

use std::time::Duration;

use tracing::debug;

use crate::engines::encode_query;
use crate::error::FetchError;
use crate::infrastructure::SearchSession;

/// 滚动轮数，每轮滚到底部触发一批懒加载
const SCROLL_ROUNDS: usize = 10;
/// 每轮滚动后的等待间隔（毫秒）
const SCROLL_PAUSE_MS: u64 = 500;

/// 在 Google 图片搜索中获取候选图片 URL
pub async fn fetch_candidate_urls(
    session: &SearchSession,
    query: &str,
) -> Result<Vec<String>, FetchError> {
    let search_url = format!(
        "https://www.google.com/search?q={}&tbm=isch&udm=2",
        encode_query(query)
    );
    debug!("Google 搜索页: {}", search_url);

    session.navigate(&search_url).await?;
    session.settle(Duration::from_secs(2)).await;

    // 模拟用户滚动，加载更多图片
    session
        .scroll_to_bottom(SCROLL_ROUNDS, Duration::from_millis(SCROLL_PAUSE_MS))
        .await?;
    session.settle(Duration::from_secs(2)).await;

    let raw_urls: Vec<String> = session
        .eval_as(r#"Array.from(document.querySelectorAll('img')).map(img => img.src)"#)
        .await?;
    debug!("Google 页面共提取到 {} 个 img 元素", raw_urls.len());

    Ok(filter_content_urls(raw_urls))
}

/// 过滤掉 Google 自身的 logo、base64 内嵌图和 favicon
fn filter_content_urls(urls: Vec<String>) -> Vec<String> {
    urls.into_iter()
        .filter(|url| {
            url.starts_with("https")
                && !url.contains("google")
                && !url.contains("base64")
                && !url.contains("FAVICON")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_keeps_plain_https_urls() {
        let urls = vec![
            "https://cdn.example.com/cat.jpg".to_string(),
            "https://pics.example.org/1.png".to_string(),
        ];
        assert_eq!(filter_content_urls(urls.clone()), urls);
    }

    #[test]
    fn test_filter_drops_non_content_urls() {
        let urls = vec![
            "http://insecure.example.com/cat.jpg".to_string(),
            "https://www.google.com/logo.png".to_string(),
            "data:image/png;base64,iVBORw0KGgo=".to_string(),
            "https://cdn.example.com/icons/FAVICON.ico".to_string(),
            "https://cdn.example.com/real.jpg".to_string(),
        ];
        assert_eq!(
            filter_content_urls(urls),
            vec!["https://cdn.example.com/real.jpg".to_string()]
        );
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter_content_urls(Vec::new()).is_empty());
    }
}
