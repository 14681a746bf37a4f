//! Bing 图片搜索引擎
//!
//! 导航到 Bing 图片搜索页，滚动触发懒加载后提取 iusc 锚点的
//! m 属性（JSON 元数据），在 Rust 侧解析出 murl 字段

use std::time::Duration;

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::engines::encode_query;
use crate::error::FetchError;
use crate::infrastructure::SearchSession;

/// 滚动轮数
const SCROLL_ROUNDS: usize = 5;
/// 每轮滚动后的等待间隔（毫秒）
const SCROLL_PAUSE_MS: u64 = 500;

/// 在 Bing 图片搜索中获取候选图片 URL
pub async fn fetch_candidate_urls(
    session: &SearchSession,
    query: &str,
) -> Result<Vec<String>, FetchError> {
    let search_url = format!(
        "https://www.bing.com/images/search?q={}",
        encode_query(query)
    );
    debug!("Bing 搜索页: {}", search_url);

    session.navigate(&search_url).await?;
    session.settle(Duration::from_secs(2)).await;

    // 模拟用户滚动，加载更多图片
    session
        .scroll_to_bottom(SCROLL_ROUNDS, Duration::from_millis(SCROLL_PAUSE_MS))
        .await?;

    let metadata: Vec<String> = session
        .eval_as(
            r#"Array.from(document.querySelectorAll('a.iusc')).map(a => a.getAttribute('m')).filter(m => m !== null)"#,
        )
        .await?;
    debug!("Bing 页面共提取到 {} 条图片元数据", metadata.len());

    Ok(parse_media_urls(metadata))
}

/// 从 m 属性的 JSON 元数据中取出 murl 字段，坏条目直接跳过
fn parse_media_urls(entries: Vec<String>) -> Vec<String> {
    entries
        .iter()
        .filter_map(|entry| serde_json::from_str::<JsonValue>(entry).ok())
        .filter_map(|meta| {
            meta.get("murl")
                .and_then(|value| value.as_str())
                .map(str::to_string)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extracts_murl() {
        let entries = vec![
            r#"{"murl":"https://cdn.example.com/cat.jpg","turl":"https://tn.example.com/t.jpg"}"#
                .to_string(),
            r#"{"murl":"https://cdn.example.com/dog.jpg"}"#.to_string(),
        ];
        assert_eq!(
            parse_media_urls(entries),
            vec![
                "https://cdn.example.com/cat.jpg".to_string(),
                "https://cdn.example.com/dog.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_skips_malformed_entries() {
        let entries = vec![
            "not json at all".to_string(),
            r#"{"turl":"https://tn.example.com/only-thumb.jpg"}"#.to_string(),
            r#"{"murl":123}"#.to_string(),
            r#"{"murl":"https://cdn.example.com/ok.jpg"}"#.to_string(),
        ];
        assert_eq!(
            parse_media_urls(entries),
            vec!["https://cdn.example.com/ok.jpg".to_string()]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_media_urls(Vec::new()).is_empty());
    }
}
