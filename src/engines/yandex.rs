//! Yandex 图片搜索引擎
//!
//! 导航到 Yandex 图片搜索页，提取结果封面链接的 href，
//! 再从 img_url 查询参数中还原真实图片地址

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::engines::encode_query;
use crate::error::FetchError;
use crate::infrastructure::SearchSession;

/// 在 Yandex 图片搜索中获取候选图片 URL
pub async fn fetch_candidate_urls(
    session: &SearchSession,
    query: &str,
) -> Result<Vec<String>, FetchError> {
    let search_url = format!(
        "https://yandex.com/images/search?text={}",
        encode_query(query)
    );
    debug!("Yandex 搜索页: {}", search_url);

    session.navigate(&search_url).await?;
    session.settle(Duration::from_secs(2)).await;

    let links: Vec<String> = session
        .eval_as(
            r#"Array.from(document.querySelectorAll('a.Link.ContentImage-Cover')).map(a => a.href)"#,
        )
        .await?;
    debug!("Yandex 页面共提取到 {} 个封面链接", links.len());

    Ok(parse_image_urls(links))
}

/// 从跳转链接的 img_url 查询参数中取出真实图片地址（自动百分号解码），
/// 没有该参数的链接直接跳过
fn parse_image_urls(links: Vec<String>) -> Vec<String> {
    links
        .iter()
        .filter_map(|link| Url::parse(link).ok())
        .filter_map(|parsed| {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "img_url")
                .map(|(_, value)| value.into_owned())
        })
        .filter(|image_url| !image_url.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extracts_and_decodes_img_url() {
        let links = vec![
            "https://yandex.com/images/search?pos=0&img_url=https%3A%2F%2Fcdn.example.com%2Fcat.jpg&rpt=simage"
                .to_string(),
        ];
        assert_eq!(
            parse_image_urls(links),
            vec!["https://cdn.example.com/cat.jpg".to_string()]
        );
    }

    #[test]
    fn test_parse_skips_links_without_img_url() {
        let links = vec![
            "https://yandex.com/images/search?pos=1&rpt=simage".to_string(),
            "https://yandex.com/images/search?img_url=&rpt=simage".to_string(),
            "::definitely not a url::".to_string(),
            "https://yandex.com/images/search?img_url=https%3A%2F%2Fcdn.example.com%2Fdog.jpg"
                .to_string(),
        ];
        assert_eq!(
            parse_image_urls(links),
            vec!["https://cdn.example.com/dog.jpg".to_string()]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_image_urls(Vec::new()).is_empty());
    }
}
