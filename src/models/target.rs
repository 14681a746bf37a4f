/// 搜索目标枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SearchTarget {
    /// Google 图片搜索
    Google,
    /// Bing 图片搜索
    Bing,
    /// Yandex 图片搜索
    Yandex,
}

impl SearchTarget {
    /// 全部支持的搜索目标
    pub fn all() -> [SearchTarget; 3] {
        [SearchTarget::Google, SearchTarget::Bing, SearchTarget::Yandex]
    }

    /// 获取目标名（同时也是输出子目录名）
    pub fn name(self) -> &'static str {
        match self {
            SearchTarget::Google => "google",
            SearchTarget::Bing => "bing",
            SearchTarget::Yandex => "yandex",
        }
    }

    /// 尝试从字符串解析目标（精确匹配）
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "google" => Some(SearchTarget::Google),
            "bing" => Some(SearchTarget::Bing),
            "yandex" => Some(SearchTarget::Yandex),
            _ => None,
        }
    }

    /// 查找目标（忽略首尾空白和大小写）
    pub fn find(s: &str) -> Option<Self> {
        Self::from_str(s.trim().to_lowercase().as_str())
    }
}

impl std::fmt::Display for SearchTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_exact() {
        assert_eq!(SearchTarget::from_str("google"), Some(SearchTarget::Google));
        assert_eq!(SearchTarget::from_str("bing"), Some(SearchTarget::Bing));
        assert_eq!(SearchTarget::from_str("yandex"), Some(SearchTarget::Yandex));
        assert_eq!(SearchTarget::from_str("altavista"), None);
        // 精确匹配不做归一化
        assert_eq!(SearchTarget::from_str("Google"), None);
    }

    #[test]
    fn test_find_normalizes_input() {
        assert_eq!(SearchTarget::find(" Google "), Some(SearchTarget::Google));
        assert_eq!(SearchTarget::find("BING"), Some(SearchTarget::Bing));
        assert_eq!(SearchTarget::find("yandex"), Some(SearchTarget::Yandex));
        assert_eq!(SearchTarget::find("duckduckgo"), None);
        assert_eq!(SearchTarget::find(""), None);
    }

    #[test]
    fn test_name_matches_folder_name() {
        for target in SearchTarget::all() {
            assert_eq!(SearchTarget::from_str(target.name()), Some(target));
            assert_eq!(format!("{}", target), target.name());
        }
    }
}
