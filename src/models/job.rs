//! 下载作业模型

use std::path::PathBuf;

/// 所有下载图片统一使用的扩展名，不做内容嗅探
pub const IMAGE_EXTENSION: &str = ".jpg";

/// 单个下载作业
///
/// 序号就是作业在文件名上的身份：同一批次内按 URL 返回顺序取 1..N，
/// 与下载完成顺序无关
#[derive(Debug, Clone)]
pub struct DownloadJob {
    /// 图片 URL（来自搜索引擎，不保证有效可达）
    pub url: String,
    /// 目标文件完整路径
    pub file_path: PathBuf,
    /// 批次内序号（从 1 开始）
    pub index: usize,
}

impl DownloadJob {
    /// 创建新的下载作业
    pub fn new(url: String, file_path: PathBuf, index: usize) -> Self {
        Self {
            url,
            file_path,
            index,
        }
    }
}

/// 构建顺序文件名: `<query><index><extension>`
pub fn image_file_name(query: &str, index: usize) -> String {
    format!("{}{}{}", query, index, IMAGE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_file_name() {
        assert_eq!(image_file_name("cats", 1), "cats1.jpg");
        assert_eq!(image_file_name("cats", 12), "cats12.jpg");
        assert_eq!(image_file_name("red pandas", 3), "red pandas3.jpg");
    }

    #[test]
    fn test_job_keeps_its_index() {
        let job = DownloadJob::new(
            "https://example.com/a.jpg".to_string(),
            PathBuf::from("images/google/cats2.jpg"),
            2,
        );
        assert_eq!(job.index, 2);
        assert_eq!(job.file_path, PathBuf::from("images/google/cats2.jpg"));
    }
}
