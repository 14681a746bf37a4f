//! 错误类型定义
//!
//! 错误按领域分组：搜索会话（FetchError）、图片下载（DownloadError）、
//! 目标级汇总（TargetError）。所有错误都在各自任务的汇合点被捕获并记录，
//! 不会跨任务传播、也不会取消兄弟任务。

use thiserror::Error;

/// 搜索会话错误
///
/// 覆盖浏览器配置、启动、导航、脚本执行和超时，只影响单个搜索目标
#[derive(Debug, Error)]
pub enum FetchError {
    /// 浏览器配置失败
    #[error("配置无头浏览器失败: {0}")]
    BrowserConfig(String),

    /// 浏览器启动失败
    #[error("启动无头浏览器失败: {source}")]
    BrowserLaunch {
        #[source]
        source: chromiumoxide::error::CdpError,
    },

    /// 创建页面失败
    #[error("创建页面失败: {source}")]
    PageCreation {
        #[source]
        source: chromiumoxide::error::CdpError,
    },

    /// 导航失败
    #[error("导航到 {url} 失败: {source}")]
    Navigation {
        url: String,
        #[source]
        source: chromiumoxide::error::CdpError,
    },

    /// 执行脚本失败
    #[error("执行脚本失败: {source}")]
    ScriptEvaluation {
        #[source]
        source: chromiumoxide::error::CdpError,
    },

    /// 脚本返回值解析失败
    #[error("解析脚本返回值失败: {source}")]
    ScriptResult {
        #[source]
        source: serde_json::Error,
    },

    /// 搜索超时，整个会话被拆除
    #[error("搜索超时（{secs} 秒）")]
    Timeout { secs: u64 },
}

/// 图片下载错误
///
/// 网络、HTTP 状态、目录与文件写入，只影响单个下载作业
#[derive(Debug, Error)]
pub enum DownloadError {
    /// 网络请求失败
    #[error("请求图片失败 ({url}): {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// 服务器返回非 2xx 状态
    #[error("服务器返回错误状态 ({url}): {status}")]
    BadStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// 创建输出目录失败
    #[error("创建目录失败 ({path}): {source}")]
    FolderCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 创建文件失败
    #[error("创建文件失败 ({path}): {source}")]
    FileCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 目标级错误
///
/// 单个搜索目标内部的失败，在调度器的汇合点被记录后丢弃
#[derive(Debug, Error)]
pub enum TargetError {
    /// 未知的搜索目标名
    #[error("未知的搜索目标: {name}")]
    UnknownTarget { name: String },

    /// 搜索阶段失败
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// 下载阶段失败（目录级错误，单张图片的失败在批次内部消化）
    #[error(transparent)]
    Download(#[from] DownloadError),
}
