//! # Image Search Download
//!
//! 一个并发抓取多个图片搜索引擎并批量下载图片的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `browser/` - 无头浏览器启动
//! - `infrastructure/` - 持有稀缺资源（Browser + Page），只暴露能力
//! - `SearchSession` - 唯一的会话 owner，提供 navigate / eval / scroll 能力
//!
//! ### ② 业务能力层（Engines & Services）
//! - `engines/` - 各搜索引擎的"给定查询词，产出候选 URL"能力
//! - `UrlSource` - 能力接口，调度核心只依赖它，测试可注入假实现
//! - `services/` - 图片下载能力（单张流式下载 + 批次并发下载）
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个目标"的完整处理流程
//! - `TargetCtx` - 上下文封装（目标 + 查询词 + 输出目录）
//! - `TargetFlow` - 流程编排（搜索 → 下载 → 统计）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/dispatcher` - 目标调度器，管理并发和全局统计
//!
//! ## 并发模型
//!
//! ```text
//! dispatcher (每个目标一个任务，全部结束后汇合)
//!     ↓
//! workflow::TargetFlow (处理单个目标)
//!     ↓
//! engines::UrlSource (独立会话 + 引擎抓取，带墙钟超时)
//!     ↓
//! services::ImageDownloader (每个 URL 一个任务，批内汇合)
//! ```
//!
//! 任务之间不共享可变状态，失败在各自的汇合点被记录，从不跨任务传播。

pub mod browser;
pub mod cli;
pub mod config;
pub mod engines;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use cli::Cli;
pub use config::Config;
pub use engines::{BrowserSource, UrlSource};
pub use error::{DownloadError, FetchError, TargetError};
pub use infrastructure::SearchSession;
pub use models::{DownloadJob, SearchTarget};
pub use orchestrator::{App, DispatchStats};
pub use services::{BatchStats, ImageDownloader};
pub use workflow::{TargetCtx, TargetFlow};
