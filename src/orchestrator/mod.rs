//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责多目标的并发调度和全局统计，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `dispatcher` - 目标调度器
//! - 解析命令行传入的目标名，未知目标上报后跳过
//! - 每个目标一个独立任务（tokio::spawn）
//! - 等待全部任务结束（汇合语义），失败互不影响
//! - 输出全局统计报告
//!
//! ## 层次关系
//!
//! ```text
//! dispatcher (处理目标集合，全部结束后汇合)
//!     ↓
//! workflow::TargetFlow (处理单个目标)
//!     ↓
//! engines::UrlSource (能力层：会话 + 引擎抓取，带超时)
//!     ↓
//! services::ImageDownloader (每个 URL 一个任务，批内汇合)
//!     ↓
//! infrastructure::SearchSession (基础设施：浏览器会话)
//! ```
//!
//! ## 设计原则
//!
//! 1. **失败隔离**：单个目标的失败只记录，不取消兄弟任务
//! 2. **资源隔离**：每个目标任务独占自己的浏览器会话
//! 3. **向下依赖**：编排层 → workflow → engines/services → infrastructure
//! 4. **无业务逻辑**：只做调度和统计，不做页面抓取和下载细节

pub mod dispatcher;

// 重新导出主要类型
pub use dispatcher::{App, DispatchStats};
