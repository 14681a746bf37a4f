//! 流程层（Workflow Layer）
//!
//! 定义"一个搜索目标"的完整处理流程：搜索 → 下载 → 统计。
//! 不持有浏览器资源，只依赖能力层（engines / services）。

pub mod target_ctx;
pub mod target_flow;

pub use target_ctx::TargetCtx;
pub use target_flow::TargetFlow;
