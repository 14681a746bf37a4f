//! 基础设施层（Infrastructure Layer）
//!
//! 持有稀缺资源（浏览器会话），只暴露能力，不认识搜索目标和下载作业

pub mod session;

pub use session::SearchSession;
