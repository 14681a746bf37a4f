//! 目标处理上下文
//!
//! 封装"我正在为哪个目标、用什么查询词、下载到哪里"这一信息

use std::fmt::Display;
use std::path::PathBuf;

use crate::models::SearchTarget;

/// 目标处理上下文
#[derive(Debug, Clone)]
pub struct TargetCtx {
    /// 搜索目标
    pub target: SearchTarget,

    /// 查询词
    pub query: String,

    /// 该目标的图片输出目录
    pub folder: PathBuf,
}

impl TargetCtx {
    /// 创建新的目标上下文
    pub fn new(target: SearchTarget, query: String, folder: PathBuf) -> Self {
        Self {
            target,
            query,
            folder,
        }
    }
}

impl Display for TargetCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[目标#{} 查询#{} 目录#{}]",
            self.target,
            self.query,
            self.folder.display()
        )
    }
}
