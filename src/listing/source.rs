//! 目录来源抽象
//!
//! 列表能力只有一个接口：枚举目录条目。
//! 本地文件系统和 GitHub 仓库是两个实现，启动时根据配置选定一个，
//! 核心逻辑中不再出现环境分支。

use crate::config::Config;
use crate::error::AppResult;
use crate::listing::github::GithubSource;
use crate::listing::local::LocalDirSource;
use crate::models::FileEntry;
use async_trait::async_trait;

/// 目录条目来源
#[async_trait]
pub trait ListSource: Send + Sync {
    /// 枚举目录条目
    ///
    /// # 返回
    /// 返回原始条目列表；枚举失败时整体返回错误，不产生部分结果
    async fn list_entries(&self) -> AppResult<Vec<FileEntry>>;
}

/// 根据配置选择目录来源
///
/// 本地开发读文件系统，部署环境走 GitHub 仓库列表
pub fn source_from_config(config: &Config) -> Box<dyn ListSource> {
    if config.use_remote_listing {
        Box::new(GithubSource::new(config))
    } else {
        Box::new(LocalDirSource::new(&config.question_dir))
    }
}
