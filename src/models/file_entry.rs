use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 目录条目类型
///
/// GitHub contents API 还可能返回 symlink / submodule 等类型，
/// 统一归入 Other，过滤阶段会丢弃
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Dir,
    #[serde(other)]
    Other,
}

/// 原始目录条目
///
/// 本地文件系统枚举和 GitHub 仓库列表共用的中间结构，
/// 每次请求时重新生成，不做持久化
#[derive(Debug, Clone, Deserialize)]
pub struct FileEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default)]
    pub size: u64,
    /// 文件修改时间，仅本地来源提供（GitHub 列表不含修改时间）
    #[serde(skip)]
    pub modified: Option<DateTime<Utc>>,
}

/// 题目文件描述符
///
/// 接口响应中的条目，字段名与前端约定保持 camelCase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionFileDescriptor {
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub size: u64,
    #[serde(rename = "lastModified")]
    pub last_modified: String,
}

/// 列表接口的成功响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    pub files: Vec<QuestionFileDescriptor>,
}

impl FileEntry {
    /// 创建一个文件条目（本地来源）
    pub fn file(name: impl Into<String>, size: u64, modified: Option<DateTime<Utc>>) -> Self {
        Self {
            name: name.into(),
            entry_type: EntryType::File,
            size,
            modified,
        }
    }
}
