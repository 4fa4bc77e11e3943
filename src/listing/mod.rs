//! 题目文件列表模块
//!
//! ## 处理流程
//!
//! 1. 通过 [`ListSource`] 枚举目录条目（本地或 GitHub，启动时选定）
//! 2. 过滤：只保留 .json 文件，排除系统 / 配置文件
//! 3. 推导显示名称（见 [`display_name`]）
//! 4. 排序：questions.json 固定第一，其余按文件名自然数字排序

pub mod display_name;
pub mod github;
pub mod local;
pub mod natural_sort;
pub mod source;

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{EntryType, FileEntry, QuestionFileDescriptor};
use chrono::{SecondsFormat, Utc};
use display_name::derive_display_name;
use natural_sort::natural_compare;
use source::ListSource;
use std::cmp::Ordering;
use tracing::info;

/// 需要排除的系统 / 配置文件（统一小写比较）
static EXCLUDED_FILES: phf::Set<&'static str> = phf::phf_set! {
    "manifest.json",
    "question-files.json",
    "vercel.json",
    "package.json",
    "package-lock.json",
    "tsconfig.json",
    "jsconfig.json",
    "next.config.js",
};

/// 题目文件列表器
///
/// 每次调用 [`list`](Self::list) 都重新枚举来源，不做缓存
pub struct QuestionFileLister {
    source: Box<dyn ListSource>,
}

impl QuestionFileLister {
    /// 用指定来源创建列表器
    pub fn new(source: Box<dyn ListSource>) -> Self {
        Self { source }
    }

    /// 根据配置创建列表器（启动时选定本地或远程来源）
    pub fn from_config(config: &Config) -> Self {
        Self::new(source::source_from_config(config))
    }

    /// 列出所有题目文件
    ///
    /// # 返回
    /// 返回过滤、命名、排序后的描述符列表
    pub async fn list(&self) -> AppResult<Vec<QuestionFileDescriptor>> {
        let entries = self.source.list_entries().await?;

        let mut files: Vec<QuestionFileDescriptor> = entries
            .iter()
            .filter(|entry| is_question_file(entry))
            .map(describe)
            .collect();

        files.sort_by(compare_descriptors);

        info!("✓ 找到 {} 个题目文件", files.len());

        Ok(files)
    }
}

/// 判断条目是否是题目文件
fn is_question_file(entry: &FileEntry) -> bool {
    let lower = entry.name.to_lowercase();

    entry.entry_type == EntryType::File
        && lower.ends_with(".json")
        && !EXCLUDED_FILES.contains(lower.as_str())
}

/// 从原始条目生成描述符
///
/// GitHub 列表不含修改时间，此时用当前时间兜底
fn describe(entry: &FileEntry) -> QuestionFileDescriptor {
    let last_modified = entry
        .modified
        .unwrap_or_else(Utc::now)
        .to_rfc3339_opts(SecondsFormat::Millis, true);

    QuestionFileDescriptor {
        name: entry.name.clone(),
        display_name: derive_display_name(&entry.name),
        size: entry.size,
        last_modified,
    }
}

/// 描述符排序：questions.json 永远第一，其余按文件名自然数字排序
fn compare_descriptors(a: &QuestionFileDescriptor, b: &QuestionFileDescriptor) -> Ordering {
    if a.name == "questions.json" {
        return Ordering::Less;
    }
    if b.name == "questions.json" {
        return Ordering::Greater;
    }
    natural_compare(&a.name, &b.name)
}
