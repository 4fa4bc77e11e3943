//! 本地文件系统目录来源

use crate::error::{AppError, AppResult};
use crate::listing::source::ListSource;
use crate::models::{EntryType, FileEntry};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// 本地目录来源
///
/// 枚举配置目录下的所有条目，文件带上大小和修改时间
pub struct LocalDirSource {
    dir: PathBuf,
}

impl LocalDirSource {
    /// 创建本地目录来源
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ListSource for LocalDirSource {
    async fn list_entries(&self) -> AppResult<Vec<FileEntry>> {
        let dir_display = self.dir.display().to_string();

        if !self.dir.exists() {
            return Err(AppError::directory_not_found(dir_display));
        }

        debug!("枚举本地目录: {}", dir_display);

        let mut read_dir = fs::read_dir(&self.dir)
            .await
            .map_err(|e| AppError::read_dir_failed(dir_display.clone(), e))?;

        let mut entries = Vec::new();
        loop {
            let entry = read_dir
                .next_entry()
                .await
                .map_err(|e| AppError::read_dir_failed(dir_display.clone(), e))?;
            let Some(entry) = entry else {
                break;
            };

            // 单个条目 stat 失败视为整体枚举失败，不返回部分结果
            let metadata = entry
                .metadata()
                .await
                .map_err(|e| AppError::read_dir_failed(dir_display.clone(), e))?;

            let name = entry.file_name().to_string_lossy().to_string();
            let entry_type = if metadata.is_file() {
                EntryType::File
            } else {
                EntryType::Dir
            };
            let modified = metadata.modified().ok().map(DateTime::<Utc>::from);

            entries.push(FileEntry {
                name,
                entry_type,
                size: metadata.len(),
                modified,
            });
        }

        Ok(entries)
    }
}
