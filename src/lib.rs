//! # Question File Service
//!
//! MCQ 考试应用的题目文件后端
//!
//! ## 架构设计
//!
//! 本系统分为三层：
//!
//! ### ① 来源层（Source）
//! - `listing/source` - 目录枚举能力接口，启动时选定实现
//! - `listing/local` - 本地文件系统枚举
//! - `listing/github` - GitHub contents API 枚举（部署环境）
//!
//! ### ② 业务层（Listing / Merge）
//! - `listing` - 过滤题目文件、推导显示名称、自然数字排序
//! - `merge` - 题目数组拼接与 id 重新编号
//!
//! ### ③ 接口层（Server / CLI）
//! - `server` - GET /api/question-files 列表接口
//! - `bin/merge_questions` - 合并脚本
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod listing;
pub mod logger;
pub mod merge;
pub mod models;
pub mod server;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use listing::QuestionFileLister;
pub use models::{FileEntry, ListResponse, QuestionFileDescriptor};
pub use server::Server;
