//! GitHub 仓库目录来源
//!
//! 部署环境没有本地题目目录，改调 GitHub contents API 列出仓库
//! 中的题目文件。请求带 no-store，保证每次都反映仓库当前状态。

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::listing::source::ListSource;
use crate::models::FileEntry;
use async_trait::async_trait;
use tracing::debug;

/// GitHub contents API 来源
pub struct GithubSource {
    client: reqwest::Client,
    base_url: String,
    repo: String,
    dir: String,
    token: Option<String>,
}

impl GithubSource {
    /// 从配置创建 GitHub 来源
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.github_api_base_url.clone(),
            repo: config.github_repo.clone(),
            dir: config.question_dir.clone(),
            token: config.github_token.clone(),
        }
    }

    /// 拼接 contents API 地址
    fn contents_url(&self) -> String {
        format!("{}/repos/{}/contents/{}", self.base_url, self.repo, self.dir)
    }
}

#[async_trait]
impl ListSource for GithubSource {
    async fn list_entries(&self) -> AppResult<Vec<FileEntry>> {
        let url = self.contents_url();
        debug!("请求 GitHub 目录列表: {}", url);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", "question-file-service")
            .header("Cache-Control", "no-store");

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream_bad_status(url, status.as_u16()));
        }

        let entries: Vec<FileEntry> = response.json().await?;
        Ok(entries)
    }
}
