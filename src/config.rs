/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 服务监听地址
    pub listen_addr: String,
    /// 题目文件存放目录（本地模式）
    pub question_dir: String,
    /// 是否使用远程仓库列表（部署环境）
    pub use_remote_listing: bool,
    /// GitHub 仓库（owner/repo 格式）
    pub github_repo: String,
    /// GitHub API 令牌（可选，匿名访问有频率限制）
    pub github_token: Option<String>,
    /// GitHub API 基础地址（测试时可指向 mock 服务）
    pub github_api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:3030".to_string(),
            question_dir: "public".to_string(),
            use_remote_listing: false,
            github_repo: "maruf7705/50MCQ".to_string(),
            github_token: None,
            github_api_base_url: "https://api.github.com".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(default.listen_addr),
            question_dir: std::env::var("QUESTION_DIR").unwrap_or(default.question_dir),
            // 部署平台会注入 DEPLOY_TARGET，本地开发时不存在
            use_remote_listing: std::env::var("DEPLOY_TARGET").is_ok(),
            github_repo: std::env::var("GITHUB_REPO").unwrap_or(default.github_repo),
            github_token: std::env::var("GITHUB_TOKEN").ok(),
            github_api_base_url: std::env::var("GITHUB_API_BASE_URL")
                .unwrap_or(default.github_api_base_url),
        }
    }
}
