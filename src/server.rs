//! HTTP 服务模块
//!
//! 基于 tokio TcpListener 的极简 HTTP/1.1 服务，只承载一个列表接口：
//!
//! - `GET /api/question-files` -> `{ "files": [...] }`
//!
//! 非 GET 方法返回 405，未知路径返回 404，列表失败返回 500。
//! 错误统一在接口边界捕获并转成 JSON 响应，细节记入服务端日志。

use crate::config::Config;
use crate::listing::QuestionFileLister;
use crate::models::ListResponse;
use anyhow::{Context, Result};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};

/// 请求头读取上限，超过直接按已有内容解析
const MAX_HEADER_BYTES: usize = 8 * 1024;

/// 列表接口路径
const LIST_PATH: &str = "/api/question-files";

/// HTTP 服务
pub struct Server {
    listener: TcpListener,
    lister: Arc<QuestionFileLister>,
}

impl Server {
    /// 初始化服务：绑定监听地址并选定目录来源
    pub async fn initialize(config: Config) -> Result<Self> {
        let listener = TcpListener::bind(&config.listen_addr)
            .await
            .with_context(|| format!("无法监听地址: {}", config.listen_addr))?;

        let lister = Arc::new(QuestionFileLister::from_config(&config));

        info!("🚀 服务启动 - 监听 {}", listener.local_addr()?);
        if config.use_remote_listing {
            info!("📡 目录来源: GitHub 仓库 {}", config.github_repo);
        } else {
            info!("📁 目录来源: 本地目录 {}", config.question_dir);
        }

        Ok(Self { listener, lister })
    }

    /// 实际监听地址（监听端口 0 时由系统分配）
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// 运行接受循环，为每个连接派生一个任务
    pub async fn run(self) -> Result<()> {
        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("接受连接失败: {}", e);
                    continue;
                }
            };

            debug!("连接来自 {}", peer);

            let lister = Arc::clone(&self.lister);
            tokio::spawn(async move {
                if let Err(e) = handle_connection(stream, &lister).await {
                    warn!("处理连接失败: {}", e);
                }
            });
        }
    }
}

/// 处理单个连接：读请求头、路由、写 JSON 响应
async fn handle_connection(mut stream: TcpStream, lister: &QuestionFileLister) -> Result<()> {
    let head = read_request_head(&mut stream).await?;

    let request_line = head.lines().next().unwrap_or("");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let raw_path = parts.next().unwrap_or("");
    let path = raw_path.split('?').next().unwrap_or(raw_path);

    if method.is_empty() || raw_path.is_empty() {
        let body = json!({ "error": "Bad request" }).to_string();
        return write_response(&mut stream, "400 Bad Request", &body).await;
    }

    // 方法不对时直接拒绝，不读取请求体
    if method != "GET" {
        debug!("拒绝非 GET 请求: {} {}", method, path);
        let body = json!({ "error": "Method not allowed" }).to_string();
        return write_response(&mut stream, "405 Method Not Allowed", &body).await;
    }

    if path != LIST_PATH {
        let body = json!({ "error": "Not found" }).to_string();
        return write_response(&mut stream, "404 Not Found", &body).await;
    }

    match lister.list().await {
        Ok(files) => {
            let body = serde_json::to_string(&ListResponse { files })?;
            write_response(&mut stream, "200 OK", &body).await
        }
        Err(e) => {
            error!("列出题目文件失败: {}", e);
            let body = json!({
                "error": "Failed to list question files",
                "details": e.to_string(),
            })
            .to_string();
            write_response(&mut stream, "500 Internal Server Error", &body).await
        }
    }
}

/// 读取请求头（到空行为止）
async fn read_request_head(stream: &mut TcpStream) -> Result<String> {
    let mut buf = vec![0u8; MAX_HEADER_BYTES];
    let mut len = 0;

    loop {
        let n = stream.read(&mut buf[len..]).await?;
        if n == 0 {
            break;
        }
        len += n;
        if buf[..len].windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
        if len == buf.len() {
            break;
        }
    }

    Ok(String::from_utf8_lossy(&buf[..len]).into_owned())
}

/// 写出完整的 JSON 响应并关闭连接
async fn write_response(stream: &mut TcpStream, status: &str, body: &str) -> Result<()> {
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await?;

    Ok(())
}
