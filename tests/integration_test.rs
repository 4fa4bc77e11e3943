use question_file_service::merge::{
    load_question_array, merge_question_sets, write_question_array,
};
use question_file_service::{Config, ListResponse, Server};
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// 启动测试服务，返回实际监听地址
async fn spawn_server(config: Config) -> SocketAddr {
    let server = Server::initialize(config).await.expect("服务初始化失败");
    let addr = server.local_addr().expect("获取监听地址失败");
    tokio::spawn(server.run());
    addr
}

/// 本地目录模式的测试配置
fn local_config(question_dir: &std::path::Path) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        question_dir: question_dir.to_string_lossy().to_string(),
        use_remote_listing: false,
        ..Config::default()
    }
}

/// 模拟 GitHub contents API，对任何请求返回固定响应
async fn spawn_mock_github(status: &'static str, body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("绑定失败");
    let addr = listener.local_addr().expect("获取地址失败");

    tokio::spawn(async move {
        loop {
            let (mut stream, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => break,
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf).await;

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    addr
}

#[tokio::test]
async fn test_list_endpoint_with_local_directory() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    for name in [
        "questions.json",
        "a10.json",
        "a2.json",
        "chemistry2.json",
        "manifest.json",
        "readme.md",
    ] {
        std::fs::write(dir.path().join(name), b"[]").expect("写入测试文件失败");
    }

    let addr = spawn_server(local_config(dir.path())).await;

    let url = format!("http://{}/api/question-files", addr);
    let response = reqwest::get(&url).await.expect("请求失败");
    assert_eq!(response.status(), 200);

    let list: ListResponse = response.json().await.expect("解析响应失败");
    let names: Vec<&str> = list.files.iter().map(|f| f.name.as_str()).collect();

    // questions.json 固定第一，其余按自然数字排序；系统文件和非 JSON 被排除
    assert_eq!(
        names,
        vec!["questions.json", "a2.json", "a10.json", "chemistry2.json"]
    );

    assert_eq!(list.files[0].display_name, "Default Question Set");
    assert_eq!(list.files[3].display_name, "Chemistry 2");
    assert_eq!(list.files[0].size, 2);
    assert!(!list.files[0].last_modified.is_empty());
}

#[tokio::test]
async fn test_non_get_method_is_rejected() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let addr = spawn_server(local_config(dir.path())).await;

    let client = reqwest::Client::new();
    let url = format!("http://{}/api/question-files", addr);
    let response = client.post(&url).body("{}").send().await.expect("请求失败");

    assert_eq!(response.status(), 405);

    let body: serde_json::Value = response.json().await.expect("解析响应失败");
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let addr = spawn_server(local_config(dir.path())).await;

    let url = format!("http://{}/api/other", addr);
    let response = reqwest::get(&url).await.expect("请求失败");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_missing_directory_is_500_with_details() {
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        question_dir: "/definitely/not/a/real/dir".to_string(),
        use_remote_listing: false,
        ..Config::default()
    };
    let addr = spawn_server(config).await;

    let url = format!("http://{}/api/question-files", addr);
    let response = reqwest::get(&url).await.expect("请求失败");

    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await.expect("解析响应失败");
    assert_eq!(body["error"], "Failed to list question files");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_list_endpoint_with_remote_listing() {
    let mock_addr = spawn_mock_github(
        "200 OK",
        r#"[
            {"name": "questions.json", "type": "file", "size": 111},
            {"name": "assets", "type": "dir", "size": 0},
            {"name": "questions-4.json", "type": "file", "size": 22}
        ]"#,
    )
    .await;

    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        use_remote_listing: true,
        github_api_base_url: format!("http://{}", mock_addr),
        ..Config::default()
    };
    let addr = spawn_server(config).await;

    let url = format!("http://{}/api/question-files", addr);
    let response = reqwest::get(&url).await.expect("请求失败");
    assert_eq!(response.status(), 200);

    let list: ListResponse = response.json().await.expect("解析响应失败");
    let names: Vec<&str> = list.files.iter().map(|f| f.name.as_str()).collect();

    assert_eq!(names, vec!["questions.json", "questions-4.json"]);
    assert_eq!(list.files[1].display_name, "Question Set 4");
    assert_eq!(list.files[0].size, 111);
}

#[tokio::test]
async fn test_remote_listing_upstream_failure_is_500() {
    let mock_addr = spawn_mock_github("403 Forbidden", r#"{"message": "rate limited"}"#).await;

    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        use_remote_listing: true,
        github_api_base_url: format!("http://{}", mock_addr),
        ..Config::default()
    };
    let addr = spawn_server(config).await;

    let url = format!("http://{}/api/question-files", addr);
    let response = reqwest::get(&url).await.expect("请求失败");

    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await.expect("解析响应失败");
    let details = body["details"].as_str().expect("缺少 details 字段");
    assert!(details.contains("403"), "详情应包含上游状态码: {}", details);
}

#[test]
fn test_merge_end_to_end() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let first_path = dir.path().join("p1.json");
    let second_path = dir.path().join("p2.json");
    let output_path = dir.path().join("combined.json");

    std::fs::write(
        &first_path,
        r#"[{"id": 5, "q": "a"}, {"id": 3, "q": "b"}]"#,
    )
    .expect("写入测试文件失败");
    std::fs::write(&second_path, r#"[{"id": 9, "q": "c"}]"#).expect("写入测试文件失败");

    let first = load_question_array(&first_path).expect("加载失败");
    let second = load_question_array(&second_path).expect("加载失败");
    let merged = merge_question_sets(first, second);
    write_question_array(&output_path, &merged).expect("写入失败");

    // 输出重新加载后 id 为 1..n 连续无空洞
    let reloaded = load_question_array(&output_path).expect("输出应可重新加载");
    let ids: Vec<u64> = reloaded.iter().map(|q| q["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let stems: Vec<&str> = reloaded.iter().map(|q| q["q"].as_str().unwrap()).collect();
    assert_eq!(stems, vec!["a", "b", "c"]);

    // 对输出再跑一次合并（自身 + 自身），id 仍是 1..2n
    let doubled = merge_question_sets(reloaded.clone(), reloaded);
    let ids: Vec<u64> = doubled.iter().map(|q| q["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_merge_validation_failure_leaves_no_output() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let bad_path = dir.path().join("single.json");
    let output_path = dir.path().join("combined.json");

    std::fs::write(&bad_path, r#"{"id": 1, "q": "a"}"#).expect("写入测试文件失败");

    // 校验在写输出之前失败
    assert!(load_question_array(&bad_path).is_err());
    assert!(!output_path.exists(), "校验失败时不应生成输出文件");
}
