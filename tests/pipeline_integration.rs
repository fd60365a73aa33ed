//! End-to-end test: crawl a small listing tree, then download everything
//! it discovered.

use dirgrab_core::{Crawler, FailureMode, FolderExplorer, HttpClient, download_all};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_html(server: &MockServer, path_str: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(path_str))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mount_bytes(server: &MockServer, path_str: &str, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path(path_str))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content.to_vec()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_crawl_then_download_writes_every_discovered_file() {
    let server = MockServer::start().await;
    let base = format!("{}/", server.uri());
    let temp_dir = TempDir::new().expect("failed to create temp dir");

    mount_html(
        &server,
        "/",
        r#"<a href="/">Parent</a><a href="books/">books/</a><a href="readme.txt">readme.txt</a>"#
            .to_string(),
    )
    .await;
    mount_html(
        &server,
        "/books/",
        r#"<a href="guide.pdf">guide.pdf</a><a href="index.html">index.html</a>"#.to_string(),
    )
    .await;
    mount_bytes(&server, "/readme.txt", b"readme body").await;
    mount_bytes(&server, "/books/guide.pdf", b"%PDF-1.4 fake").await;

    let client = HttpClient::new();
    let crawler = Crawler::new(FolderExplorer::new(client.clone()));
    let outcome = crawler.crawl(&base).await.expect("crawl should succeed");

    assert_eq!(
        outcome.files,
        vec![format!("{base}readme.txt"), format!("{base}books/guide.pdf")]
    );

    let report = download_all(&client, &outcome.files, temp_dir.path(), FailureMode::Strict)
        .await
        .expect("downloads should succeed");

    assert_eq!(report.completed(), 2);
    assert_eq!(report.failed(), 0);

    // Base names only: the folder structure is intentionally flattened.
    assert_eq!(
        std::fs::read(temp_dir.path().join("readme.txt")).unwrap(),
        b"readme body"
    );
    assert_eq!(
        std::fs::read(temp_dir.path().join("guide.pdf")).unwrap(),
        b"%PDF-1.4 fake"
    );
    // index.html was classified Other and never downloaded.
    assert!(!temp_dir.path().join("index.html").exists());
}
