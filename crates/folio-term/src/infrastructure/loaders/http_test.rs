use std::time::Duration;

use super::*;

const PORTFOLIO: &str = r#"{
    "name": "Ali Bacelonia",
    "title": "Platform Engineer",
    "contact": {"Email": "ali@example.com"}
}"#;

fn loader(server: &mockito::Server) -> HttpLoader {
    return HttpLoader::new(
        &format!("{}/static/portfolio.json", server.url()),
        Duration::from_secs(5),
    );
}

#[tokio::test]
async fn it_loads_a_json_document() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/static/portfolio.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PORTFOLIO)
        .create_async()
        .await;

    let document = loader(&server).load().await.unwrap();

    mock.assert_async().await;
    assert_eq!(document.name(), Some("Ali Bacelonia".to_string()));
    assert_eq!(
        document.contact(),
        vec![("Email".to_string(), "ali@example.com".to_string())]
    );
}

#[tokio::test]
async fn it_fails_on_a_non_success_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/static/portfolio.json")
        .with_status(404)
        .create_async()
        .await;

    let err = loader(&server).load().await.unwrap_err();

    assert!(matches!(err, LoadError::Status { status: 404, .. }));
    assert!(err.to_string().contains("HTTP 404"));
}

#[tokio::test]
async fn it_fails_on_invalid_json() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/static/portfolio.json")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let err = loader(&server).load().await.unwrap_err();

    assert!(matches!(err, LoadError::Parse { .. }));
}

#[tokio::test]
async fn it_fails_when_the_server_is_unreachable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let loader = HttpLoader::new(
        &format!("http://{addr}/static/portfolio.json"),
        Duration::from_secs(5),
    );
    let err = loader.load().await.unwrap_err();

    assert!(matches!(err, LoadError::Transport { .. }));
}
