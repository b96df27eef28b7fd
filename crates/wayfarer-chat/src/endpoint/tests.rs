//! HttpEndpoint tests against a one-shot loopback HTTP responder.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use super::*;

/// Accept one connection, capture the raw request, answer with `status` and `body`.
async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let reason = if status < 400 { "OK" } else { "Error" };
        let response = format!(
            "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{addr}/api"), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn endpoint(base_url: &str) -> HttpEndpoint {
    HttpEndpoint::new(
        HttpEndpointConfig::new(base_url)
            .with_connect_timeout(Duration::from_secs(2))
            .with_request_timeout(Duration::from_secs(5)),
    )
    .unwrap()
}

fn token() -> SessionToken {
    SessionToken::from_stored("session_abc")
}

#[test]
fn urls_are_built_under_base() {
    let ep = endpoint("http://localhost:3000/api/");
    assert_eq!(ep.greeting_url(), "http://localhost:3000/api/chat/greeting");
    assert_eq!(ep.message_url(), "http://localhost:3000/api/chat/message");
    assert_eq!(
        ep.history_url(&token()).unwrap().as_str(),
        "http://localhost:3000/api/chat/history/session_abc"
    );
}

#[test]
fn history_url_encodes_token_as_one_segment() {
    let ep = endpoint("http://localhost:3000/api");
    let url = ep.history_url(&SessionToken::from_stored("a/b c")).unwrap();
    assert_eq!(url.as_str(), "http://localhost:3000/api/chat/history/a%2Fb%20c");
}

#[test]
fn send_request_uses_endpoint_field_names() {
    let json = serde_json::to_value(SendRequest::user(token(), "Beach hotels?")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"sessionId": "session_abc", "text": "Beach hotels?", "sender": "user"})
    );
}

#[tokio::test]
async fn fetch_greeting_parses_body() {
    let (base, server) = serve_once(200, r#"{"greetingMessage":"Welcome to Wayfarer!"}"#).await;

    let greeting = endpoint(&base).fetch_greeting().await.unwrap();
    assert_eq!(greeting, "Welcome to Wayfarer!");

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/chat/greeting "));
}

#[tokio::test]
async fn fetch_history_keeps_server_order() {
    let (base, server) = serve_once(
        200,
        r#"[
            {"sessionId":"session_abc","text":"Hi","sender":"user","createdAt":"2025-01-01T00:00:00Z"},
            {"sessionId":"session_abc","text":"Hello again!","sender":"bot","createdAt":"2025-01-01T00:00:01Z"}
        ]"#,
    )
    .await;

    let history = endpoint(&base).fetch_history(&token()).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].origin, Origin::User);
    assert_eq!(history[1].text, "Hello again!");

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/chat/history/session_abc "));
}

#[tokio::test]
async fn fetch_history_empty_list() {
    let (base, _server) = serve_once(200, "[]").await;
    let history = endpoint(&base).fetch_history(&token()).await.unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn send_message_posts_json_and_parses_reply() {
    let (base, server) = serve_once(
        200,
        r#"{
            "userMessage": {"sessionId":"session_abc","text":"Any deals?","sender":"user"},
            "botMessage": {"sessionId":"session_abc","text":"Try Porto in May.","sender":"bot"}
        }"#,
    )
    .await;

    let response = endpoint(&base)
        .send_message(&SendRequest::user(token(), "Any deals?"))
        .await
        .unwrap();
    assert_eq!(response.user_message.text, "Any deals?");
    assert_eq!(response.bot_message.text, "Try Porto in May.");
    assert_eq!(response.bot_message.origin, Origin::Agent);

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/chat/message "));
    assert!(request.contains(r#""sessionId":"session_abc""#));
    assert!(request.contains(r#""sender":"user""#));
}

#[tokio::test]
async fn non_success_status_is_api_error() {
    let (base, _server) = serve_once(500, r#"{"error":"database down"}"#).await;

    let err = endpoint(&base).fetch_greeting().await.unwrap_err();
    match err {
        EndpointError::Api { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("database down"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let (base, _server) = serve_once(200, r#"{"unexpected": true}"#).await;

    let err = endpoint(&base).fetch_greeting().await.unwrap_err();
    assert!(matches!(err, EndpointError::Parse(_)));
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = endpoint(&format!("http://{addr}/api"))
        .fetch_history(&token())
        .await
        .unwrap_err();
    assert!(matches!(err, EndpointError::Network(_)));
}

#[tokio::test]
async fn silent_server_is_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let _server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
        drop(socket);
    });

    let ep = HttpEndpoint::new(
        HttpEndpointConfig::new(format!("http://{addr}/api"))
            .with_request_timeout(Duration::from_millis(200)),
    )
    .unwrap();
    let err = ep.fetch_greeting().await.unwrap_err();
    assert_eq!(err, EndpointError::Timeout);
}

#[tokio::test(start_paused = true)]
async fn call_with_timeout_maps_expiry() {
    let slow = async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok::<_, EndpointError>("late")
    };
    let result = call_with_timeout(Duration::from_secs(5), slow).await;
    assert_eq!(result, Err(EndpointError::Timeout));
}

#[tokio::test]
async fn call_with_timeout_passes_through() {
    let result = call_with_timeout(Duration::from_secs(5), async {
        Err::<(), _>(EndpointError::Network("down".into()))
    })
    .await;
    assert_eq!(result, Err(EndpointError::Network("down".into())));
}
