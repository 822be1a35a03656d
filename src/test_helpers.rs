//! Helpers shared by unit tests.
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};

/// Starts a single-shot HTTP server on a random local port. It answers the
/// first request with `status` and a JSON `body`, then resolves to the raw
/// request head it received.
pub async fn serve_once(status: u16, body: &str) -> (u16, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let body = body.to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];

        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = socket.read(&mut buf).await.unwrap();
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
        }

        let response = format!(
            "HTTP/1.1 {status} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );

        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&request).to_lowercase()
    });

    (port, handle)
}

/// Release listing body with one draft and one published `v1` release.
pub const RELEASES_BODY: &str = r#"[
  { "id": 2, "draft": true, "tag_name": "v1.0.32", "name": "next" },
  { "id": 1, "draft": false, "tag_name": "v1.0.31", "name": "current" }
]"#;
