//! Stub explorer server for integration tests.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Behavior of one scripted route.
#[derive(Clone)]
pub enum Route {
    /// Respond 200 with this body.
    Body(String),
    /// Accept the connection, then close it without responding.
    Drop,
}

/// Minimal HTTP server backed by scripted routes. Unknown paths get a 404.
pub struct StubServer {
    pub base_url: String,
}

impl StubServer {
    pub async fn start(routes: Vec<(&str, Route)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");

        let routes: Arc<HashMap<String, Route>> = Arc::new(
            routes
                .into_iter()
                .map(|(path, route)| (path.to_string(), route))
                .collect(),
        );

        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                tokio::spawn(handle_connection(stream, routes));
            }
        });

        Self {
            base_url: format!("http://{}", addr),
        }
    }
}

async fn handle_connection(mut stream: TcpStream, routes: Arc<HashMap<String, Route>>) {
    let Some(path) = read_request_path(&mut stream).await else {
        return;
    };

    match routes.get(&path) {
        Some(Route::Body(body)) => {
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: text/javascript\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
        Some(Route::Drop) => {
            // Close without a response; the client sees a connection error.
            drop(stream);
        }
        None => {
            let response =
                "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    }
}

/// Read until the end of the request headers and return the request path.
async fn read_request_path(stream: &mut TcpStream) -> Option<String> {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];

    loop {
        let n = stream.read(&mut buf).await.ok()?;
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
        if request.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    let text = String::from_utf8_lossy(&request);
    text.split_whitespace().nth(1).map(|path| path.to_string())
}
