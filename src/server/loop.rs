// Server loop module
// Accepts connections until a shutdown signal arrives

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config;
use crate::logger;

/// Accept loop for the explorer
///
/// Runs inside a `LocalSet`: each connection is served by a `spawn_local`
/// task. Returns once `shutdown` resolves; the listener is closed on return.
#[allow(clippy::ignored_unit_patterns)]
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<config::AppState>,
    shutdown: impl Future<Output = ()>,
) -> Result<(), Box<dyn std::error::Error>> {
    let active_connections = Arc::new(AtomicUsize::new(0));
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = &mut shutdown => {
                drop(listener);
                logger::log_shutdown(active_connections.load(Ordering::SeqCst));
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::explorer::Explorer;
    use crate::server::create_listener;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    #[tokio::test]
    async fn test_serves_download_over_tcp() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("hello.txt"), b"hi").unwrap();

        let mut config = Config::default();
        config.logging.access_log = false;
        let state = Arc::new(config::AppState::new(&config, Explorer::new(dir.path())));
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();

        let local = tokio::task::LocalSet::new();
        let response = local
            .run_until(async move {
                let stop = async move {
                    let _ = stop_rx.await;
                };
                let server = tokio::task::spawn_local(start_server_loop(listener, state, stop));

                let mut stream = TcpStream::connect(addr).await.unwrap();
                stream
                    .write_all(
                        b"GET /download/hello.txt HTTP/1.1\r\nHost: test\r\nConnection: close\r\n\r\n",
                    )
                    .await
                    .unwrap();
                let mut raw = Vec::new();
                stream.read_to_end(&mut raw).await.unwrap();

                stop_tx.send(()).unwrap();
                server.await.unwrap().unwrap();
                String::from_utf8(raw).unwrap()
            })
            .await;

        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.to_ascii_lowercase().contains("content-type: text/plain"));
        assert!(response.ends_with("\r\n\r\nhi"));
    }
}
