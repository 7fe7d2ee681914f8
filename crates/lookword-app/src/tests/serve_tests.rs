use std::time::Duration;

use lookword_config::server::ServerConfig;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use super::{Fake, state_with};
use crate::serve;

#[tokio::test]
async fn serve_stops_on_cancel() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_with(Fake::Words(&[]), dir.path());
    let server = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        route_prefix: "/api".to_string(),
    };

    let cancel = CancellationToken::new();
    let handle = tokio::spawn({
        let cancel = cancel.clone();
        async move { serve(state, &server, cancel).await }
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    cancel.cancel();

    let result = timeout(Duration::from_secs(2), handle)
        .await
        .expect("server must stop after cancel")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn serve_reports_bind_failure() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_with(Fake::Words(&[]), dir.path());
    let server = ServerConfig {
        host: "256.0.0.1".to_string(),
        port: 0,
        route_prefix: String::new(),
    };

    let err = serve(state, &server, CancellationToken::new()).await.unwrap_err();
    assert!(err.to_string().contains("Failed to bind"));
}
