//! HTTP routes
//!
//! - GET  {prefix}/lookupword?w=<word> - combined lookup as JSON
//! - POST {prefix}/save                - export a lookup result to the dump file
//! - GET  /download                    - the last exported file

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use lookword_core::export::parse_body;
use lookword_core::format_with_style;
use lookword_core::preprocess::{DefaultPreprocessor, Preprocessor};
use lookword_types::LookupResult;
use serde::Deserialize;
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub w: Option<String>,
}

/// Build the service; `prefix` of `None` mounts the API at the root
pub fn router(state: Arc<AppState>, prefix: Option<&str>) -> Router {
    let api = Router::new()
        .route("/lookupword", get(lookup_word))
        .route("/save", post(save));

    let app = match prefix {
        Some(prefix) => Router::new().nest(prefix, api),
        None => api,
    };

    app.route("/download", get(download))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn lookup_word(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LookupQuery>,
) -> Result<Json<LookupResult>, ApiError> {
    let query = DefaultPreprocessor.process(params.w.as_deref().unwrap_or_default());
    if query.is_empty() {
        return Err(ApiError::MissingQuery);
    }

    tracing::info!("Looking up '{query}'");
    let result = state.aggregator.aggregate(&query).await?;
    Ok(Json(result))
}

async fn save(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body?;
    let result = parse_body(&body)?;
    let text = format_with_style(&result, state.export.style);

    let path = Path::new(&state.export.path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    write_replacing(path, text.as_bytes()).await?;

    tracing::info!("Saved '{}' to {}", result.query, path.display());
    Ok(Json(json!({})))
}

async fn download(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let path = Path::new(&state.export.path);

    let body = match tokio::fs::read(path).await {
        Ok(body) => body,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(ApiError::NothingSaved),
        Err(e) => return Err(e.into()),
    };

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("save.txt");

    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
    ];
    Ok((headers, body))
}

static STAGING_SEQ: AtomicU64 = AtomicU64::new(0);

/// Write next to `path` and rename over it, so `/download` never sees a partial file
async fn write_replacing(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("save.txt");
    let staging = path.with_file_name(format!(
        ".{name}.{}-{}.tmp",
        std::process::id(),
        STAGING_SEQ.fetch_add(1, Ordering::Relaxed)
    ));

    tokio::fs::write(&staging, contents).await?;
    if let Err(e) = tokio::fs::rename(&staging, path).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(e);
    }
    Ok(())
}
