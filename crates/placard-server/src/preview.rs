use std::path::PathBuf;
use std::time::Instant;

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    http::{StatusCode, header},
    middleware,
    response::IntoResponse,
};
use tokio::fs;
use tracing::Level;

use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::server_utils::{CustomOnResponse, bind_listener, log_server_start, store_request_uri};
use crate::{ServerError, ServerOptions};

async fn handle_404(dist_dir: PathBuf) -> impl IntoResponse {
    let content = match fs::read_to_string(dist_dir.join("404.html")).await {
        Ok(custom_content) => custom_content,
        Err(_) => include_str!("./404.html").to_string(),
    };

    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        content,
    )
        .into_response()
}

/// Serves the files of a built website. Unknown paths get the site's `404.html`, or a built-in page if there is none.
pub fn preview_router(dist_dir: PathBuf) -> Router {
    let dist_dir_clone = dist_dir.clone();
    let service = (move || handle_404(dist_dir_clone.clone())).into_service();
    let serve_dir = ServeDir::new(dist_dir).not_found_service(service);

    Router::new()
        .fallback_service(serve_dir)
        .layer(middleware::from_fn(store_request_uri))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(CustomOnResponse),
        )
}

pub async fn start_preview_web_server(
    dist_dir: PathBuf,
    options: ServerOptions,
) -> Result<(), ServerError> {
    let start_time = Instant::now();

    if !dist_dir.exists() {
        return Err(ServerError::MissingOutputDir(
            dist_dir.display().to_string(),
        ));
    }

    let listener = bind_listener(options.address(), options.port).await?;

    log_server_start(
        start_time,
        options.host,
        listener.local_addr()?,
        "Preview",
    );

    axum::serve(listener, preview_router(dist_dir).into_make_service()).await?;

    Ok(())
}
