use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri, header},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use placard::route::{self, PageContext, PageParams, RenderResult, Resolution, Route};
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::{Level, error};

use crate::server_utils::{CustomOnResponse, bind_listener, log_server_start, store_request_uri};
use crate::{ServerError, ServerOptions};

/// What the live server needs to answer requests: the route table and the site data handed to pages.
pub struct LiveState<S> {
    pub router: route::Router<S>,
    pub site: S,
}

/// Serves the files of `static_dir`, and resolves every other request path through the route table to render the matched page.
///
/// A path no route matches gets a `404` with the not-found page, or a plain body when the router has none.
/// Only `GET` and `HEAD` are answered, other methods get a `405`.
pub fn live_router<S>(router: route::Router<S>, site: S, static_dir: PathBuf) -> Router
where
    S: Send + Sync + 'static,
{
    let pages = Router::new()
        .fallback(get(render_request::<S>))
        .with_state(Arc::new(LiveState { router, site }));

    Router::new()
        .fallback_service(ServeDir::new(static_dir).fallback(pages))
        .layer(middleware::from_fn(store_request_uri))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(CustomOnResponse),
        )
}

async fn render_request<S>(State(state): State<Arc<LiveState<S>>>, uri: Uri) -> Response
where
    S: Send + Sync + 'static,
{
    respond(&state, uri.path())
}

fn respond<S>(state: &LiveState<S>, path: &str) -> Response {
    match state.router.resolve(path) {
        Resolution::Page(found) => {
            render(found.route, &found.params, &state.site, path, StatusCode::OK)
        }
        Resolution::NotFound(Some(not_found)) => render(
            not_found,
            &PageParams::default(),
            &state.site,
            path,
            StatusCode::NOT_FOUND,
        ),
        Resolution::NotFound(None) => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}

fn render<S>(
    route: &dyn Route<S>,
    params: &PageParams,
    site: &S,
    path: &str,
    status: StatusCode,
) -> Response {
    let ctx = PageContext {
        site,
        params,
        current_path: path,
        base_url: None,
    };

    match route.render(&ctx) {
        RenderResult::Text(html) => (
            status,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            html,
        )
            .into_response(),
        RenderResult::Raw(content) => (
            status,
            [(header::CONTENT_TYPE, content_type_for(route.raw_path()))],
            content,
        )
            .into_response(),
        RenderResult::Err(err) => {
            error!(name: "server", "Failed to render {}: {}", path, err);
            (StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error").into_response()
        }
    }
}

fn content_type_for(raw_path: &str) -> String {
    mime_guess::from_path(raw_path)
        .first_or_octet_stream()
        .to_string()
}

pub async fn start_live_server<S>(
    router: route::Router<S>,
    site: S,
    static_dir: PathBuf,
    options: ServerOptions,
) -> Result<(), ServerError>
where
    S: Send + Sync + 'static,
{
    let start_time = Instant::now();

    let listener = bind_listener(options.address(), options.port).await?;

    log_server_start(start_time, options.host, listener.local_addr()?, "Live");

    axum::serve(
        listener,
        live_router(router, site, static_dir).into_make_service(),
    )
    .await?;

    Ok(())
}
