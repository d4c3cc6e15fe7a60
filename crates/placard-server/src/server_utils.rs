use axum::{
    body::Body,
    extract::Request,
    http::Uri,
    middleware::Next,
    response::Response,
};
use colored::Colorize;
use local_ip_address::local_ip;
use placard::logging::{FormatElapsedTimeOptions, format_elapsed_time};
use std::{
    net::{IpAddr, SocketAddr},
    time::{Duration, Instant},
};
use tokio::net::{TcpListener, TcpSocket};
use tower_http::trace::OnResponse;
use tracing::{Span, debug, info};

use crate::ServerError;

pub fn log_server_start(start_time: Instant, host: bool, addr: SocketAddr, server_type: &str) {
    info!(name: "SKIP_FORMAT", "");
    let elapsed_time = format_elapsed_time(start_time.elapsed(), &FormatElapsedTimeOptions::default());
    info!(name: "SKIP_FORMAT", "{} {}", "Placard".bold().bright_red(), format!("{} server started in {}", server_type, elapsed_time));
    info!(name: "SKIP_FORMAT", "");

    let port = addr.port();
    let url = format!("\x1b]8;;http://localhost:{port}\x1b\\http://localhost:{port}\x1b]8;;\x1b\\")
        .bold()
        .underline()
        .bright_blue();
    let network_url = match (host, local_ip()) {
        (true, Ok(local_ip)) => format!(
            "\x1b]8;;http://{local_ip}:{port}\x1b\\http://{local_ip}:{port}\x1b]8;;\x1b\\"
        )
        .bold()
        .underline()
        .bright_magenta(),
        (true, Err(_)) => "Could not determine the local network address".dimmed(),
        (false, _) => "Use --host to expose the server to your network".dimmed(),
    };
    info!(name: "SKIP_FORMAT", "🮔  {}    {}", "Local".bold(), url);
    info!(name: "SKIP_FORMAT", "🮔  {}  {}", "Network".bold(), network_url);
    info!(name: "SKIP_FORMAT", "");

    info!(name: "server", "{}", "waiting for requests...".dimmed());
}

/// Copies the request URI into the response extensions, so [`CustomOnResponse`] can log it.
pub async fn store_request_uri(request: Request, next: Next) -> Response {
    let uri = request.uri().clone();
    let mut response = next.run(request).await;
    response.extensions_mut().insert(uri);
    response
}

#[derive(Clone, Debug)]
pub struct CustomOnResponse;

impl OnResponse<Body> for CustomOnResponse {
    fn on_response(self, response: &Response<Body>, latency: Duration, _span: &Span) {
        let status = response.status();

        // Skip informational responses
        if status.is_informational() {
            return;
        }

        let status = if status.is_server_error() {
            status.to_string().red()
        } else if status.is_client_error() {
            status.to_string().yellow()
        } else {
            status.to_string().green()
        };

        let uri = response
            .extensions()
            .get::<Uri>()
            .map(Uri::to_string)
            .unwrap_or_default()
            .bold();

        let latency = format_elapsed_time(latency, &FormatElapsedTimeOptions::default());

        let message = format!("{} {} {}", status, uri, latency);

        info!(name: "", "{}", message);
    }
}

pub async fn find_open_port(address: &IpAddr, starting_port: u16) -> Result<u16, ServerError> {
    for port in starting_port..=u16::MAX {
        let socket = new_socket(address)?;
        let socket_addr = SocketAddr::new(*address, port);
        match socket.bind(socket_addr) {
            Ok(_) => {
                debug!("Found open port: {}", port);
                return Ok(port);
            }
            Err(_) => {
                debug!(
                    "Port {} is already in use or failed to bind, trying next one",
                    port
                );
            }
        }
    }

    Err(ServerError::NoOpenPort {
        from: starting_port,
    })
}

/// Binds a listener on the first open port at or after `starting_port`.
pub async fn bind_listener(address: IpAddr, starting_port: u16) -> Result<TcpListener, ServerError> {
    let port = find_open_port(&address, starting_port).await?;
    let socket = new_socket(&address)?;
    let _ = socket.set_reuseaddr(true);

    socket.bind(SocketAddr::new(address, port))?;

    let listener = socket.listen(1024)?;
    debug!("listening on {}", listener.local_addr()?);

    Ok(listener)
}

fn new_socket(address: &IpAddr) -> Result<TcpSocket, ServerError> {
    let socket = match address {
        IpAddr::V4(_) => TcpSocket::new_v4()?,
        IpAddr::V6(_) => TcpSocket::new_v6()?,
    };

    Ok(socket)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn find_open_port_skips_ports_in_use() {
        let address = IpAddr::from([127, 0, 0, 1]);
        let taken = std::net::TcpListener::bind((address, 0)).unwrap();
        let taken_port = taken.local_addr().unwrap().port();

        let port = find_open_port(&address, taken_port).await.unwrap();

        assert_ne!(port, taken_port);
        assert!(port > taken_port);
    }

    #[tokio::test]
    async fn bind_listener_uses_an_open_port() {
        let listener = bind_listener(IpAddr::from([127, 0, 0, 1]), 1864)
            .await
            .unwrap();

        assert!(listener.local_addr().unwrap().port() >= 1864);
    }
}
