use crate::config::AppConfig;
use crate::responses::error_response;
use crate::router::handle;
use crate::state::AppState;
use astra::{Request, Server};
use std::net::SocketAddr;
use tracing::{error, info};

mod cache;
mod config;
mod domain;
mod errors;
mod query;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    init_logging();

    // 1️⃣ Load config (defaults when no file is present)
    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("❌ Configuration failed: {e}");
            std::process::exit(1);
        }
    };

    let addr: SocketAddr = match config.server.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("❌ Invalid bind address '{}': {e}", config.server.bind_addr);
            std::process::exit(1);
        }
    };
    let max_workers = config.server.max_workers;

    // 2️⃣ Shared state: config plus the in-memory dataset cache
    let state = AppState::new(config);

    // 3️⃣ Start the server
    info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(max_workers);

    let result = server.serve(move |req: Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => error_response(err),
        };

        info!(%method, %path, status = resp.status().as_u16(), "request");
        resp
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}

/// `RUST_LOG` overrides the default filter; `DEAL_FINDER_LOG_JSON` switches
/// to JSON lines.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("deal_finder=info"));

    if std::env::var("DEAL_FINDER_LOG_JSON").is_ok() {
        fmt().json().with_env_filter(env_filter).with_target(true).init();
    } else {
        fmt().with_env_filter(env_filter).with_target(true).init();
    }
}
