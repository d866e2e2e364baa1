//! Shop JSON API Server

use std::process::ExitCode;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use shop_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod carts;
mod config;
mod extensions;
mod healthcheck;
mod observability;
mod products;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Shop JSON API Server entry point
#[tokio::main]
pub async fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(parse_error) => {
            // Logging is not initialised yet; clap prints usage and help itself.
            _ = parse_error.print();

            return if parse_error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("{init_error}");
        }

        return ExitCode::FAILURE;
    }

    let app = match config.catalog.catalog_fixture.as_deref() {
        Some(path) => match AppContext::from_fixture(path) {
            Ok(app) => app,
            Err(init_error) => {
                error!("failed to initialize app context: {init_error}");

                return ExitCode::FAILURE;
            }
        },
        None => AppContext::in_memory(),
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .push(router::app_router());

    let doc = OpenApi::new("Shop API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;

    info!("server stopped");

    ExitCode::SUCCESS
}
