//! Server configuration module

use clap::Parser;

use crate::config::{catalog::CatalogConfig, observability::LoggingConfig, server::ServerRuntimeConfig};

pub(crate) mod catalog;
pub(crate) mod observability;
pub(crate) mod server;

/// Shop JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "shop-json", about = "Shop JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Catalog seeding settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use testresult::TestResult;

    use super::*;

    fn declared_default(id: &str) -> Option<String> {
        ServerConfig::command()
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .and_then(|arg| arg.get_default_values().first())
            .map(|value| value.to_string_lossy().into_owned())
    }

    #[test]
    fn declared_defaults() {
        assert_eq!(declared_default("port").as_deref(), Some("8698"));
        assert_eq!(declared_default("slow_request_threshold_ms").as_deref(), Some("1000"));
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "shop-json",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--catalog-fixture",
            "catalog.yml",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9000");
        assert_eq!(
            config.catalog.catalog_fixture.as_deref(),
            Some(std::path::Path::new("catalog.yml"))
        );

        Ok(())
    }
}
