//! Server Config

use clap::Args;

/// Where the HTTP listener binds.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Interface to listen on
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 8698)]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// `host:port`, ready for the listener.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
