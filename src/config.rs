//! Server configuration read from command-line flags and the environment.

use std::net::SocketAddr;

use clap::Parser;

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "filingtrail=info";

/// Configuration for the `filingtrail-server` binary.
///
/// Every flag can also be set through the environment variable named next to
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "filingtrail-server")]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "FILINGTRAIL_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// `PostgreSQL` connection URL. When absent, history is kept in memory.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "FILINGTRAIL_POOL_SIZE", default_value_t = 8)]
    pub pool_size: u32,

    /// Tracing filter directive, for example `filingtrail=debug`.
    #[arg(long, env = "FILINGTRAIL_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

/// Where assignment history is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local stores, lost on restart.
    InMemory,
    /// `PostgreSQL` through a pooled Diesel connection.
    Postgres {
        /// Connection URL.
        url: String,
        /// Maximum pool size.
        pool_size: u32,
    },
}

impl ServerConfig {
    /// Returns the storage backend selected by this configuration.
    ///
    /// A blank database URL selects the in-memory backend.
    #[must_use]
    pub fn storage(&self) -> StorageBackend {
        match self.database_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => StorageBackend::Postgres {
                url: url.to_owned(),
                pool_size: self.pool_size.max(1),
            },
            _ => StorageBackend::InMemory,
        }
    }
}
