//! Daemon configuration.
//!
//! Every option can come from the command line or the environment. When
//! running outside a hosted deployment (no `RENDER` variable), a local
//! `.env` file is loaded first.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;
use hookfeed_state::ConnectionConfig;
use tracing::Level;

/// GitHub caps webhook payloads at 25 MiB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

#[derive(Parser, Debug, Clone)]
#[command(name = "hookfeedd")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "GitHub webhook receiver serving a recent-activity feed", long_about = None)]
pub struct Args {
    /// SurrealDB connection URL (mem://, surrealkv://<path>, ws://host:port, wss://host)
    #[arg(long, env = "SURREALDB_URL")]
    pub db_url: String,

    /// SurrealDB namespace
    #[arg(long, env = "SURREALDB_NAMESPACE", default_value = "hookfeed")]
    pub db_namespace: String,

    /// SurrealDB database
    #[arg(long, env = "SURREALDB_DATABASE", default_value = "events")]
    pub db_database: String,

    /// SurrealDB username (sign-in is skipped when unset)
    #[arg(long, env = "SURREALDB_USERNAME", requires = "db_password")]
    pub db_username: Option<String>,

    /// SurrealDB password
    #[arg(long, env = "SURREALDB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Sign in as a root user instead of a database user
    #[arg(long, env = "SURREALDB_ROOT", value_parser = clap::builder::FalseyValueParser::new())]
    pub db_root: bool,

    /// Address to bind
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Largest accepted webhook body, in bytes
    #[arg(long, env = "HOOKFEED_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Load `.env` (unless hosted) and parse the process arguments.
    pub fn load() -> Self {
        if std::env::var_os("RENDER").is_none() {
            dotenvy::dotenv().ok();
        }
        Self::parse()
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    pub fn connection_config(&self) -> ConnectionConfig {
        let config = ConnectionConfig::new(&self.db_url)
            .with_namespace(&self.db_namespace)
            .with_database(&self.db_database);

        match (&self.db_username, &self.db_password) {
            (Some(user), Some(pass)) if self.db_root => config.with_root_user(user, pass),
            (Some(user), Some(pass)) => config.with_database_user(user, pass),
            _ => config,
        }
    }
}
