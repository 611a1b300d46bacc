//! Connection configuration for the SurrealDB event store

/// Default namespace for hookfeed data
pub const DEFAULT_NAMESPACE: &str = "hookfeed";

/// Default database within the namespace
pub const DEFAULT_DATABASE: &str = "events";

/// Login used when the server requires authentication
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    /// Whether this is a root user (true) or database user (false)
    pub is_root: bool,
}

/// Where and how to connect to SurrealDB.
///
/// The URL scheme selects the engine: `mem://`, `surrealkv://<path>`,
/// `ws://host:port` or `wss://host`.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub credentials: Option<Credentials>,
}

impl ConnectionConfig {
    /// Create a configuration with default namespace/database and no sign-in
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            credentials: None,
        }
    }

    /// Set custom namespace
    pub fn with_namespace(mut self, ns: impl Into<String>) -> Self {
        self.namespace = ns.into();
        self
    }

    /// Set custom database
    pub fn with_database(mut self, db: impl Into<String>) -> Self {
        self.database = db.into();
        self
    }

    /// Sign in as a database user
    pub fn with_database_user(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
            is_root: false,
        });
        self
    }

    /// Sign in as a root user
    pub fn with_root_user(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
            is_root: true,
        });
        self
    }
}
