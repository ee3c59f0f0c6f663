use crate::auth::AuthConfig;

/// Server configuration loaded from environment variables.
///
/// Everything except the identity provider settings has a default suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// Methods advertised in `Access-Control-Allow-Methods`, parsed from
    /// comma-separated `CORS_ALLOW_METHODS`.
    pub cors_allow_methods: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Identity provider settings used to verify bearer tokens.
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default           |
    /// |------------------------|-------------------|
    /// | `HOST`                 | `0.0.0.0`         |
    /// | `PORT`                 | `3000`            |
    /// | `CORS_ORIGINS`         | `*`               |
    /// | `CORS_ALLOW_METHODS`   | `GET,POST,DELETE` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`              |
    ///
    /// See [`AuthConfig::from_env`] for the identity provider variables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = comma_list(&std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()));

        let cors_allow_methods = comma_list(
            &std::env::var("CORS_ALLOW_METHODS").unwrap_or_else(|_| "GET,POST,DELETE".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let auth = AuthConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            cors_allow_methods,
            request_timeout_secs,
            auth,
        }
    }
}

fn comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
