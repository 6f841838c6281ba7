use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level API configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub security: SecurityConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub fetcher: FetcherConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
    /// Allow cross-origin API calls (development; the deployed proxy keeps
    /// everything same-origin).
    pub permissive_cors: bool,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// `SurrealDB` connection configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub credentials: Option<DatabaseCredentials>,
}

/// `SurrealDB` root credentials (optional when using unauthenticated engines like mem://).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseCredentials {
    pub username: String,
    pub password: String,
}

/// Storage roots (generated data and static assets).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Root for generated content; icon files live in `<data_dir>/icons`.
    pub data_dir: PathBuf,
    /// Built front-end assets served with an SPA index fallback.
    pub static_dir: PathBuf,
}

/// Optional API security knobs.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub identity: IdentityConfig,
}

/// Identity/JWT security configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub session_cache_capacity: u64,
    pub jwt: JwtConfig,
    pub bootstrap: BootstrapAdminConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub ttl_seconds: u64,
    pub clock_skew_seconds: u64,
}

/// Credentials used once to seed the admin table on first run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BootstrapAdminConfig {
    pub username: String,
    pub password: String,
}

/// Outbound HTTP client settings for icon/description fetching.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            ssl: None,
            permissive_cors: false,
        }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mem://".to_owned(),
            namespace: "waymark".to_owned(),
            database: "core".to_owned(),
            // Embedded engines run unauthenticated; set credentials for ws/http.
            credentials: None,
        }
    }
}

impl Default for DatabaseCredentials {
    fn default() -> Self {
        Self { username: "root".to_owned(), password: "root".to_owned() }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("data"), static_dir: PathBuf::from("public") }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            session_cache_capacity: 10_000,
            jwt: JwtConfig::default(),
            bootstrap: BootstrapAdminConfig::default(),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "dev-only-change-me".to_owned(),
            issuer: "waymark".to_owned(),
            ttl_seconds: 3600,
            clock_skew_seconds: 60,
        }
    }
}

impl Default for BootstrapAdminConfig {
    fn default() -> Self {
        Self { username: "admin".to_owned(), password: "admin".to_owned() }
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            user_agent: concat!("waymark/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}
