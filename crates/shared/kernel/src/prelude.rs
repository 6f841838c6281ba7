//! Ergonomic re-exports for slice and app crates.

pub use crate::config::{ConfigError, load_config};
pub use crate::safe_nanoid;
pub use crate::security::resource::ResourceGuard;
pub use crate::server::{ApiState, ApiStateBuilder, ApiStateError};
pub use waymark_domain::config::ApiConfig;
