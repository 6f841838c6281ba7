//! Facade crate for Waymark features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] to register feature slices; extend as new slices appear.

pub use waymark_domain as domain;
pub use waymark_kernel as kernel;

use waymark_database::Database;
use waymark_domain::config::ApiConfig;

pub mod server {
    pub mod router {
        pub use waymark_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use waymark_catalog as catalog;
    pub use waymark_identity as identity;

    /// Features compiled into this build.
    pub const ENABLED: &[&str] = &["catalog", "identity"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
    database: &Database,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Catalog
    slices.push(features::catalog::init(config, database)?);

    // Identity & admin sessions
    slices.push(features::identity::init(config, database)?);

    Ok(slices)
}
