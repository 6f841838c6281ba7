//! Entity table names and `OpenAPI` tags shared across slices.

pub const CATEGORY: &str = "category";
pub const WEBSITE: &str = "website";
pub const ADMIN: &str = "admin";

pub const SYSTEM_TAG: &str = "System";
pub const AUTH_TAG: &str = "Auth";
pub const CATALOG_TAG: &str = "Catalog";
