//! Built-in schema manifest.
//!
//! Each entry is an ordered, immutable SurrealQL script. Never edit a script
//! after it has shipped; add a new version for the same slice instead. The
//! runner stores a content checksum and refuses to start on drift.

use crate::migrations::Migration;

const CATALOG_V1: &str = "
DEFINE TABLE category SCHEMAFULL;
DEFINE FIELD name ON category TYPE string;
DEFINE FIELD position ON category TYPE int DEFAULT 0;
DEFINE FIELD created_at ON category TYPE datetime DEFAULT time::now();
DEFINE INDEX category_name ON category FIELDS name UNIQUE;

DEFINE TABLE website SCHEMAFULL;
DEFINE FIELD name ON website TYPE string;
DEFINE FIELD url ON website TYPE string;
DEFINE FIELD icon_url ON website TYPE option<string>;
DEFINE FIELD description ON website TYPE option<string>;
DEFINE FIELD position ON website TYPE int DEFAULT 0;
DEFINE FIELD category ON website TYPE record<category>;
DEFINE FIELD created_at ON website TYPE datetime DEFAULT time::now();
DEFINE INDEX website_category ON website FIELDS category;
";

const IDENTITY_V1: &str = "
DEFINE TABLE admin SCHEMAFULL;
DEFINE FIELD username ON admin TYPE string;
DEFINE FIELD password_hash ON admin TYPE string;
DEFINE FIELD created_at ON admin TYPE datetime DEFAULT time::now();
DEFINE INDEX admin_username ON admin FIELDS username UNIQUE;
";

pub(crate) fn builtin_migrations() -> Vec<Migration> {
    vec![
        Migration::new("catalog", "v1", CATALOG_V1),
        Migration::new("identity", "v1", IDENTITY_V1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;

    #[test]
    fn manifest_entries_are_unique() {
        let migrations = builtin_migrations();
        let keys: FxHashSet<_> =
            migrations.iter().map(|m| (m.slice_key, m.version)).collect();
        assert_eq!(keys.len(), migrations.len());
    }
}
