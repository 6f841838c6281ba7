use std::path::PathBuf;
use waymark_domain::config::{ApiConfig, DatabaseConfig, ServerConfig, StorageConfig};

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 8000);
    assert!(server.ssl.is_none());
    assert!(!server.permissive_cors);

    let db = DatabaseConfig::default();
    assert_eq!(db.url, "mem://");
    assert_eq!(db.namespace, "waymark");
    assert_eq!(db.database, "core");
    assert!(db.credentials.is_none());

    let storage = StorageConfig::default();
    assert_eq!(storage.static_dir, PathBuf::from("public"));
    assert_eq!(storage.data_dir, PathBuf::from("data"));
}

#[test]
fn api_config_deserializes() {
    let raw = serde_json::json!({
        "server": { "address": "::", "port": 8080 },
        "database": { "url": "mem://", "namespace": "n", "database": "d", "credentials": null },
        "storage": { "data_dir": "/tmp/data", "static_dir": "/tmp/static" },
        "security": { "identity": { "jwt": { "secret": "s3cret", "ttl_seconds": 120 } } }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.database.namespace, "n");
    assert_eq!(cfg.storage.static_dir, PathBuf::from("/tmp/static"));
    assert_eq!(cfg.security.identity.jwt.secret, "s3cret");
    assert_eq!(cfg.security.identity.jwt.ttl_seconds, 120);
    // Sections not present keep their defaults.
    assert_eq!(cfg.fetcher.timeout_seconds, 10);
}
