use waymark_database::Database;
use waymark_domain::config::ApiConfig;
use waymark_identity::{Identity, init};

async fn test_db() -> Database {
    Database::builder()
        .url("mem://")
        .session("identity_test", "core")
        .init()
        .await
        .expect("mem:// database")
}

#[tokio::test]
async fn init_creates_slice() {
    let db = test_db().await;
    let slice = init(&ApiConfig::default(), &db).expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Identity>());
}

#[tokio::test]
async fn bootstrap_admin_can_sign_in_once() {
    let db = test_db().await;
    let slice = init(&ApiConfig::default(), &db).expect("init should succeed");
    let identity =
        slice.state.as_any().downcast_ref::<Identity>().expect("slice downcast");

    identity.admins.ensure_bootstrap("admin", "s3cret").await.expect("bootstrap");
    // A second call must not create a duplicate.
    identity.admins.ensure_bootstrap("admin", "other").await.expect("idempotent bootstrap");
    assert_eq!(identity.admins.count().await.expect("count"), 1);

    let record = identity
        .admins
        .find_by_username("admin")
        .await
        .expect("lookup")
        .expect("admin exists");
    assert_eq!(record.username, "admin");
    assert_ne!(record.password_hash, "s3cret", "password must be stored hashed");

    assert!(identity.admins.find_by_username("nobody").await.expect("lookup").is_none());
}

#[tokio::test]
async fn issued_tokens_pass_the_session_gate() {
    let db = test_db().await;
    let slice = init(&ApiConfig::default(), &db).expect("init should succeed");
    let identity =
        slice.state.as_any().downcast_ref::<Identity>().expect("slice downcast");

    let (token, claims) = identity.tokens.issue("admin").expect("issue");
    identity.sessions.insert(claims.jti.clone(), claims.sub);

    let verified = identity.tokens.verify(&token).expect("verify");
    assert!(identity.sessions.contains(&verified.jti));

    // Logout revokes the session even though the token itself is still valid.
    identity.sessions.invalidate(&verified.jti);
    assert!(!identity.sessions.contains(&verified.jti));
}
