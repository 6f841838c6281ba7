use waymark::domain::config::ApiConfig;
use waymark::features::catalog::Catalog;
use waymark::features::identity::Identity;
use waymark_server::Server;

#[tokio::test]
async fn build_wires_slices_and_seeds_the_bootstrap_admin() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut cfg = ApiConfig::default();
    cfg.storage.data_dir = tmp.path().to_path_buf();

    let server = Server::builder().config(cfg).build().await.expect("server build");
    let state = server.state();

    let identity = state.try_get_slice::<Identity>().expect("identity slice");
    state.try_get_slice::<Catalog>().expect("catalog slice");
    assert_eq!(state.slice_ids().count(), 2);

    // First boot seeds the configured admin.
    let admin = identity
        .admins
        .find_by_username("admin")
        .await
        .expect("lookup")
        .expect("bootstrap admin exists");
    assert_eq!(admin.username, "admin");
}
