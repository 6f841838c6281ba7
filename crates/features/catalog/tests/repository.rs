use waymark_catalog::{Catalog, CatalogError, WebsiteFields, init};
use waymark_database::Database;
use waymark_domain::config::ApiConfig;
use waymark_domain::registry::InitializedSlice;

async fn test_slice(name: &str) -> (InitializedSlice, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let db = Database::builder()
        .url("mem://")
        .session("catalog_test", name)
        .init()
        .await
        .expect("mem:// database");

    let mut cfg = ApiConfig::default();
    cfg.storage.data_dir = tmp.path().to_path_buf();

    (init(&cfg, &db).expect("catalog init"), tmp)
}

fn catalog(slice: &InitializedSlice) -> &Catalog {
    slice.state.as_any().downcast_ref::<Catalog>().expect("slice downcast")
}

fn fields(name: &str, position: i64, category_id: &str) -> WebsiteFields {
    WebsiteFields {
        name: name.to_owned(),
        url: format!("https://{name}.example.com"),
        icon_url: None,
        description: None,
        position,
        category_id: category_id.to_owned(),
    }
}

#[tokio::test]
async fn navigation_reflects_stored_order() {
    let (slice, _tmp) = test_slice("nav_order").await;
    let catalog = catalog(&slice);

    // Created out of display order on purpose.
    let second = catalog.categories.create("Second", 2).await.expect("category");
    let first = catalog.categories.create("First", 1).await.expect("category");

    catalog.websites.create(fields("beta", 2, &first.id)).await.expect("website");
    catalog.websites.create(fields("alpha", 1, &first.id)).await.expect("website");
    catalog.websites.create(fields("gamma", 1, &second.id)).await.expect("website");

    let nav = catalog.navigation().await.expect("navigation");
    assert_eq!(nav.len(), 3);

    let names: Vec<_> = nav.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["First", "Second"]);

    let first_links: Vec<_> = nav.categories[0].links.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(first_links, ["alpha", "beta"]);
    assert_eq!(nav.categories[1].links[0].name, "gamma");
}

#[tokio::test]
async fn created_entries_surface_in_subsequent_reads() {
    let (slice, _tmp) = test_slice("create_read").await;
    let catalog = catalog(&slice);

    let category = catalog.categories.create("Tools", 0).await.expect("category");
    assert!(catalog.navigation().await.expect("navigation").is_empty());

    let created = catalog.websites.create(fields("wiki", 0, &category.id)).await.expect("website");
    assert_eq!(created.category_name.as_deref(), Some("Tools"));

    let nav = catalog.navigation().await.expect("navigation");
    assert_eq!(nav.categories[0].links[0].id, created.id);
}

#[tokio::test]
async fn deleting_a_category_cascades_to_its_entries() {
    let (slice, _tmp) = test_slice("cascade").await;
    let catalog = catalog(&slice);

    let keep = catalog.categories.create("Keep", 0).await.expect("category");
    let dropped = catalog.categories.create("Drop", 1).await.expect("category");

    catalog.websites.create(fields("kept", 0, &keep.id)).await.expect("website");
    let doomed = catalog.websites.create(fields("doomed", 0, &dropped.id)).await.expect("website");

    catalog.categories.delete(&dropped.id).await.expect("delete category");

    // The category and every entry under it are gone from all reads.
    assert!(catalog.categories.get(&dropped.id).await.expect("get").is_none());
    assert!(catalog.websites.get(&doomed.id).await.expect("get").is_none());

    let nav = catalog.navigation().await.expect("navigation");
    assert_eq!(nav.categories.len(), 1);
    assert_eq!(nav.len(), 1);

    // Deleting again is a 404, not a silent success.
    let err = catalog.categories.delete(&dropped.id).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
}

#[tokio::test]
async fn pagination_totals_are_unpaginated_counts() {
    let (slice, _tmp) = test_slice("pagination").await;
    let catalog = catalog(&slice);

    let category = catalog.categories.create("Bulk", 0).await.expect("category");
    for i in 0..5 {
        catalog
            .websites
            .create(fields(&format!("site{i}"), i, &category.id))
            .await
            .expect("website");
    }

    let page = catalog.websites.list(1, 2).await.expect("page");
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].name, "site1");
    assert_eq!(page[1].name, "site2");

    assert_eq!(catalog.websites.count().await.expect("count"), 5);
    assert_eq!(catalog.websites.list_all().await.expect("all").len(), 5);
}

#[tokio::test]
async fn duplicate_category_names_conflict() {
    let (slice, _tmp) = test_slice("conflict").await;
    let catalog = catalog(&slice);

    catalog.categories.create("Tools", 0).await.expect("category");
    let err = catalog.categories.create("Tools", 1).await.unwrap_err();
    assert!(matches!(err, CatalogError::Conflict { .. }));
}

#[tokio::test]
async fn updates_replace_stored_fields() {
    let (slice, _tmp) = test_slice("update").await;
    let catalog = catalog(&slice);

    let category = catalog.categories.create("Tools", 0).await.expect("category");
    let other = catalog.categories.create("Archive", 1).await.expect("category");
    let created = catalog.websites.create(fields("wiki", 3, &category.id)).await.expect("website");

    let updated = catalog
        .websites
        .update(
            &created.id,
            WebsiteFields {
                name: "wiki v2".to_owned(),
                url: created.url.clone(),
                icon_url: Some("/icons/custom.svg".to_owned()),
                description: created.description.clone(),
                position: 7,
                category_id: other.id.clone(),
            },
        )
        .await
        .expect("update");

    assert_eq!(updated.name, "wiki v2");
    assert_eq!(updated.position, 7);
    assert_eq!(updated.category_id.as_deref(), Some(other.id.as_str()));
    assert_eq!(updated.category_name.as_deref(), Some("Archive"));

    let err = catalog.websites.update("missing", fields("x", 0, &category.id)).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
}

#[tokio::test]
async fn unreachable_pages_fall_back_to_a_letter_badge() {
    let (slice, tmp) = test_slice("badge").await;
    let catalog = catalog(&slice);

    // Nothing listens on port 9; the fetch fails fast and degrades.
    let (icon_url, description) =
        catalog.resolve_metadata("http://127.0.0.1:9/unreachable", None, None).await;

    assert_eq!(icon_url.as_deref(), Some("/icons/127.0.0.1_default.svg"));
    assert!(description.is_none());
    assert!(tmp.path().join("icons").join("127.0.0.1_default.svg").exists());

    // Client-supplied values are never overwritten.
    let (icon_url, description) = catalog
        .resolve_metadata(
            "http://127.0.0.1:9/unreachable",
            Some("/icons/mine.svg".to_owned()),
            Some("hand-written".to_owned()),
        )
        .await;
    assert_eq!(icon_url.as_deref(), Some("/icons/mine.svg"));
    assert_eq!(description.as_deref(), Some("hand-written"));
}
