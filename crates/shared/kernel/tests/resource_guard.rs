use waymark_kernel::security::resource::ResourceGuard;

#[test]
fn resource_guard_validates_and_prefixes() {
    assert_eq!(ResourceGuard::verify("category:123", "category").unwrap(), "category:123");

    assert_eq!(ResourceGuard::verify("123", "category").unwrap(), "category:123");

    assert!(ResourceGuard::verify("admin:123", "category").is_err());
}
