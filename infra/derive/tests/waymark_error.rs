#[test]
fn waymark_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/waymark_error_pass.rs");
}
