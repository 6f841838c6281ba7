use waymark_domain::nav::{NavigationCategory, NavigationConfig, NavigationLink};

fn sample() -> NavigationConfig {
    NavigationConfig {
        categories: vec![
            NavigationCategory {
                id: "c1".to_owned(),
                name: "Tools".to_owned(),
                order: 0,
                links: vec![NavigationLink {
                    id: "w1".to_owned(),
                    name: "Example".to_owned(),
                    url: "https://example.com".to_owned(),
                    icon_url: None,
                    description: Some("An example".to_owned()),
                    order: 0,
                }],
            },
            NavigationCategory {
                id: "c2".to_owned(),
                name: "Docs".to_owned(),
                order: 1,
                links: vec![],
            },
        ],
    }
}

#[test]
fn link_counting() {
    let nav = sample();
    assert_eq!(nav.len(), 1);
    assert!(!nav.is_empty());
    assert!(NavigationConfig::default().is_empty());
}

#[test]
fn wire_format_is_camel_case_and_omits_empty_options() {
    let json = serde_json::to_value(sample()).expect("serialize");

    let link = &json["categories"][0]["links"][0];
    assert_eq!(link["name"], "Example");
    assert_eq!(link["description"], "An example");
    // Absent icon is omitted entirely rather than serialized as null.
    assert!(link.get("iconUrl").is_none());

    let roundtrip: NavigationConfig = serde_json::from_value(json).expect("deserialize");
    assert_eq!(roundtrip, sample());
}
