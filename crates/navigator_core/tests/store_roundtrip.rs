use navigator_core::{
    from_json_str, load_catalog, save_catalog, to_json_string, Catalog, CatalogError, StoreError,
    PAYBACK_PERIOD_KEY,
};

#[test]
fn encode_then_parse_roundtrips_builtin_catalog() {
    let catalog = Catalog::builtin();
    let json = to_json_string(&catalog).unwrap();
    let reparsed = from_json_str(&json).unwrap();
    assert_eq!(reparsed, catalog);
}

#[test]
fn encoding_preserves_external_field_names() {
    let json = to_json_string(&Catalog::builtin()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 6);
    for record in records {
        let object = record.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for field in ["scenario", "description", "recommendations", "estimated_savings"] {
            assert!(object.contains_key(field), "missing field `{field}`");
        }
        assert!(object["estimated_savings"]
            .as_object()
            .unwrap()
            .contains_key(PAYBACK_PERIOD_KEY));
    }
}

#[test]
fn encoding_preserves_percentage_range_text() {
    let json = to_json_string(&Catalog::builtin()).unwrap();
    assert!(json.contains("\"18-25%\""));
}

#[test]
fn parse_rejects_malformed_json() {
    let err = from_json_str("[{ not json").unwrap_err();
    assert!(matches!(err, StoreError::Json(_)));
}

#[test]
fn parse_rejects_record_without_payback_period() {
    let json = r#"[
        {
            "scenario": "Broken",
            "description": "No payback recorded.",
            "recommendations": ["Do something"],
            "estimated_savings": { "energy_cost": "10-15%" }
        }
    ]"#;

    let err = from_json_str(json).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Catalog(CatalogError::Validation { index: 0, .. })
    ));
}

#[test]
fn parse_rejects_duplicate_titles() {
    let json = r#"[
        {
            "scenario": "Twin",
            "description": "First copy.",
            "recommendations": ["Step"],
            "estimated_savings": { "payback_period_years": 2 }
        },
        {
            "scenario": "Twin",
            "description": "Second copy.",
            "recommendations": ["Step"],
            "estimated_savings": { "payback_period_years": 2 }
        }
    ]"#;

    let err = from_json_str(json).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Catalog(CatalogError::DuplicateTitle(title)) if title == "Twin"
    ));
}

#[test]
fn parse_rejects_malformed_percentage_value() {
    let json = r#"[
        {
            "scenario": "Odd Percent",
            "description": "Bad percentage text.",
            "recommendations": ["Step"],
            "estimated_savings": {
                "energy_cost": "about a fifth",
                "payback_period_years": 2
            }
        }
    ]"#;

    let err = from_json_str(json).unwrap_err();
    assert!(matches!(err, StoreError::Catalog(_)));
}

#[test]
fn save_then_load_roundtrips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenarios.json");

    let catalog = Catalog::builtin();
    save_catalog(&path, &catalog).unwrap();
    let loaded = load_catalog(&path).unwrap();
    assert_eq!(loaded, catalog);
}

#[test]
fn load_missing_file_reports_io_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_catalog(&path).unwrap_err();
    match err {
        StoreError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other}"),
    }
}

#[test]
fn load_rejects_invalid_persisted_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenarios.json");
    std::fs::write(&path, "{\"scenario\": \"not an array\"}").unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, StoreError::Json(_)));
}
