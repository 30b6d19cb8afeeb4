use mvn_deploy_core::{Error, Manifest};
use tempfile::TempDir;

#[test]
fn load_reads_package_json() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("package.json"),
        r#"{ "name": "test-pkg", "version": "1.0.0", "description": "demo" }"#,
    )
    .unwrap();

    let manifest = Manifest::load(tmp.path()).unwrap();

    assert_eq!(manifest.name, "test-pkg");
    assert_eq!(manifest.version, "1.0.0");
    assert_eq!(manifest.field("description").as_deref(), Some("demo"));
}

#[test]
fn load_sees_version_changes_between_calls() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("package.json");

    std::fs::write(&path, r#"{ "name": "app", "version": "1.0.0" }"#).unwrap();
    assert_eq!(Manifest::load(tmp.path()).unwrap().version, "1.0.0");

    std::fs::write(&path, r#"{ "name": "app", "version": "1.2.3" }"#).unwrap();
    assert_eq!(Manifest::load(tmp.path()).unwrap().version, "1.2.3");
}

#[test]
fn load_missing_manifest_errors() {
    let tmp = TempDir::new().unwrap();
    let err = Manifest::load(tmp.path()).unwrap_err();

    assert!(matches!(err, Error::ManifestLoad { .. }));
    assert!(err.to_string().contains("package.json"));
}

#[test]
fn load_malformed_manifest_errors() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("package.json"), "{ not json").unwrap();

    assert!(matches!(
        Manifest::load(tmp.path()),
        Err(Error::ManifestParse { .. })
    ));
}
