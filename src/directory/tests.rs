use super::*;

fn directory() -> (tempfile::TempDir, LocalDirectory) {
    let dir = tempfile::tempdir().unwrap();
    let local = LocalDirectory::new(dir.path().join("projects.toml"));
    (dir, local)
}

#[test]
fn test_missing_file_is_empty() {
    let (_dir, local) = directory();
    assert!(local.list().unwrap().is_empty());
    assert!(local.check_exists("p1").is_err());
}

#[test]
fn test_list_keeps_file_order() {
    let (_dir, local) = directory();
    std::fs::write(local.path(), r#"projects = ["b", "a", "c"]"#).unwrap();
    assert_eq!(local.list().unwrap(), ["b", "a", "c"]);
    assert!(local.check_exists("a").is_ok());
}

#[test]
fn test_create_appends() {
    let (_dir, local) = directory();
    local.create("p2").unwrap();
    local.create("p1").unwrap();
    assert_eq!(local.list().unwrap(), ["p2", "p1"]);
}

#[test]
fn test_create_rejects_duplicates_and_empty() {
    let (_dir, local) = directory();
    local.create("p1").unwrap();
    let err = local.create("p1").unwrap_err();
    assert_eq!(err.to_string(), "project \"p1\" already exists");
    assert!(local.create("  ").is_err());
}

#[test]
fn test_remove() {
    let (_dir, local) = directory();
    local.create("p1").unwrap();
    local.create("p2").unwrap();
    local.remove("p1").unwrap();
    assert_eq!(local.list().unwrap(), ["p2"]);

    let err = local.remove("p1").unwrap_err();
    assert_eq!(err.to_string(), "project \"p1\" not found");
}

#[test]
fn test_unparseable_file_is_an_error() {
    let (_dir, local) = directory();
    std::fs::write(local.path(), "projects = 3").unwrap();
    assert!(local.list().is_err());
    assert!(local.check_exists("p1").is_err());
}
