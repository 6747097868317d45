use super::*;
use anyhow::Result;

struct Fixed(Vec<&'static str>);

impl ProjectDirectory for Fixed {
    fn list(&self) -> Result<Vec<String>> {
        Ok(self.0.iter().map(ToString::to_string).collect())
    }
}

fn options(project: Option<&str>, default: Option<&str>) -> ConnectOptions {
    ConnectOptions {
        project: project.map(Into::into),
        default_project: default.map(Into::into),
        aliases: BTreeMap::from([("prod".to_string(), "p1".to_string())]),
    }
}

#[test]
fn test_explicit_project_wins_over_default() {
    assert_eq!(options(Some("p2"), Some("p1")).target(), Some("p2"));
    assert_eq!(options(None, Some("p1")).target(), Some("p1"));
    assert_eq!(options(None, None).target(), None);
}

#[test]
fn test_alias_target_is_resolved() {
    assert_eq!(options(Some("prod"), None).target(), Some("p1"));
    assert_eq!(options(None, Some("prod")).target(), Some("p1"));
}

#[test]
fn test_with_project_ignores_empty() {
    let opts = ConnectOptions::default().with_project(Some(String::new()));
    assert!(opts.project.is_none());
}

#[test]
fn test_from_config() {
    let mut config = Config::default();
    config.default_project = Some("p2".into());
    config.aliases.insert("dev".into(), "p2".into());
    let opts = ConnectOptions::from_config(&config).with_project(Some("p1".into()));
    assert_eq!(opts.project.as_deref(), Some("p1"));
    assert_eq!(opts.default_project.as_deref(), Some("p2"));
    assert_eq!(opts.aliases.get("dev").map(String::as_str), Some("p2"));
}

#[test]
fn test_establish_binds_to_existing_project() {
    let directory = Fixed(vec!["p1", "p2"]);
    let session = DirectoryConnector::new(&directory)
        .establish(&options(Some("prod"), None))
        .unwrap();
    assert_eq!(session.active_project(), "p1");
}

#[test]
fn test_establish_without_project() {
    let directory = Fixed(vec!["p1"]);
    let err = DirectoryConnector::new(&directory)
        .establish(&options(None, None))
        .unwrap_err();
    assert!(matches!(err, SessionError::NoProject));
}

#[test]
fn test_establish_unknown_project() {
    let directory = Fixed(vec!["p1"]);
    let err = DirectoryConnector::new(&directory)
        .establish(&options(Some("p9"), None))
        .unwrap_err();
    assert!(matches!(err, SessionError::Unreachable { ref project, .. } if project == "p9"));
    assert_eq!(err.to_string(), "project \"p9\" is unavailable");
}
