use std::io::Write;

use mind_core::Mind;
use mind_recipe::{Domain, RecipeError};

const DOMAIN: &str = r#"
actions:
  - name: chop wood
    cost: 2
    entry: [has_axe]
    exit: [has_wood]
  - name: fetch axe
    entry: [-has_axe]
    exit: [has_axe]
"#;

#[test]
fn loads_yaml_domain_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DOMAIN.as_bytes()).unwrap();

    let domain = Domain::load(file.path()).unwrap();
    assert_eq!(domain.actions.len(), 2);
    assert_eq!(domain.actions[1].cost, 0);

    let mut mind: Mind = Mind::new();
    domain.teach(&mut mind).unwrap();
    assert_eq!(mind.condition("has_axe"), Some(1 << 0));
    assert_eq!(mind.condition("has_wood"), Some(1 << 1));
    assert_eq!(mind.action(0).map(|action| action.cost), Some(2));
}

#[test]
fn json_documents_are_accepted() {
    let json = serde_json::json!({
        "actions": [{ "name": "wave", "cost": 1, "exit": ["waved"] }]
    });
    let domain = Domain::from_yaml_str(&json.to_string()).unwrap();
    assert_eq!(domain.actions[0].exit, vec!["waved".to_string()]);
}

#[test]
fn missing_file_reports_path() {
    let err = Domain::load(std::path::Path::new("/nonexistent/domain.yaml")).unwrap_err();
    match err {
        RecipeError::Io { path, .. } => assert!(path.ends_with("domain.yaml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_domain_is_a_parse_error() {
    let err = Domain::from_yaml_str("actions: [{ cost: 1 }]").unwrap_err();
    assert!(matches!(err, RecipeError::Parse(_)));
}
