use super::{extract_path_value, match_template, template_matches, wildcard_name};
use crate::contract::{Contract, PathItem};
use indexmap::IndexMap;

fn contract_with(templates: &[&str]) -> Contract {
    let mut paths = IndexMap::new();
    for t in templates {
        paths.insert(t.to_string(), PathItem::default());
    }
    Contract { paths }
}

#[test]
fn test_literal_template() {
    assert!(template_matches("/pet", "/pet"));
    assert!(!template_matches("/pet", "/pets"));
    assert!(!template_matches("/pet", "/Pet"));
}

#[test]
fn test_wildcard_segment() {
    assert!(template_matches("/pet/{petId}", "/pet/42"));
    assert!(template_matches("/pet/{petId}", "/pet/abc"));
    assert!(!template_matches("/pet/{petId}", "/store/42"));
}

#[test]
fn test_segment_count_must_match() {
    assert!(!template_matches("/pet/{petId}", "/pet"));
    assert!(!template_matches("/pet/{petId}", "/pet/42/photos"));
    // Trailing slashes are not normalized away.
    assert!(!template_matches("/pet/{petId}", "/pet/42/"));
}

#[test]
fn test_first_declared_template_wins() {
    let contract = contract_with(&["/pet/{petId}", "/pet/mine"]);
    let (template, _) = match_template(&contract, "/pet/mine").unwrap();
    assert_eq!(template, "/pet/{petId}");

    // Declared the other way around, the literal template is reachable.
    let contract = contract_with(&["/pet/mine", "/pet/{petId}"]);
    let (template, _) = match_template(&contract, "/pet/mine").unwrap();
    assert_eq!(template, "/pet/mine");
}

#[test]
fn test_no_match_returns_none() {
    let contract = contract_with(&["/pet/{petId}"]);
    assert!(match_template(&contract, "/unknown/1").is_none());
}

#[test]
fn test_extract_path_value() {
    assert_eq!(extract_path_value("/pet/42", "/pet/{petId}", "petId"), Some("42"));
    assert_eq!(
        extract_path_value("/users/7/posts/9", "/users/{userId}/posts/{postId}", "postId"),
        Some("9")
    );
    assert_eq!(extract_path_value("/pet/42", "/pet/{petId}", "other"), None);
    assert_eq!(extract_path_value("/pet/42/extra", "/pet/{petId}", "petId"), None);
}

#[test]
fn test_wildcard_name() {
    assert_eq!(wildcard_name("{petId}"), Some("petId"));
    assert_eq!(wildcard_name("pet"), None);
    assert_eq!(wildcard_name("{pet"), None);
}
