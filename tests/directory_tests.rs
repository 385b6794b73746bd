//! Integration tests for the service directory.

use passman::directory::{ServiceDirectory, ServiceRecord};

fn go_directory() -> ServiceDirectory {
    ["go.dev", "golang.org", "google.com"]
        .into_iter()
        .map(|n| ServiceRecord::new(n, "pw", ""))
        .collect()
}

// ---------------------------------------------------------------------------
// Uniqueness
// ---------------------------------------------------------------------------

#[test]
fn put_same_name_twice_keeps_one_record() {
    let mut d = ServiceDirectory::new();
    d.put(ServiceRecord::new("a.com", "x", ""));
    d.put(ServiceRecord::new("a.com", "y", ""));

    assert_eq!(d.len(), 1);
    assert_eq!(d.get("a.com").unwrap().secret, "y");
}

#[test]
fn get_missing_is_none() {
    let d = go_directory();
    assert!(d.get("go").is_none());
    assert!(d.get("").is_none());
}

#[test]
fn remove_missing_is_none_and_changes_nothing() {
    let mut d = go_directory();
    assert!(d.remove("nothing.here").is_none());
    assert_eq!(d.len(), 3);
}

// ---------------------------------------------------------------------------
// Prefix search
// ---------------------------------------------------------------------------

#[test]
fn search_go_returns_all_three_in_order() {
    let d = go_directory();
    let names: Vec<&str> = d.search("go").iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["go.dev", "golang.org", "google.com"]);
}

#[test]
fn empty_prefix_and_bare_wildcard_list_all() {
    let d = go_directory();
    assert_eq!(d.search("").len(), 3);
    assert_eq!(d.search("*").len(), 3);
}

#[test]
fn trailing_wildcard_is_equivalent() {
    let d = go_directory();
    assert_eq!(d.search("goo*"), d.search("goo"));
    assert_eq!(d.search("goo").len(), 1);
}

#[test]
fn search_is_case_sensitive() {
    let d = go_directory();
    assert!(d.search("Go").is_empty());
}

// ---------------------------------------------------------------------------
// Payload round-trip
// ---------------------------------------------------------------------------

#[test]
fn payload_roundtrip_sorts_by_name() {
    let mut d = go_directory();
    d.put(ServiceRecord::new("go.dev", "new", "replaced"));
    assert_eq!(d.names(), vec!["golang.org", "google.com", "go.dev"]);

    let reloaded = ServiceDirectory::from_payload(&d.to_payload().unwrap()).unwrap();
    assert_eq!(reloaded.names(), vec!["go.dev", "golang.org", "google.com"]);
    assert_eq!(reloaded.get("go.dev").unwrap().meta, "replaced");
}

#[test]
fn reads_payload_with_trailing_newline() {
    let d = ServiceDirectory::from_payload(b"{\"Services\":[{\"Name\":\"a\",\"Password\":\"b\",\"Meta\":\"c\"}]}\n")
        .unwrap();
    assert_eq!(d.get("a").unwrap(), &ServiceRecord::new("a", "b", "c"));
}
