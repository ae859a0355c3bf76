use super::*;

#[test]
fn test_print_version_contains_package_name() {
    let output = get_version_string();
    assert!(output.starts_with("hubtag "));
}

#[test]
fn test_print_version_contains_version_number() {
    let output = get_version_string();
    assert!(output.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_print_version_contains_libhubtag_version() {
    let output = get_version_string();
    assert!(output.contains(&format!("libhubtag {}", libhubtag::version())));
}

#[test]
fn test_version_string_has_two_lines() {
    assert_eq!(get_version_string().lines().count(), 2);
}
