use super::*;

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn selector(filter: Option<&str>, exclude: Option<&str>) -> Selector {
    let config = SelectionConfig {
        filter: filter.map(String::from),
        exclude: exclude.map(String::from),
    };
    Selector::new(&config).unwrap()
}

#[test]
fn test_shape_filter_keeps_only_triples_in_order() {
    let input = tags(&[
        "latest",
        "3.19.1",
        "3.19",
        "edge",
        "v2.0.0-alpine",
        "alpine3.19",
        "20240115",
        "release-1.2.3",
    ]);

    let filtered = Selector::default().filter(&input);
    assert_eq!(filtered, vec!["3.19.1", "v2.0.0-alpine", "release-1.2.3"]);
}

#[test]
fn test_is_version_shaped() {
    assert!(Selector::is_version_shaped("1.2.3"));
    assert!(Selector::is_version_shaped("python-3.12.1-slim"));
    assert!(!Selector::is_version_shaped("1.2"));
    assert!(!Selector::is_version_shaped("latest"));
}

#[test]
fn test_select_latest_numeric_ordering() {
    let input = tags(&["1.2.3", "1.10.0", "1.9.9"]);
    assert_eq!(Selector::default().select_latest(&input).unwrap(), "1.10.0");
}

#[test]
fn test_select_latest_huge_major_wins() {
    let input = tags(&["2.0.0", "100000000000000000000.0.0", "10.1.0"]);
    assert_eq!(
        Selector::default().select_latest(&input).unwrap(),
        "100000000000000000000.0.0"
    );
}

#[test]
fn test_rank_orders_ascending() {
    let input = tags(&["2.0.0", "1.10.0", "latest", "1.2.3"]);
    assert_eq!(
        Selector::default().rank(&input),
        vec!["1.2.3", "1.10.0", "2.0.0"]
    );
}

#[test]
fn test_inclusion_filter() {
    let input = tags(&["1.2.3", "1.2.3-alpine", "1.3.0"]);
    let selector = selector(Some("alpine"), None);

    assert_eq!(selector.filter(&input), vec!["1.2.3-alpine"]);
    assert_eq!(selector.select_latest(&input).unwrap(), "1.2.3-alpine");
}

#[test]
fn test_exclusion_filter() {
    let input = tags(&["1.0.0", "1.1.0-rc1", "1.1.0"]);
    let selector = selector(None, Some("rc"));

    assert_eq!(selector.filter(&input), vec!["1.0.0", "1.1.0"]);
    assert_eq!(selector.select_latest(&input).unwrap(), "1.1.0");
}

#[test]
fn test_inclusion_and_exclusion_combined() {
    let input = tags(&[
        "3.12.1-slim",
        "3.12.1-slim-bookworm",
        "3.13.0-slim",
        "3.13.0a1-slim",
        "3.11.9",
    ]);
    let selector = selector(Some("-slim"), Some("bookworm|a[0-9]"));

    assert_eq!(selector.filter(&input), vec!["3.12.1-slim", "3.13.0-slim"]);
    assert_eq!(selector.select_latest(&input).unwrap(), "3.13.0-slim");
}

#[test]
fn test_inclusion_filter_is_a_regex() {
    let input = tags(&["1.0.0-alpine3.18", "1.0.0-alpine3.19", "1.0.1-debian"]);
    let selector = selector(Some(r"alpine3\.1[0-8]$"), None);

    assert_eq!(selector.select_latest(&input).unwrap(), "1.0.0-alpine3.18");
}

#[test]
fn test_empty_patterns_are_ignored() {
    let input = tags(&["1.0.0", "1.1.0-rc1"]);
    let selector = selector(Some(""), Some(""));

    assert_eq!(selector.filter(&input), vec!["1.0.0", "1.1.0-rc1"]);
}

#[test]
fn test_tie_on_key_broken_lexically() {
    let input = tags(&["1.2.3-alpine", "1.2.3", "1.2.3-bookworm"]);
    assert_eq!(
        Selector::default().select_latest(&input).unwrap(),
        "1.2.3-bookworm"
    );
}

#[test]
fn test_leading_v_is_ignored_for_key() {
    let input = tags(&["v1.9.0", "1.10.0"]);
    assert_eq!(Selector::default().select_latest(&input).unwrap(), "1.10.0");
}

#[test]
fn test_select_latest_empty_input_is_no_candidates() {
    let result = Selector::default().select_latest(&[]);
    assert!(matches!(
        result,
        Err(HubtagError::NoCandidates { considered: 0 })
    ));
}

#[test]
fn test_select_latest_filtered_to_empty_is_no_candidates() {
    let input = tags(&["latest", "edge", "1.0.0"]);
    let result = selector(Some("alpine"), None).select_latest(&input);

    assert!(matches!(
        result,
        Err(HubtagError::NoCandidates { considered: 3 })
    ));
}

#[test]
fn test_invalid_filter_pattern() {
    let config = SelectionConfig::new().with_filter("[unclosed");
    let err = Selector::new(&config).unwrap_err();

    match err {
        HubtagError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "[unclosed"),
        other => panic!("Expected InvalidPattern, got {:?}", other),
    }
}

#[test]
fn test_invalid_exclude_pattern() {
    let config = SelectionConfig::new().with_exclude("(rc");
    assert!(matches!(
        Selector::new(&config),
        Err(HubtagError::InvalidPattern { .. })
    ));
}

#[test]
fn test_selection_config_builders() {
    let config = SelectionConfig::new()
        .with_filter("alpine")
        .with_exclude("rc");
    assert_eq!(config.filter.as_deref(), Some("alpine"));
    assert_eq!(config.exclude.as_deref(), Some("rc"));
}

#[test]
fn test_select_latest_realistic_listing() {
    let input = tags(&[
        "latest",
        "3.20",
        "3.20.0",
        "3",
        "edge",
        "3.19.1",
        "3.19",
        "3.18.6",
        "20240606",
        "3.17.8",
    ]);
    assert_eq!(Selector::default().select_latest(&input).unwrap(), "3.20.0");
}
