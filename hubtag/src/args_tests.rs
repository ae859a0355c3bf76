use super::*;

fn normalize(args: &[&str]) -> Vec<String> {
    normalize_legacy_flags(args.iter().copied())
        .into_iter()
        .map(|a| a.into_string().unwrap())
        .collect()
}

#[test]
fn test_legacy_flags_are_rewritten() {
    assert_eq!(
        normalize(&["hubtag", "-repo", "alpine", "-filter", "alpine", "-exclude", "rc", "-all"]),
        vec![
            "hubtag", "--repo", "alpine", "--filter", "alpine", "--exclude", "rc", "--all"
        ]
    );
}

#[test]
fn test_legacy_flags_with_equals() {
    assert_eq!(
        normalize(&["hubtag", "-repo=jupyter/base-notebook", "-exclude=rc|beta"]),
        vec!["hubtag", "--repo=jupyter/base-notebook", "--exclude=rc|beta"]
    );
}

#[test]
fn test_modern_flags_are_untouched() {
    let args = ["hubtag", "--repo", "alpine", "-r", "busybox", "-vv", "--all"];
    assert_eq!(normalize(&args), args.to_vec());
}

#[test]
fn test_values_are_never_rewritten() {
    assert_eq!(
        normalize(&["hubtag", "-filter", "-all", "-repo", "-exclude"]),
        vec!["hubtag", "--filter", "-all", "--repo", "-exclude"]
    );
}

#[test]
fn test_all_with_boolean_value() {
    assert_eq!(
        normalize(&["hubtag", "-all=true", "-repo", "alpine"]),
        vec!["hubtag", "--all", "--repo", "alpine"]
    );
    assert_eq!(
        normalize(&["hubtag", "-all=false", "-repo", "alpine"]),
        vec!["hubtag", "--repo", "alpine"]
    );
}

#[test]
fn test_all_with_invalid_boolean_is_left_for_clap() {
    assert_eq!(normalize(&["hubtag", "-all=maybe"]), vec!["hubtag", "-all=maybe"]);
}

#[test]
fn test_arguments_after_double_dash_pass_through() {
    assert_eq!(
        normalize(&["hubtag", "--", "-repo"]),
        vec!["hubtag", "--", "-repo"]
    );
}

#[test]
fn test_program_name_is_kept() {
    assert_eq!(normalize(&["-repo"]), vec!["-repo"]);
}

#[test]
fn test_unknown_single_dash_words_are_kept() {
    assert_eq!(normalize(&["hubtag", "-verbose"]), vec!["hubtag", "-verbose"]);
}
