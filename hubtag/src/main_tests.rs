use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args::normalize_legacy_flags(args.iter().copied())).unwrap()
}

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_modern_flags() {
    let cli = parse(&[
        "hubtag",
        "--repo",
        "alpine",
        "--filter",
        "alpine",
        "--exclude",
        "rc",
        "--all",
    ]);

    assert_eq!(cli.repo.as_deref(), Some("alpine"));
    assert_eq!(cli.filter.as_deref(), Some("alpine"));
    assert_eq!(cli.exclude.as_deref(), Some("rc"));
    assert!(cli.all);
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_legacy_flags() {
    let cli = parse(&["hubtag", "-repo", "jupyter/base-notebook", "-exclude", "rc", "-all"]);

    assert_eq!(cli.repo.as_deref(), Some("jupyter/base-notebook"));
    assert_eq!(cli.exclude.as_deref(), Some("rc"));
    assert!(cli.all);
}

#[test]
fn test_parse_without_repo() {
    let cli = parse(&["hubtag"]);
    assert!(cli.repo.is_none());
    assert!(!cli.all);
}

#[test]
fn test_parse_short_repo_and_verbosity() {
    let cli = parse(&["hubtag", "-r", "busybox", "-vv"]);
    assert_eq!(cli.repo.as_deref(), Some("busybox"));
    assert_eq!(cli.verbose, 2);
}

#[test]
fn test_parse_global_options() {
    let cli = parse(&[
        "hubtag",
        "--registry",
        "http://localhost:5000",
        "--config",
        "/tmp/hubtag.yaml",
        "--color",
        "never",
        "--repo",
        "alpine",
    ]);

    assert_eq!(cli.registry.as_deref(), Some("http://localhost:5000"));
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/hubtag.yaml")));
    assert_eq!(cli.color.as_deref(), Some("never"));
}

#[test]
fn test_parse_version_subcommand() {
    let cli = parse(&["hubtag", "version"]);
    assert!(matches!(cli.command, Some(Commands::Version)));
}

#[test]
fn test_parse_completion_subcommand() {
    let cli = parse(&["hubtag", "completion", "bash"]);
    assert!(matches!(
        cli.command,
        Some(Commands::Completion {
            shell: clap_complete::Shell::Bash
        })
    ));
}

#[test]
fn test_parse_unknown_flag_fails() {
    let result = Cli::try_parse_from(["hubtag", "--bogus"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_rejects_unknown_color() {
    let result = Cli::try_parse_from(["hubtag", "--color", "alwys", "--repo", "alpine"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_accepts_each_color() {
    for choice in ["auto", "always", "never"] {
        let cli = parse(&["hubtag", "--color", choice]);
        assert_eq!(cli.color.as_deref(), Some(choice));
    }
}

#[test]
fn test_needs_usage_without_repo() {
    assert!(needs_usage(&parse(&["hubtag"])));
    assert!(needs_usage(&parse(&["hubtag", "-repo", ""])));
    assert!(needs_usage(&parse(&["hubtag", "--repo", "   "])));
}

#[test]
fn test_needs_usage_ignores_broken_config() {
    // The config path is never opened when the repository is missing
    let cli = parse(&["hubtag", "--config", "/nonexistent/hubtag.yaml"]);
    assert!(needs_usage(&cli));
}

#[test]
fn test_needs_usage_with_repo_or_subcommand() {
    assert!(!needs_usage(&parse(&["hubtag", "--repo", "alpine"])));
    assert!(!needs_usage(&parse(&["hubtag", "version"])));
}

#[test]
fn test_latest_args_from_cli() {
    let cli = parse(&["hubtag", "-repo", " alpine ", "-filter", "alpine", "-all"]);
    let args = latest_args(&cli);

    assert_eq!(args.repository(), Some("alpine"));
    assert_eq!(args.filter.as_deref(), Some("alpine"));
    assert!(args.exclude.is_none());
    assert!(args.all);
}
