//! Compatibility with single-dash long flags (`-repo alpine`).
//!
//! clap only understands `--repo`, so the legacy spellings are rewritten
//! before parsing. Values of flags that take one are never rewritten.

use std::ffi::OsString;

/// Long flags that used to be spelled with a single dash
const LEGACY_FLAGS: &[&str] = &["repo", "filter", "exclude", "all"];

/// Flags whose next argument is a value
const VALUE_FLAGS: &[&str] = &[
    "--repo",
    "-r",
    "--filter",
    "--exclude",
    "--config",
    "--registry",
    "--color",
];

/// Rewrites legacy single-dash flags to their double-dash form.
///
/// `-all=<bool>` becomes `--all` when the value is true and is dropped when
/// it is false. Everything after `--` is left alone.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut expect_value = false;
    let mut passthrough = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();

        // argv[0], values, and anything after `--` pass through untouched
        if index == 0 || passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        match rewrite(text) {
            Rewrite::Keep => {
                expect_value = VALUE_FLAGS.contains(&text);
                out.push(arg);
            }
            Rewrite::Replace(new) => {
                expect_value = VALUE_FLAGS.contains(&new.as_str());
                out.push(OsString::from(new));
            }
            Rewrite::Drop => {}
        }
    }

    out
}

enum Rewrite {
    Keep,
    Replace(String),
    Drop,
}

fn rewrite(arg: &str) -> Rewrite {
    let Some(body) = arg.strip_prefix('-') else {
        return Rewrite::Keep;
    };
    if body.starts_with('-') {
        return Rewrite::Keep;
    }

    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };
    if !LEGACY_FLAGS.contains(&name) {
        return Rewrite::Keep;
    }

    match (name, value) {
        ("all", Some(value)) => match parse_bool(value) {
            Some(true) => Rewrite::Replace("--all".to_string()),
            Some(false) => Rewrite::Drop,
            None => Rewrite::Keep,
        },
        (_, Some(value)) => Rewrite::Replace(format!("--{}={}", name, value)),
        (_, None) => Rewrite::Replace(format!("--{}", name)),
    }
}

/// Boolean spellings accepted by the legacy flag syntax
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
