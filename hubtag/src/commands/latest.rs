use crate::context::AppContext;
use crate::format;
use libhubtag::export::{DEFAULT_TAGS_FILE, write_tag_list};
use libhubtag::{Hubtag, RepositoryId, Result, SelectionConfig, Selector};
use std::path::Path;

/// Guidance printed when no repository was given
pub const USAGE_HINT: &str =
    "Specify a Docker Hub repository using '--repo' (e.g. alpine, jupyter/base-notebook). See --help.";

/// Options of the latest tag lookup
#[derive(Debug, Clone, Default)]
pub struct LatestArgs {
    pub repo: Option<String>,
    pub filter: Option<String>,
    pub exclude: Option<String>,
    pub all: bool,
}

impl LatestArgs {
    /// Repository identifier, if a non-blank one was given
    pub fn repository(&self) -> Option<&str> {
        self.repo.as_deref().map(str::trim).filter(|r| !r.is_empty())
    }

    fn selection(&self) -> SelectionConfig {
        SelectionConfig {
            filter: self.filter.clone(),
            exclude: self.exclude.clone(),
        }
    }
}

/// Handle the default command: print the latest tag of a repository
pub fn handle_latest(ctx: &AppContext, args: &LatestArgs) {
    let Some(repo) = args.repository() else {
        format::usage(USAGE_HINT);
        return;
    };

    match find_latest(ctx, repo, args, Path::new(DEFAULT_TAGS_FILE)) {
        Ok(tag) => println!("{}", tag),
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}

/// Fetch, optionally export, filter and select
///
/// Patterns are compiled before any request is made.
pub fn find_latest(
    ctx: &AppContext,
    repo: &str,
    args: &LatestArgs,
    tags_path: &Path,
) -> Result<String> {
    let repository: RepositoryId = repo.parse()?;
    let selector = Selector::new(&args.selection())?;

    let hubtag = Hubtag::builder()
        .with_config(ctx.config.clone())
        .build()?;
    tracing::info!(
        repository = %repository,
        url = %hubtag.tags_url(&repository),
        "looking up tags"
    );

    let tags = hubtag.list_tags(&repository)?;
    tracing::info!(count = tags.len(), "registry returned tags");

    if args.all {
        write_tag_list(tags_path, &tags)?;
        tracing::info!(path = %tags_path.display(), "wrote full tag list");
    }

    let latest = selector.select_latest(&tags)?;
    tracing::info!(tag = %latest, "selected latest tag");
    Ok(latest)
}

#[cfg(test)]
#[path = "latest_tests.rs"]
mod tests;
