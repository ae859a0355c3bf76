//! Basic usage example for the hubtag library.
//!
//! Lists the tags of an official image and shows how the selector narrows
//! them down to the latest release.
//!
//! Run with: cargo run --example basic_usage -- [repository]

use libhubtag::{Hubtag, RepositoryId, SelectionConfig, Selector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let name = std::env::args().nth(1).unwrap_or_else(|| "alpine".to_string());
    let repo: RepositoryId = name.parse()?;

    let hubtag = Hubtag::connect("https://registry.hub.docker.com")?;
    println!("Querying {}\n", hubtag.tags_url(&repo));

    let tags = match hubtag.list_tags(&repo) {
        Ok(tags) => tags,
        Err(e) => {
            eprintln!("✗ Failed to list tags: {}", e);
            return Ok(());
        }
    };
    println!("✓ Found {} tags", tags.len());

    let selector = Selector::default();
    let ranked = selector.rank(&tags);
    println!("✓ {} tags look like versions:", ranked.len());
    for tag in &ranked {
        println!("  - {}", tag);
    }

    let stable = Selector::new(&SelectionConfig::new().with_exclude("rc|beta|alpha"))?;
    match stable.select_latest(&tags) {
        Ok(latest) => println!("\nLatest stable tag: {}", latest),
        Err(e) => println!("\nNo stable tag: {}", e),
    }

    Ok(())
}
