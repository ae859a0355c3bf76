use libhubtag::config::ColorChoice;
use owo_colors::OwoColorize;
use std::error::Error;
use std::io::IsTerminal;

use crate::context::AppContext;

/// Decide whether stderr output should be colored
pub fn should_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    }
}

/// Colorize an X mark for errors if colors are enabled
pub fn error_mark(color: bool) -> String {
    if color {
        format!("{}", "✗".red().bold())
    } else {
        "✗".to_string()
    }
}

/// Render an error with its chain of causes, one per line
pub fn render_error(err: &dyn Error, color: bool) -> String {
    let mut out = format!("{} {}", error_mark(color), err);

    let mut source = err.source();
    let mut level = 1;
    while let Some(cause) = source {
        let label = if color {
            format!("{}", "Caused by:".dimmed())
        } else {
            "Caused by:".to_string()
        };
        out.push_str(&format!(
            "\n{:indent$}{} {}",
            "",
            label,
            cause,
            indent = level * 2
        ));
        source = cause.source();
        level += 1;
    }

    out
}

/// Print an error to stderr
pub fn error(ctx: &AppContext, err: &dyn Error) {
    eprintln!("{}", render_error(err, should_color(ctx.color())));
}

/// Print usage guidance to stdout
pub fn usage(message: &str) {
    println!("{}", message);
}
