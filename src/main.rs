//! CLI entry point for pare

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use pare::{ExcludeFilter, TreeFormatter, TreeWalker};
use termcolor::{ColorChoice, StandardStream};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pare")]
#[command(about = "Print a directory tree, skipping well-known noise directories")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Exclude additional directory names (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "NAME")]
    ignore: Vec<String>,

    /// Do not apply the built-in exclusion list
    #[arg(long = "no-default-ignores")]
    no_default_ignores: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let excludes = if args.no_default_ignores {
        ExcludeFilter::from_names(args.ignore.clone())
    } else {
        ExcludeFilter::default().with_extra(args.ignore.clone())
    };

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let choice = if should_use_color(args.color) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let stdout = StandardStream::stdout(choice);
    let mut formatter = TreeFormatter::new(stdout);

    let walker = TreeWalker::new(excludes);
    if let Err(e) = walker.walk(&root, &mut formatter) {
        eprintln!("pare: cannot read '{}': {}", args.path.display(), e);
        process::exit(1);
    }
}
