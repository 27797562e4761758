//! CLI entry point for tree-print

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use tree_print::{RenderOptions, TreeRenderer, copy_to_clipboard, print_json};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Color when stdout is a terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    #[default]
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
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").is_ok_and(|t| t == "dumb") {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tree-print")]
#[command(about = "Git-aware directory tree printer")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Only show git-tracked files and the directories containing them
    #[arg(short = 'G', long = "git")]
    git: bool,

    /// Collapse chains of single-child directories into one line
    #[arg(short = 'c', long = "compact")]
    compact: bool,

    /// Show human-readable sizes for files and directories
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Color directory names: auto (when bare), always, never
    #[arg(
        long = "color",
        value_name = "WHEN",
        num_args = 0..=1,
        require_equals = true,
        default_value = "never",
        default_missing_value = "auto"
    )]
    color: ColorMode,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "depth", value_name = "N")]
    depth: Option<usize>,

    /// Copy the tree to the clipboard instead of printing it
    #[arg(long = "copy", visible_alias = "clipboard", conflicts_with = "json")]
    copy: bool,

    /// Skip entries matching pattern (can be used multiple times)
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// List directories before files
    #[arg(long = "dirs-first")]
    dirs_first: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tree_print={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = RenderOptions {
        git_only: args.git,
        compact: args.compact,
        show_size: args.size,
        color: should_use_color(args.color),
        max_depth: args.depth,
        exclude: args.exclude,
        dirs_first: args.dirs_first,
    };
    tracing::debug!(?options, "resolved options");

    let renderer = TreeRenderer::new(options);
    let tree = renderer.build(&args.path).unwrap_or_else(|e| {
        eprintln!("tree-print: {}", e);
        process::exit(1);
    });
    let (dirs, files) = tree.counts();
    tracing::info!(root = %tree.path().display(), dirs, files, "built tree");

    let formatter = renderer.formatter();
    let result = if args.json {
        print_json(&tree)
    } else if args.copy {
        match copy_to_clipboard(&formatter.format(&tree)) {
            Ok(()) => {
                eprintln!("Tree copied to clipboard!");
                Ok(())
            }
            Err(e) => {
                eprintln!("tree-print: warning: {}", e);
                formatter.print(&tree)
            }
        }
    } else {
        formatter.print(&tree)
    };

    if let Err(e) = result {
        eprintln!("tree-print: error writing output: {}", e);
        process::exit(1);
    }
}
