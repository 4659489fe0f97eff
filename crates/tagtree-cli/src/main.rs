//! Tagtree CLI
//!
//! Renders outline files and runs an interactive outline REPL.

mod output;
mod repl;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use env_logger::Env;
use log::debug;
use tagtree::outline::{self, DEFAULT_MAX_DEPTH};
use tagtree::OutlineOptions;

use crate::output::{print_block, OutputArgs};

#[derive(Parser)]
#[command(name = "tagtree")]
#[command(about = "Render nested markup from brace outlines")]
#[command(version)]
struct Cli {
    /// Raise log verbosity (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an outline file (or stdin)
    Render(RenderArgs),
    /// Start an interactive outline session
    Repl(ReplArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Outline file; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,

    /// Maximum nesting depth of the outline
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

#[derive(Args)]
struct ReplArgs {
    #[command(flatten)]
    output: OutputArgs,

    /// Maximum nesting depth of each outline
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl RenderArgs {
    fn outline_options(&self) -> OutlineOptions {
        OutlineOptions::with_max_depth(self.max_depth)
    }
}

impl ReplArgs {
    fn outline_options(&self) -> OutlineOptions {
        OutlineOptions::with_max_depth(self.max_depth)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(error) = run(cli.command) {
        eprintln!("error: {error:#}");
        exit(1)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Render(args) => {
            let source = read_source(input_path(args.input.as_ref()))?;
            let element = outline::parse_with(&source, &args.outline_options())?;
            debug!("rendering {} elements", element.len());
            print_block(&args.output.format_element(&element)?);
        }
        Commands::Repl(args) => {
            repl::run(&args.output, &args.outline_options())?;
        }
    }

    Ok(())
}

/// The file to read, or `None` for stdin (no argument or `-`).
fn input_path(input: Option<&PathBuf>) -> Option<&Path> {
    input
        .map(PathBuf::as_path)
        .filter(|path| path.as_os_str() != "-")
}

fn read_source(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Format;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    fn parse_args(args: &[&str]) -> Commands {
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_max_depth_feeds_outline_options() {
        match parse_args(&["tagtree", "render", "--max-depth", "3"]) {
            Commands::Render(args) => {
                assert_eq!(args.outline_options(), OutlineOptions::with_max_depth(3));
                assert_eq!(args.input, None);
            }
            Commands::Repl(_) => panic!("expected render command"),
        }
    }

    #[test]
    fn test_render_defaults() {
        match parse_args(&["tagtree", "render", "page.tt"]) {
            Commands::Render(args) => {
                assert_eq!(args.outline_options(), OutlineOptions::default());
                assert_eq!(args.output.format, Format::Markup);
                assert_eq!(args.output.indent, 2);
                assert_eq!(args.input, Some(PathBuf::from("page.tt")));
            }
            Commands::Repl(_) => panic!("expected render command"),
        }
    }

    #[test]
    fn test_repl_options() {
        let command = parse_args(&[
            "tagtree",
            "-vv",
            "repl",
            "--format",
            "json",
            "--max-depth",
            "8",
        ]);
        match command {
            Commands::Repl(args) => {
                assert_eq!(args.outline_options(), OutlineOptions::with_max_depth(8));
                assert_eq!(args.output.format, Format::Json);
            }
            Commands::Render(_) => panic!("expected repl command"),
        }
    }

    #[test]
    fn test_dash_means_stdin() {
        let dash = PathBuf::from("-");
        let file = PathBuf::from("page.tt");

        assert_eq!(input_path(None), None);
        assert_eq!(input_path(Some(&dash)), None);
        assert_eq!(input_path(Some(&file)), Some(Path::new("page.tt")));
    }

    #[test]
    fn test_missing_file_error_names_path() {
        let missing = std::env::temp_dir().join("tagtree-missing-outline.tt");
        let error = read_source(Some(missing.as_path())).unwrap_err();
        let message = format!("{error:#}");

        assert!(message.contains("failed to read"));
        assert!(message.contains("tagtree-missing-outline.tt"));
    }

    #[test]
    fn test_reads_outline_file() {
        let path =
            std::env::temp_dir().join(format!("tagtree-outline-{}.tt", std::process::id()));
        std::fs::write(&path, "table { tr { td; } }").unwrap();

        let source = read_source(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(source, "table { tr { td; } }");
    }
}
