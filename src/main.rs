mod report;

use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vcsurl::{Flavor, RuleFile};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FlavorArg {
    Git,
    Pip,
    Combined,
    Npm,
}

impl FlavorArg {
    fn flavor(self) -> Flavor {
        match self {
            FlavorArg::Git => Flavor::git(),
            FlavorArg::Pip => Flavor::pip(),
            FlavorArg::Combined => Flavor::combined(),
            FlavorArg::Npm => Flavor::npm(),
        }
    }
}

/// Parse and canonicalize version-control repository URLs.
#[derive(Debug, Parser)]
#[command(name = "vcsurl", version, after_help = AFTER_HELP)]
struct Cli {
    /// Rule set to match against.
    #[arg(long, value_enum, default_value_t = FlavorArg::Combined)]
    flavor: FlavorArg,

    /// TOML file with extra `[[rule]]` tables added to the flavor.
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Also fail when a locator is not explicitly recognized.
    #[arg(long)]
    explicit: bool,

    /// Force ANSI color output.
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    no_color: bool,

    /// Locators to parse. Read from stdin, one per line, when omitted.
    locators: Vec<String>,
}

const AFTER_HELP: &str = "\
Exit codes:
  0  Every locator resolved.
  1  At least one locator did not resolve (or was not explicit with --explicit).
  2  Invalid arguments or rule file.

Set VCSURL_LOG=debug (or trace) to log rule evaluation to stderr.";

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("VCSURL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut flavor = cli.flavor.flavor();
    if let Some(path) = &cli.rules {
        if let Err(err) = load_rules(path, &mut flavor) {
            eprintln!("error: {}: {err}", path.display());
            return ExitCode::from(2);
        }
    }

    let locators = if cli.locators.is_empty() {
        match read_stdin_lines() {
            Ok(lines) => lines,
            Err(err) => {
                eprintln!("error: failed to read stdin: {err}");
                return ExitCode::from(2);
            }
        }
    } else {
        cli.locators.clone()
    };

    if locators.is_empty() {
        eprintln!("error: no input provided (see --help)");
        return ExitCode::from(2);
    }

    let color = if cli.no_color { false } else { cli.color || io::stdout().is_terminal() };

    let mut ok = true;
    for raw in &locators {
        let resolution = flavor.resolve_traced(raw);
        let explicit = flavor.is_explicit(raw);
        report::print_resolution(&flavor, &resolution, explicit, color);
        ok &= resolution.outcome.is_ok() && (!cli.explicit || explicit);
    }

    if ok { ExitCode::SUCCESS } else { ExitCode::from(1) }
}

fn load_rules(path: &Path, flavor: &mut Flavor) -> Result<usize, String> {
    let source = std::fs::read_to_string(path).map_err(|err| err.to_string())?;
    let file = RuleFile::from_toml_str(&source).map_err(|err| err.to_string())?;
    let added = file.apply(flavor.registry_mut()).map_err(|err| err.to_string())?;
    tracing::debug!(added, flavor = flavor.name(), "loaded rule file");
    Ok(added)
}

fn read_stdin_lines() -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}
