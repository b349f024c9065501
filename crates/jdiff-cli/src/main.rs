//! Command-line interface for the `jdiff` JSON line-diff engine.
//!
//! Diffs two JSON documents and prints a plain-text report in either a
//! side-by-side or unified layout, with validation, search, and statistics
//! modes layered on top of the same engine entry points.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use jdiff_core::{
    diff_json, export_diff_as_text, sample_documents, search_in_diff, validate_json, DiffOptions,
    DiffResult, Validation, ViewMode,
};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum Mode {
    #[value(name = "side-by-side")]
    SideBySide,
    #[value(name = "unified")]
    Unified,
}

impl From<Mode> for ViewMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::SideBySide => Self::SideBySide,
            Mode::Unified => Self::Unified,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "jdiff",
    version,
    about = "Diff JSON documents line by line",
    override_usage = "jdiff [OPTIONS] FILE1 [FILE2]\n       jdiff --sample [OPTIONS]"
)]
struct Cli {
    /// Diff layout used for rendering, search, and export.
    #[arg(long = "mode", value_enum, default_value = "side-by-side")]
    mode: Mode,

    /// Indent width used to reformat both inputs (0, 2, or 4).
    #[arg(long = "indent", default_value_t = 2)]
    indent: usize,

    /// Accepted for parity with the engine options; alignment already
    /// compares trimmed lines.
    #[arg(long = "ignore-whitespace", action = ArgAction::SetTrue)]
    ignore_whitespace: bool,

    /// Print only the statistics block.
    #[arg(long = "stats", action = ArgAction::SetTrue)]
    stats: bool,

    /// Validate both inputs and report line/column errors instead of diffing.
    #[arg(long = "validate", action = ArgAction::SetTrue)]
    validate: bool,

    /// Print lines matching TERM (case-insensitive) instead of the report.
    #[arg(long = "search", value_name = "TERM")]
    search: Option<String>,

    /// Diff the built-in sample documents; no input files needed.
    #[arg(long = "sample", action = ArgAction::SetTrue)]
    sample: bool,

    /// Write output to FILE instead of STDOUT.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Positional inputs (FILE1 [FILE2]); FILE2 defaults to STDIN.
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,
}

fn main() {
    match try_main() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            let _ = writeln!(io::stderr(), "{err:#}");
            std::process::exit(2);
        }
    }
}

fn try_main() -> Result<i32> {
    init_tracing();
    let cli = Cli::parse();

    let (lhs_text, rhs_text) = read_inputs(&cli)?;
    debug!(lhs_bytes = lhs_text.len(), rhs_bytes = rhs_text.len(), "inputs loaded");

    if cli.validate {
        return run_validate(&lhs_text, &rhs_text);
    }

    let options = DiffOptions::default()
        .with_view_mode(cli.mode.into())
        .with_indent_size(cli.indent)
        .context("invalid --indent")?
        .with_ignore_whitespace(cli.ignore_whitespace);

    let result = diff_json(&lhs_text, &rhs_text, &options)?;
    debug!(
        changes = result.change_indices().len(),
        rows = result.left_lines().len(),
        "diff computed"
    );

    let rendered = if cli.stats {
        render_stats(&result)
    } else if let Some(term) = &cli.search {
        render_search(&result, term, options.view_mode())
    } else {
        export_diff_as_text(&result, options.view_mode())
    };

    if let Some(path) = &cli.output {
        fs::write(path, rendered.as_bytes())
            .with_context(|| format!("failed to write output to {}", path.display()))?;
    } else {
        print!("{rendered}");
        io::stdout().flush().ok();
    }

    Ok(i32::from(!result.is_empty()))
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn read_inputs(cli: &Cli) -> Result<(String, String)> {
    if cli.sample {
        if !cli.inputs.is_empty() {
            bail!("--sample does not take input files");
        }
        let samples = sample_documents();
        return Ok((samples.original, samples.modified));
    }
    match cli.inputs.len() {
        1 => {
            let lhs = read_file(&cli.inputs[0])?;
            let mut rhs = String::new();
            io::stdin().read_to_string(&mut rhs).context("failed to read STDIN")?;
            Ok((lhs, rhs))
        }
        2 => Ok((read_file(&cli.inputs[0])?, read_file(&cli.inputs[1])?)),
        _ => bail!("expected FILE1 [FILE2] (or --sample); run with --help for usage"),
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn run_validate(lhs_text: &str, rhs_text: &str) -> Result<i32> {
    let mut failures = 0;
    for (label, text) in [("first", lhs_text), ("second", rhs_text)] {
        match validate_json(text) {
            Validation::Valid => println!("{label} input: OK"),
            Validation::Invalid { message, .. } => {
                failures += 1;
                println!("{label} input: {message}");
            }
        }
    }
    Ok(i32::from(failures > 0))
}

fn render_stats(result: &DiffResult) -> String {
    let stats = result.stats();
    format!(
        "Added: {}\nRemoved: {}\nModified: {}\nType changed: {}\nUnchanged: {}\nTotal changes: {}\n",
        stats.added,
        stats.removed,
        stats.modified,
        stats.type_changed,
        stats.unchanged,
        stats.total_changes,
    )
}

fn render_search(result: &DiffResult, term: &str, mode: ViewMode) -> String {
    let mut output = String::new();
    for found in search_in_diff(result, term, mode) {
        let side = match found.side {
            Some(jdiff_core::MatchSide::Left) => "left ",
            Some(jdiff_core::MatchSide::Right) => "right ",
            None => "",
        };
        output.push_str(&format!("{side}{index}: {line}\n", index = found.index, line = found.line));
    }
    output
}
