use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use inline_probe::{
    render_json, render_text, run_and_inspect, EvalContext, ProbeConfig, DEFAULT_INDENT,
    DEFAULT_MAX_ARRAY_LEN, DEFAULT_MAX_DEPTH, DEFAULT_RESERVED_NAME,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "inline-probe",
    version,
    about = "Run a script and print the value of every bare name it mentions"
)]
struct Cli {
    /// Script to run and inspect
    script: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Spaces before each value line
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    indent: usize,

    /// Name reserved for the probe slot; never reported
    #[arg(long, default_value = DEFAULT_RESERVED_NAME)]
    reserved_name: String,

    /// Maximum block nesting while running the script
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum length of a `[value; len]` array
    #[arg(long, default_value_t = DEFAULT_MAX_ARRAY_LEN)]
    max_array_len: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Indented name/value stanzas
    Text,
    /// JSON array with line and column of each name
    Json,
}

/// Logs go to stderr so stdout carries only the report.
///
/// `RUST_LOG` wins over `-v` when set and valid.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ProbeConfig::default()
        .with_indent(cli.indent)
        .with_reserved_name(cli.reserved_name.as_str());
    let ctx = EvalContext::with_max_depth(cli.max_depth).with_max_array_len(cli.max_array_len);

    let probes = run_and_inspect(&cli.script, &config, &ctx)
        .with_context(|| format!("failed to probe `{}`", cli.script.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Text => render_text(&probes, config.indent, &mut out)?,
        Format::Json => render_json(&probes, &mut out)?,
    }
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
