//! `hanokoto` generator binary.
//!
//! Reads `hanokoto.toml` (or the path given with `--config`), gathers every
//! sheet and database, and writes the normalized archive as JSON for the
//! rendering stage.

mod config;
mod fetch;
mod pipeline;

use std::{
  fs::File,
  io::{self, BufWriter, Write},
  path::PathBuf,
};

use anyhow::Context as _;
use clap::Parser;
use hanokoto_core::Archive;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::GeneratorConfig;

#[derive(Parser)]
#[command(author, version, about = "Fan archive data generator")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "hanokoto.toml")]
  config: PathBuf,

  /// Write the archive JSON here instead of stdout.
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Indent the JSON output.
  #[arg(long)]
  pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Logs go to stderr so stdout stays clean for the JSON.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let config = GeneratorConfig::load(&cli.config)?;
  let archive = pipeline::build_archive(&config).await?;

  match &cli.output {
    Some(path) => {
      let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
      write_archive(BufWriter::new(file), &archive, cli.pretty)?;
      tracing::info!("wrote {}", path.display());
    }
    None => write_archive(io::stdout().lock(), &archive, cli.pretty)?,
  }

  Ok(())
}

fn write_archive(mut out: impl Write, archive: &Archive, pretty: bool) -> anyhow::Result<()> {
  let written = if pretty {
    serde_json::to_writer_pretty(&mut out, archive)
  } else {
    serde_json::to_writer(&mut out, archive)
  };
  written.context("failed to serialise archive")?;
  writeln!(out)?;
  out.flush().context("failed to flush output")
}
