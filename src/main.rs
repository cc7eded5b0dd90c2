//! Derive `icon-glyph.png` and `icon-glyph-white.png` from an icon.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use icon_glyphs::prelude::*;

/// Write a transparent glyph and a white silhouette next to the source icon
#[derive(Parser, Debug)]
#[command(name = "make-glyphs", version, about, long_about = None)]
struct Cli {
    /// Icon image to derive the glyphs from
    #[arg(value_name = "SOURCE_ICON", value_hint = clap::ValueHint::FilePath)]
    source: PathBuf,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,

        // help and version go to stdout with a zero status
        Err(error) if !error.use_stderr() => error.exit(),

        Err(error) if error.kind() == clap::error::ErrorKind::MissingRequiredArgument => {
            println!("{}", Cli::command().render_usage());
            return Ok(ExitCode::FAILURE);
        }

        Err(error) => error.exit(),
    };

    let paths = make_glyphs(&cli.source)
        .with_context(|| format!("failed to make glyphs from `{}`", cli.source.display()))?;

    log::info!("glyphs written to {} and {}", paths.glyph.display(), paths.white.display());
    Ok(ExitCode::SUCCESS)
}
