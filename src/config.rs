//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for Farmanote.
#[derive(Debug, Clone, Parser)]
#[command(name = "farmanote", version, about, long_about = None)]
pub struct Config {
    /// Path to the raw response text
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "report")]
    pub output: PathBuf,

    /// JSON file with citation source descriptors
    #[arg(short, long)]
    pub sources: Option<PathBuf>,

    /// Report card title
    #[arg(long, default_value = "Hasil Analisis")]
    pub title: String,

    /// Color theme (light or dark)
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Also write the parsed document as document.json
    #[arg(long)]
    pub json: bool,

    /// Do not open the generated report in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input file or sources file does not exist, or
    /// the theme is not one of `light`/`dark`.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("Input file does not exist: {}", self.input.display());
        }

        if let Some(sources) = &self.sources
            && !sources.exists()
        {
            bail!("Sources file does not exist: {}", sources.display());
        }

        if self.theme != "light" && self.theme != "dark" {
            bail!("Unknown theme '{}', expected 'light' or 'dark'", self.theme);
        }

        Ok(())
    }
}
