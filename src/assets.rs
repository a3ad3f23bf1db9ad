//! CSS and script asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const CARD: &str = include_str!("../assets/card.css");
const TABLE: &str = include_str!("../assets/table.css");
const FILTER_JS: &str = include_str!("../assets/filter.js");

/// Writes all bundled assets to the output assets directory
pub fn write_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "report.css", &[BASE, CARD, TABLE])?;
    write_bundled(assets_dir, "filter.js", &[FILTER_JS])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let bundle = parts.join("\n");
    fs::write(dir.join(name), bundle)
        .with_context(|| format!("Failed to write asset: {}", name))?;
    Ok(())
}
