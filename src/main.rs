use anyhow::{Context, Result};
use farmanote::pages::report::{ReportPageData, report_page};
use farmanote::{Config, Document, SourceEntry};
use std::fs;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let text = fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read input: {}", config.input.display()))?;

    let sources: Vec<SourceEntry> = match &config.sources {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read sources: {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse sources JSON: {}", path.display()))?
        }
        None => Vec::new(),
    };

    let document = Document::parse(&text);

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;
    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    farmanote::write_assets(&assets_dir)?;

    let page = report_page(ReportPageData {
        title: &config.title,
        theme: &config.theme,
        document: &document,
        sources: &sources,
    });

    let index_path = config.output.join("index.html");
    fs::write(&index_path, page.into_string())
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    if config.json {
        let json_path = config.output.join("document.json");
        let json = serde_json::to_string_pretty(&document)
            .context("Failed to serialize parsed document")?;
        fs::write(&json_path, json)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        println!("Generated: {}", json_path.display());
    }

    println!("Generated: {}", index_path.display());

    if !config.no_open
        && let Err(e) = open::that(&index_path)
    {
        eprintln!("Warning: Failed to open report in browser: {:#}", e);
    }

    Ok(())
}
