//! End-to-end tests for the Farmanote binary workflow.

mod common;

use anyhow::Result;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn run_binary(args: &[&str]) -> Result<std::process::ExitStatus> {
    let status = Command::new("cargo")
        .args(["run", "--manifest-path", "Cargo.toml", "--quiet", "--"])
        .args(args)
        .status()?;
    Ok(status)
}

/// Tests full binary execution generates a complete report.
#[test]
fn test_full_workflow_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let input = dir.path().join("response.md");
    let sources = dir.path().join("sources.json");
    let output = dir.path().join("out");
    fs::write(&input, common::sample_response())?;
    fs::write(
        &sources,
        r#"[{"web":{"uri":"http://who.int/guide","title":"Guideline - WHO"}},
            {"web":{"uri":"http://bpom.go.id/obat","title":"Info Obat | BPOM"}}]"#,
    )?;

    // Act
    let status = run_binary(&[
        input.to_str().expect("Input path should be valid UTF8"),
        "--sources",
        sources.to_str().expect("Sources path should be valid UTF8"),
        "-o",
        output.to_str().expect("Output path should be valid UTF8"),
        "--title",
        "Hasil Asesmen",
        "--theme",
        "dark",
        "--json",
        "--no-open",
    ])?;

    // Assert
    assert!(status.success(), "Binary should exit successfully");

    let html = fs::read_to_string(output.join("index.html"))?;
    assert!(html.contains("Hasil Asesmen"));
    assert!(html.contains("data-theme=\"dark\""));
    assert!(html.contains("Rekomendasi Obat Baru"));
    assert!(html.contains("data-filter=\"stock\""));
    assert!(html.contains("who.int"));

    assert!(output.join("assets/report.css").exists());
    assert!(output.join("assets/filter.js").exists());

    let json = fs::read_to_string(output.join("document.json"))?;
    let parsed: serde_json::Value = serde_json::from_str(&json)?;
    assert!(
        parsed.get("blocks").is_some(),
        "document.json should expose the block sequence"
    );

    Ok(())
}

/// Tests binary execution with minimal arguments and no sources file.
#[test]
fn test_minimal_args_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let input = dir.path().join("response.md");
    let output = dir.path().join("out");
    fs::write(&input, "## Ringkasan\nTanpa sumber eksternal [1]")?;

    // Act
    let status = run_binary(&[
        input.to_str().expect("Input path should be valid UTF8"),
        "-o",
        output.to_str().expect("Output path should be valid UTF8"),
        "--no-open",
    ])?;

    // Assert
    assert!(status.success(), "Binary should exit successfully");

    let html = fs::read_to_string(output.join("index.html"))?;
    assert!(html.contains("Ringkasan"));
    assert!(html.contains("citation-inert"), "Marker without sources is inert");
    assert!(html.contains("Tidak ada link eksternal"));

    Ok(())
}

/// Tests the binary fails cleanly on a missing input file.
#[test]
fn test_missing_input_fails() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let output = dir.path().join("out");

    // Act
    let status = run_binary(&[
        "no-such-response.md",
        "-o",
        output.to_str().expect("Output path should be valid UTF8"),
        "--no-open",
    ])?;

    // Assert
    assert!(!status.success(), "Missing input must be an error");
    Ok(())
}
