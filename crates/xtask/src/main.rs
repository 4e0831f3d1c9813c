use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates the domain may depend on. Anything else is an I/O or runtime leak.
const DOMAIN_ALLOWED_DEPS: &[&str] = &["chrono", "serde", "serde_json", "thiserror", "uuid"];
const DOMAIN_PACKAGE: &str = "classquest-domain";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Deserialize)]
struct Dependency {
    name: String,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_PACKAGE)
        .with_context(|| format!("{DOMAIN_PACKAGE} not in workspace"))?;

    let mut violations: Vec<String> = domain
        .dependencies
        .iter()
        .filter(|dep| !DOMAIN_ALLOWED_DEPS.contains(&dep.name.as_str()))
        .map(|dep| format!("{DOMAIN_PACKAGE} depends on `{}`", dep.name))
        .collect();

    let src = domain
        .manifest_path
        .parent()
        .context("manifest has no parent directory")?
        .join("src");
    violations.extend(scan_for_io(&src)?);

    if violations.is_empty() {
        println!("arch-check: {DOMAIN_PACKAGE} is free of I/O");
        return Ok(());
    }
    for violation in &violations {
        eprintln!("  {violation}");
    }
    anyhow::bail!("arch-check found {} violation(s)", violations.len())
}

/// Flag direct filesystem, network, process or wall-clock access.
fn scan_for_io(dir: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = regex_lite::Regex::new(
        r"std::(fs|net|process|env)\b|tokio::|Utc::now\(\)|SystemTime::now\(\)",
    )?;
    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            found.extend(scan_for_io(&path)?);
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let source = std::fs::read_to_string(&path)?;
        // Test modules may build fixed instants however they like.
        let code = source.split("#[cfg(test)]").next().unwrap_or_default();
        for (number, line) in code.lines().enumerate() {
            if pattern.is_match(line) {
                found.push(format!("{}:{}: {}", path.display(), number + 1, line.trim()));
            }
        }
    }
    Ok(found)
}
