use std::collections::HashMap;

use anyhow::Context;
use serde::Deserialize;

const USAGE: &str = "Usage: cargo xtask <command>

Commands:
  content-check [--json]  validate quizzes, exercises, glossary and scenario pools
  arch-check              verify the inner crates stay free of UI and runtime deps";

/// Crates that must not depend on the listed packages.
const LAYER_RULES: [(&str, &[&str]); 2] = [
    ("regresslab-domain", &["dioxus", "tokio", "regresslab-shared", "regresslab-player"]),
    ("regresslab-shared", &["dioxus", "tokio", "regresslab-player"]),
];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("content-check") => content_check(args.any(|a| a == "--json")),
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}\n\n{USAGE}"),
        None => anyhow::bail!("{USAGE}"),
    }
}

fn content_check(json: bool) -> anyhow::Result<()> {
    let issues = regresslab_shared::validate_catalog();

    if json {
        let report = serde_json::json!({
            "modules": regresslab_shared::modules().len(),
            "glossary_terms": regresslab_shared::glossary().len(),
            "stories": regresslab_shared::stories().len(),
            "issues": issues.iter().map(ToString::to_string).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for issue in &issues {
            eprintln!("content-check: {issue}");
        }
    }

    if !issues.is_empty() {
        anyhow::bail!("content-check found {} issue(s)", issues.len());
    }
    if !json {
        println!(
            "content-check: {} modules, {} glossary terms, {} stories OK",
            regresslab_shared::modules().len(),
            regresslab_shared::glossary().len(),
            regresslab_shared::stories().len(),
        );
    }
    Ok(())
}

#[derive(Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
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
    let packages: HashMap<&str, &Package> = metadata
        .packages
        .iter()
        .map(|p| (p.name.as_str(), p))
        .collect();

    let mut violations = Vec::new();
    for (crate_name, forbidden) in LAYER_RULES {
        let package = packages
            .get(crate_name)
            .with_context(|| format!("{crate_name} missing from workspace"))?;
        // dev-dependencies may pull anything in for tests
        for dep in package
            .dependencies
            .iter()
            .filter(|d| d.kind.as_deref() != Some("dev"))
        {
            if forbidden.contains(&dep.name.as_str()) {
                violations.push(format!("{crate_name} depends on {}", dep.name));
            }
        }
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    if !violations.is_empty() {
        anyhow::bail!("arch-check found {} violation(s)", violations.len());
    }
    println!("arch-check: layering OK");
    Ok(())
}
