//! # Lint Subcommand
//!
//! `semkey lint <DOCUMENT>` loads a document and a ruleset, runs the
//! enabled rules through the reference host, and prints a report.
//! `semkey rules` lists the rule identifiers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use semkey_core::load_document;
use semkey_rules::{RuleKind, Ruleset};

use crate::host;
use crate::report::{render, OutputFormat, Summary};

/// Arguments for the lint subcommand.
#[derive(Args, Debug)]
pub struct LintArgs {
    /// OpenAPI document to lint (`.json`, `.yaml`, or `.yml`).
    pub document: PathBuf,

    /// YAML ruleset with per-rule severity and exceptions.
    #[arg(long)]
    pub ruleset: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Run only the named rule. Repeatable.
    #[arg(long = "rule", value_name = "ID")]
    pub rules: Vec<RuleKind>,
}

/// Execute the lint subcommand, returning the process exit code.
pub fn run_lint(args: &LintArgs) -> Result<u8> {
    let (rendered, code) = lint_to_string(args)?;
    println!("{rendered}");
    Ok(code)
}

/// Run a lint and return the rendered report with its exit code.
pub fn lint_to_string(args: &LintArgs) -> Result<(String, u8)> {
    let document = load_document(&args.document)
        .with_context(|| format!("failed to load document {}", args.document.display()))?;

    let mut ruleset = match &args.ruleset {
        Some(path) => Ruleset::from_path(path)
            .with_context(|| format!("failed to load ruleset {}", path.display()))?,
        None => Ruleset::default(),
    };
    if !args.rules.is_empty() {
        ruleset.restrict_to(&args.rules);
    }

    let findings = host::run(&document, &ruleset);
    tracing::info!(
        document = %args.document.display(),
        findings = findings.len(),
        "lint complete"
    );

    let summary = Summary::of(&findings);
    let rendered = render(&findings, args.format).context("failed to render report")?;
    Ok((rendered, summary.exit_code()))
}

/// Execute the rules subcommand.
pub fn run_rules() -> Result<u8> {
    for kind in RuleKind::ALL {
        println!("  {:<36} {}", kind.id(), kind.description());
    }
    Ok(0)
}
