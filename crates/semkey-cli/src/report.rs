//! # Report Rendering
//!
//! Text output is one line per finding followed by a summary:
//!
//! ```text
//! error key-path-params paths//orders/{orderKey}/get/parameters/0: Path parameter 'orderKey' must ...
//! 1 error, 0 warnings
//! ```
//!
//! JSON output is `{"findings": [...], "summary": {"errors": n, "warnings": n}}`.

use clap::ValueEnum;
use serde::Serialize;

use semkey_rules::Severity;

use crate::host::Finding;

/// Output format of `semkey lint`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Finding counts by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Error-severity findings.
    pub errors: usize,
    /// Warning-severity findings.
    pub warnings: usize,
}

impl Summary {
    /// Count findings by severity.
    pub fn of(findings: &[Finding]) -> Self {
        findings.iter().fold(Self::default(), |mut s, f| {
            match f.severity {
                Severity::Error => s.errors += 1,
                Severity::Warn => s.warnings += 1,
                Severity::Off => {}
            }
            s
        })
    }

    /// Process exit code: `1` if any error-severity finding exists, else `0`.
    pub fn exit_code(&self) -> u8 {
        u8::from(self.errors > 0)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    findings: &'a [Finding],
    summary: Summary,
}

/// Render findings in the requested format.
pub fn render(findings: &[Finding], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(findings)),
        OutputFormat::Json => render_json(findings),
    }
}

/// One line per finding, then a summary line.
pub fn render_text(findings: &[Finding]) -> String {
    let summary = Summary::of(findings);
    findings
        .iter()
        .map(|f| {
            let path = if f.path.is_empty() {
                "(root)".to_string()
            } else {
                f.path.to_string()
            };
            format!("{} {} {}: {}", f.severity, f.rule, path, f.message)
        })
        .chain(std::iter::once(format!(
            "{} {}, {} {}",
            summary.errors,
            plural(summary.errors, "error", "errors"),
            summary.warnings,
            plural(summary.warnings, "warning", "warnings"),
        )))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON report.
pub fn render_json(findings: &[Finding]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        findings,
        summary: Summary::of(findings),
    })
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semkey_core::JsonPath;
    use semkey_rules::RuleKind;

    fn finding(severity: Severity) -> Finding {
        Finding {
            rule: RuleKind::KeySchemasSemanticType,
            severity,
            path: JsonPath::root().key("components").key("schemas").key("OrderKey"),
            message: "Schema 'OrderKey' must declare x-semantic-type (or transitional x-semantic-key).".into(),
        }
    }

    #[test]
    fn summary_and_exit_code() {
        let findings = vec![finding(Severity::Error), finding(Severity::Warn), finding(Severity::Warn)];
        let s = Summary::of(&findings);
        assert_eq!(s, Summary { errors: 1, warnings: 2 });
        assert_eq!(s.exit_code(), 1);
        assert_eq!(Summary::of(&[finding(Severity::Warn)]).exit_code(), 0);
        assert_eq!(Summary::of(&[]).exit_code(), 0);
    }

    #[test]
    fn text_lines() {
        let text = render_text(&[finding(Severity::Error)]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "error key-schemas-semantic-type components/schemas/OrderKey: Schema 'OrderKey' must declare x-semantic-type (or transitional x-semantic-key).",
                "1 error, 0 warnings",
            ]
        );
    }

    #[test]
    fn text_has_one_line_per_finding_and_no_trailing_newline() {
        let text = render_text(&[finding(Severity::Error), finding(Severity::Warn)]);
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with("1 error, 1 warning"));
        assert_eq!(render_text(&[]), "0 errors, 0 warnings");
    }

    #[test]
    fn text_root_path() {
        let mut f = finding(Severity::Warn);
        f.path = JsonPath::root();
        assert!(render_text(&[f]).starts_with("warn key-schemas-semantic-type (root): "));
    }

    #[test]
    fn json_shape() {
        let rendered = render(&[finding(Severity::Warn)], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["summary"]["warnings"], 1);
        assert_eq!(value["summary"]["errors"], 0);
        assert_eq!(value["findings"][0]["rule"], "key-schemas-semantic-type");
        assert_eq!(value["findings"][0]["severity"], "warn");
        assert_eq!(
            value["findings"][0]["path"],
            serde_json::json!(["components", "schemas", "OrderKey"])
        );
    }
}
