//! # Ruleset Configuration
//!
//! Which rules run, at what severity, with which options. Rulesets are YAML:
//!
//! ```yaml
//! rules:
//!   key-path-params:
//!     severity: error
//!     exceptions: "tenantKey"
//!   key-properties-deep:
//!     exceptions: [correlationKey]
//!   key-schemas-semantic-type:
//!     exceptions: { LegacyKey: true }
//!   request-body-additional-properties:
//!     severity: warn
//! ```
//!
//! Rules not mentioned run at `error` severity with no exceptions. Naming a
//! rule that does not exist is an error, so typos cannot silently disable
//! a check.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::context::RuleOptions;
use crate::error::ConfigError;
use crate::rules::RuleKind;

/// How a finding affects the outcome of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The rule does not run.
    Off,
    /// Findings are reported but do not fail the run.
    Warn,
    /// Findings fail the run.
    #[default]
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Error => "error",
        })
    }
}

/// Configuration for one rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuleConfig {
    /// Severity of findings; `off` disables the rule.
    #[serde(default)]
    pub severity: Severity,
    /// Options handed to the evaluator.
    #[serde(flatten)]
    pub options: RuleOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRuleset {
    #[serde(default)]
    rules: BTreeMap<String, RuleConfig>,
}

/// The effective configuration for every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    rules: BTreeMap<RuleKind, RuleConfig>,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            rules: RuleKind::ALL
                .into_iter()
                .map(|kind| (kind, RuleConfig::default()))
                .collect(),
        }
    }
}

impl Ruleset {
    /// Load a ruleset file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, and the
    /// errors of [`Ruleset::from_yaml`] otherwise.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&text, &path.display().to_string())
    }

    /// Parse ruleset YAML. `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for malformed YAML or an unexpected
    /// shape, and [`ConfigError::UnknownRule`] for an unrecognized rule id.
    pub fn from_yaml(text: &str, origin: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        // A comment-only file deserializes to `null`; treat it as "all defaults".
        let raw: Option<RawRuleset> =
            serde_yaml::from_str(text).map_err(|source| ConfigError::Invalid {
                origin: origin.to_string(),
                source,
            })?;

        let mut ruleset = Self::default();
        for (id, config) in raw.unwrap_or_default().rules {
            let kind = id.parse::<RuleKind>().map_err(|_| ConfigError::UnknownRule {
                id: id.clone(),
                known: RuleKind::known_ids(),
            })?;
            tracing::debug!(rule = %kind, severity = %config.severity, exceptions = config.options.exceptions.len(), "rule configured");
            ruleset.rules.insert(kind, config);
        }
        Ok(ruleset)
    }

    /// Configuration for a rule.
    pub fn get(&self, kind: RuleKind) -> &RuleConfig {
        // Every kind is inserted by `default()` and never removed.
        &self.rules[&kind]
    }

    /// Restrict the run to `only`, turning every other rule off.
    pub fn restrict_to(&mut self, only: &[RuleKind]) {
        for (kind, config) in &mut self.rules {
            if !only.contains(kind) {
                config.severity = Severity::Off;
            }
        }
    }

    /// Rules that will run, in reporting order, with their configuration.
    pub fn enabled(&self) -> impl Iterator<Item = (RuleKind, &RuleConfig)> {
        self.rules
            .iter()
            .filter(|(_, config)| config.severity != Severity::Off)
            .map(|(kind, config)| (*kind, config))
    }
}
