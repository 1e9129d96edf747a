//! # semkey-cli — Command-Line Interface for semkey
//!
//! Provides the `semkey` binary, which lints an OpenAPI document against the
//! key naming conventions:
//!
//! ```bash
//! semkey lint openapi.yaml
//! semkey lint openapi.json --ruleset semkey.yaml --format json
//! semkey lint openapi.yaml --rule key-path-params --rule key-schemas-semantic-type
//! semkey rules
//! ```
//!
//! ## Modules
//!
//! - [`host`]: selects the document nodes each rule is applied to and
//!   collects findings. It is a reference host for running the rules on a
//!   file, not a general rule-selection engine.
//! - [`report`]: text and JSON rendering, and the exit code policy.
//! - [`lint`]: the `lint` and `rules` subcommand handlers.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers; handlers delegate to
//!   `semkey-rules` and contain no rule logic.
//! - Handlers return an exit code: `0` clean or warnings only, `1` at least
//!   one error-severity finding. Load failures surface as errors and exit `2`.

pub mod host;
pub mod lint;
pub mod report;
