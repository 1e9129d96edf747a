//! # Reference Host
//!
//! Chooses which nodes of an OpenAPI document each rule sees, runs the
//! evaluators, and turns their violations into [`Finding`]s.
//!
//! ## Node Selection
//!
//! | Rule | Targets |
//! |---|---|
//! | `key-path-params` | `paths.*.parameters[*]`, `paths.*.<method>.parameters[*]`, `components.parameters.*` |
//! | `key-properties-deep` | `components.schemas.*`, request body and response media-type `schema`s |
//! | `key-schemas-semantic-type` | `components.schemas.*` |
//! | `request-body-additional-properties` | request body media-type `schema`s owning `$ref` |
//!
//! Targets come out in document order. Nodes of the wrong shape are simply
//! not selected.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};

use semkey_core::JsonPath;
use semkey_rules::{RuleContext, RuleKind, Ruleset, Severity};

/// HTTP methods that name an operation inside a path item.
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// A document node selected for one rule.
#[derive(Debug, Clone)]
pub struct Target<'a> {
    /// Location of the node.
    pub path: JsonPath,
    /// The node itself.
    pub value: &'a Value,
}

/// One reported problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Rule that produced the finding.
    pub rule: RuleKind,
    /// Severity configured for that rule.
    pub severity: Severity,
    /// Location of the offending node.
    pub path: JsonPath,
    /// Human-readable message.
    pub message: String,
}

/// Select the nodes `kind` is applied to.
pub fn select(kind: RuleKind, document: &Value) -> Vec<Target<'_>> {
    let mut targets = Vec::new();
    match kind {
        RuleKind::KeyPathParams => {
            for (path_item_path, path_item) in path_items(document) {
                push_parameters(&mut targets, &path_item_path, path_item);
                for (op_path, operation) in operations(&path_item_path, path_item) {
                    push_parameters(&mut targets, &op_path, operation);
                }
            }
            push_entries(
                &mut targets,
                &JsonPath::root().key("components").key("parameters"),
                components_section(document, "parameters"),
            );
        }
        RuleKind::KeyPropertiesDeep => {
            push_component_schemas(&mut targets, document);
            for (op_path, operation) in all_operations(document) {
                if let Some(body) = operation.get("requestBody") {
                    push_media_schemas(&mut targets, &op_path.key("requestBody"), body);
                }
                let Some(responses) = operation.get("responses").and_then(Value::as_object) else {
                    continue;
                };
                let responses_path = op_path.key("responses");
                for (code, response) in responses {
                    push_media_schemas(&mut targets, &responses_path.key(code.as_str()), response);
                }
            }
        }
        RuleKind::KeySchemasSemanticType => push_component_schemas(&mut targets, document),
        RuleKind::RequestBodyAdditionalProperties => {
            for (op_path, operation) in all_operations(document) {
                if let Some(body) = operation.get("requestBody") {
                    push_media_schemas(&mut targets, &op_path.key("requestBody"), body);
                }
            }
            targets.retain(|t| t.value.get("$ref").is_some());
        }
    }
    tracing::debug!(rule = %kind, targets = targets.len(), "selected targets");
    targets
}

/// Run every enabled rule of `ruleset` over `document`.
///
/// Violations without their own path are reported at the target's path.
/// Findings keep rule order, then document order, with exact duplicates
/// removed.
pub fn run(document: &Value, ruleset: &Ruleset) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut seen = HashSet::new();

    for (kind, config) in ruleset.enabled() {
        for target in select(kind, document) {
            let ctx = RuleContext::at(target.path.clone()).with_document(document);
            for violation in kind.evaluate(target.value, &config.options, &ctx) {
                let path = violation.path.unwrap_or_else(|| target.path.clone());
                if !seen.insert((kind, path.clone(), violation.message.clone())) {
                    continue;
                }
                findings.push(Finding {
                    rule: kind,
                    severity: config.severity,
                    path,
                    message: violation.message,
                });
            }
        }
    }
    findings
}

fn path_items(document: &Value) -> impl Iterator<Item = (JsonPath, &Map<String, Value>)> {
    let paths_path = JsonPath::root().key("paths");
    document
        .get("paths")
        .and_then(Value::as_object)
        .into_iter()
        .flatten()
        .filter_map(move |(route, item)| {
            item.as_object()
                .map(|item| (paths_path.key(route.as_str()), item))
        })
}

fn operations<'a>(
    path_item_path: &JsonPath,
    path_item: &'a Map<String, Value>,
) -> Vec<(JsonPath, &'a Map<String, Value>)> {
    // Path item key order, not method-list order, so findings follow the document.
    path_item
        .iter()
        .filter(|(method, _)| HTTP_METHODS.contains(&method.as_str()))
        .filter_map(|(method, op)| {
            op.as_object()
                .map(|op| (path_item_path.key(method.as_str()), op))
        })
        .collect()
}

fn all_operations(document: &Value) -> Vec<(JsonPath, &Map<String, Value>)> {
    path_items(document)
        .flat_map(|(item_path, item)| operations(&item_path, item))
        .collect()
}

fn components_section<'a>(document: &'a Value, section: &str) -> Option<&'a Map<String, Value>> {
    document.get("components")?.get(section)?.as_object()
}

fn push_parameters<'a>(
    targets: &mut Vec<Target<'a>>,
    owner_path: &JsonPath,
    owner: &'a Map<String, Value>,
) {
    let Some(params) = owner.get("parameters").and_then(Value::as_array) else {
        return;
    };
    let params_path = owner_path.key("parameters");
    for (i, param) in params.iter().enumerate() {
        targets.push(Target {
            path: params_path.index(i),
            value: param,
        });
    }
}

fn push_entries<'a>(
    targets: &mut Vec<Target<'a>>,
    section_path: &JsonPath,
    section: Option<&'a Map<String, Value>>,
) {
    for (name, value) in section.into_iter().flatten() {
        targets.push(Target {
            path: section_path.key(name.as_str()),
            value,
        });
    }
}

fn push_component_schemas<'a>(targets: &mut Vec<Target<'a>>, document: &'a Value) {
    push_entries(
        targets,
        &JsonPath::root().key("components").key("schemas"),
        components_section(document, "schemas"),
    );
}

/// Push `<owner>.content.<media>.schema` for every media type of a request body or response.
fn push_media_schemas<'a>(targets: &mut Vec<Target<'a>>, owner_path: &JsonPath, owner: &'a Value) {
    let Some(content) = owner.get("content").and_then(Value::as_object) else {
        return;
    };
    let content_path = owner_path.key("content");
    for (media, media_type) in content {
        if let Some(schema) = media_type.get("schema") {
            targets.push(Target {
                path: content_path.key(media.as_str()).key("schema"),
                value: schema,
            });
        }
    }
}
