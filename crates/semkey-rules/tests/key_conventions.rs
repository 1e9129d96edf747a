//! Integration tests: the key conventions applied to whole-document fixtures,
//! driven the way a host engine would drive them.

use proptest::prelude::*;
use semkey_core::{ExceptionSet, JsonPath};
use semkey_rules::{RuleContext, RuleKind, RuleOptions};
use serde_json::{json, Value};

fn path(segments: &[&str]) -> JsonPath {
    segments.iter().copied().collect()
}

fn orders_api() -> Value {
    json!({
        "openapi": "3.0.3",
        "paths": {
            "/orders/{orderKey}": {
                "post": {
                    "parameters": [
                        { "name": "orderKey", "in": "path", "required": true,
                          "schema": { "$ref": "#/components/schemas/OrderKey" } }
                    ],
                    "requestBody": {
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/OrderUpdate" }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "OrderKey": { "type": "string", "x-semantic-type": "OrderKey" },
                "AccountKey": { "x-semantic-key": true },
                "TenantKey": { "type": "string" },
                "OrderUpdate": {
                    "type": "object",
                    "properties": {
                        "accountKey": { "$ref": "#/components/schemas/AccountKey" },
                        "userKey": { "type": "string" },
                        "info": {
                            "type": "object",
                            "properties": { "sessionKey": { "type": "string" } }
                        }
                    }
                }
            }
        }
    })
}

#[test]
fn path_param_scenario_unmarked_inline_string() {
    let param = json!({ "name": "orderKey", "in": "path", "schema": { "type": "string" } });
    let v = RuleKind::KeyPathParams.evaluate(&param, &RuleOptions::default(), &RuleContext::default());
    assert_eq!(v.len(), 1);
    assert!(v[0].message.contains("orderKey"));
    assert!(v[0].message.contains("x-semantic-type"));
}

#[test]
fn deep_property_scenario_two_violations() {
    let schema = json!({
        "properties": {
            "userKey": { "type": "string" },
            "info": { "type": "object", "properties": { "sessionKey": { "type": "string" } } }
        }
    });
    let v = RuleKind::KeyPropertiesDeep.evaluate(&schema, &RuleOptions::default(), &RuleContext::default());
    let paths: Vec<String> = v.iter().map(|x| x.path.as_ref().unwrap().to_string()).collect();
    assert_eq!(paths, vec!["properties/userKey", "properties/info/properties/sessionKey"]);
}

#[test]
fn legacy_alias_scenario() {
    let doc = orders_api();
    let schema = &doc["components"]["schemas"]["AccountKey"];
    let ctx = RuleContext::at(path(&["components", "schemas", "AccountKey"])).with_document(&doc);
    let v = RuleKind::KeySchemasSemanticType.evaluate(schema, &RuleOptions::default(), &ctx);
    assert!(v.is_empty());
}

#[test]
fn whole_document_review() {
    let doc = orders_api();
    let opts = RuleOptions::default();
    let mut messages = Vec::new();

    // Path parameters.
    let param = &doc["paths"]["/orders/{orderKey}"]["post"]["parameters"][0];
    messages.extend(RuleKind::KeyPathParams.evaluate(param, &opts, &RuleContext::default()));

    // Component schemas: declarations and deep properties.
    for (name, schema) in doc["components"]["schemas"].as_object().unwrap() {
        let ctx = RuleContext::at(path(&["components", "schemas", name.as_str()])).with_document(&doc);
        messages.extend(RuleKind::KeySchemasSemanticType.evaluate(schema, &opts, &ctx));
        messages.extend(RuleKind::KeyPropertiesDeep.evaluate(schema, &opts, &ctx));
    }

    // Request body.
    let body = &doc["paths"]["/orders/{orderKey}"]["post"]["requestBody"]["content"]["application/json"]["schema"];
    let ctx = RuleContext::default().with_document(&doc);
    messages.extend(RuleKind::RequestBodyAdditionalProperties.evaluate(body, &opts, &ctx));

    let rendered: Vec<String> = messages.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "components/schemas/TenantKey: Schema 'TenantKey' must declare x-semantic-type (or transitional x-semantic-key).",
            "components/schemas/OrderUpdate/properties/userKey: Property 'userKey' must use $ref to a semantic key schema (x-semantic-type or x-semantic-key), not an inline primitive string.",
            "components/schemas/OrderUpdate/properties/info/properties/sessionKey: Property 'sessionKey' must use $ref to a semantic key schema (x-semantic-type or x-semantic-key), not an inline primitive string.",
            "(root): Referenced schema 'OrderUpdate' used in a request body must explicitly declare additionalProperties (boolean or schema).",
        ]
    );
}

#[test]
fn exception_shapes_are_interchangeable_across_rules() {
    let shapes = [
        json!("fooKey barKey"),
        json!(["fooKey", "barKey"]),
        json!({ "fooKey": true, "barKey": 1, "bazKey": false }),
    ];
    for raw in shapes {
        let opts = RuleOptions::from_value(&json!({ "exceptions": raw }));
        for name in ["fooKey", "barKey"] {
            let param = json!({ "name": name, "in": "path" });
            assert!(RuleKind::KeyPathParams.evaluate(&param, &opts, &RuleContext::default()).is_empty());
        }
        let baz = json!({ "name": "bazKey", "in": "path" });
        assert_eq!(RuleKind::KeyPathParams.evaluate(&baz, &opts, &RuleContext::default()).len(), 1);
    }
}

#[test]
fn evaluators_ignore_garbage_input() {
    let garbage = [json!(null), json!(17), json!("text"), json!([1, 2]), json!({})];
    let ctx = RuleContext::at(path(&["components", "schemas", "JunkKey"]));
    for kind in RuleKind::ALL {
        for target in &garbage {
            let v = kind.evaluate(target, &RuleOptions::default(), &ctx);
            // Only the declaration rule may flag an empty object named *Key.
            let allowed = kind == RuleKind::KeySchemasSemanticType && target.is_object();
            assert_eq!(!v.is_empty(), allowed, "{kind} on {target}");
        }
    }
}

fn key_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,10}Key"
}

proptest! {
    /// A key path parameter gets exactly one violation without a schema,
    /// none with a `$ref`, none with a marked inline string, and one with
    /// an unmarked or non-string inline schema.
    #[test]
    fn path_param_outcomes(name in key_name(), other_type in "(integer|number|object|array|boolean)") {
        let ctx = RuleContext::default();
        let opts = RuleOptions::default();
        let eval = |schema: Option<Value>| {
            let mut param = json!({ "name": name.clone(), "in": "path" });
            if let Some(s) = schema {
                param["schema"] = s;
            }
            RuleKind::KeyPathParams.evaluate(&param, &opts, &ctx).len()
        };

        prop_assert_eq!(eval(None), 1);
        prop_assert_eq!(eval(Some(json!({ "$ref": "#/components/schemas/AnyKey" }))), 0);
        prop_assert_eq!(eval(Some(json!({ "type": "string", "x-semantic-type": name.clone() }))), 0);
        prop_assert_eq!(eval(Some(json!({ "type": "string" }))), 1);
        prop_assert_eq!(eval(Some(json!({ "type": other_type, "x-semantic-type": "X" }))), 1);
    }

    /// Excepting a parameter's name always silences the rule.
    #[test]
    fn excepted_params_never_flagged(name in key_name()) {
        let opts = RuleOptions::with_exceptions(ExceptionSet::normalize(Some(&json!([name.clone()]))));
        let param = json!({ "name": name, "in": "path" });
        prop_assert!(RuleKind::KeyPathParams.evaluate(&param, &opts, &RuleContext::default()).is_empty());
    }

    /// Entries under `components.schemas` named *Key fail without a marker
    /// and pass with either one.
    #[test]
    fn schema_declarations(name in key_name(), legacy in any::<bool>()) {
        let ctx = RuleContext::at(path(&["components", "schemas", name.as_str()]));
        let opts = RuleOptions::default();
        let marker = if legacy { "x-semantic-key" } else { "x-semantic-type" };
        let mut marked = json!({ "type": "string" });
        marked[marker] = json!(name.clone());

        prop_assert_eq!(RuleKind::KeySchemasSemanticType.evaluate(&json!({ "type": "string" }), &opts, &ctx).len(), 1);
        prop_assert!(RuleKind::KeySchemasSemanticType.evaluate(&marked, &opts, &ctx).is_empty());
    }

    /// A key property wrapped in any chain of compositions is found exactly
    /// once, unless a `$ref` sits somewhere on the way down.
    #[test]
    fn deep_nesting(chain in prop::collection::vec(0usize..5, 0..6), behind_ref in any::<bool>()) {
        let mut node = json!({ "properties": { "deepKey": { "type": "string" } } });
        for step in chain.iter().rev() {
            node = match step {
                0 => json!({ "allOf": [{}, node] }),
                1 => json!({ "oneOf": [node] }),
                2 => json!({ "anyOf": [node] }),
                3 => json!({ "type": "array", "items": node }),
                _ => json!({ "type": "object", "properties": { "child": node } }),
            };
        }
        if behind_ref {
            node = json!({ "properties": { "wrapped": { "$ref": "#/components/schemas/W", "properties": node["properties"].clone() } } });
        }
        let found = RuleKind::KeyPropertiesDeep.evaluate(&node, &RuleOptions::default(), &RuleContext::default());
        prop_assert_eq!(found.len(), if behind_ref { 0 } else { 1 });
    }
}
