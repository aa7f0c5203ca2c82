// crates/trust-center-core/src/schema.rs
// ============================================================================
// Module: Trust Center JSON Schema
// Description: JSON Schema describing the trust center YAML document.
// Purpose: Publish the configuration shape for editors and tooling.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! [`trust_center_schema`] mirrors the checks performed by the parser so
//! editors can validate YAML before saving it. Unknown keys are allowed,
//! matching the parser, which ignores them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use crate::sections::SECTION_KEYS;

// ============================================================================
// SECTION: Public Schema Entrypoints
// ============================================================================

/// Returns the JSON schema for the trust center configuration document.
#[must_use]
pub fn trust_center_schema() -> Value {
    let text = json!({ "type": "string" });
    let text_list = json!({ "type": "array", "items": { "type": "string" } });
    let span = json!({ "enum": ["full", "half"] });
    let layout_properties: serde_json::Map<String, Value> =
        SECTION_KEYS.iter().map(|key| (key.as_str().to_string(), span.clone())).collect();
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "trust-center://schemas/trust-center.schema.json",
        "title": "Trust Center Configuration",
        "description": "YAML document driving the public trust center page.",
        "type": "object",
        "required": ["company"],
        "properties": {
            "theme": { "enum": ["light", "dark"], "default": "light" },
            "subprocessorsLink": { "type": "string", "format": "uri" },
            "company": object_schema(
                &["name", "tagline", "description"],
                &[
                    ("name", &text),
                    ("tagline", &text),
                    ("description", &text),
                    ("website", &text),
                    ("logo", &text),
                    ("headquarters", &text),
                    ("trustLead", &text),
                ],
            ),
            "hero": object_schema(
                &[],
                &[("statusMessage", &text), ("lastUpdate", &text), ("commitments", &text_list)],
            ),
            "metrics": list_of(&object_schema(
                &["label", "value"],
                &[("label", &text), ("value", &text), ("caption", &text)],
            )),
            "compliance": list_of(&object_schema(
                &["name", "status"],
                &[
                    ("name", &text),
                    ("status", &text),
                    ("year", &json!({ "type": ["string", "number"] })),
                    ("scope", &text),
                    ("badge", &text),
                ],
            )),
            "infrastructure": object_schema(
                &[],
                &[
                    ("hosting", &text),
                    ("dataResidency", &text_list),
                    ("dataCenters", &text_list),
                    ("encryption", &text),
                    ("retention", &text),
                    ("backups", &text),
                ],
            ),
            "documents": list_of(&object_schema(
                &["name", "description", "category"],
                &[
                    ("name", &text),
                    ("description", &text),
                    ("category", &text),
                    ("access", &json!({ "enum": ["public", "request"], "default": "request" })),
                    ("tags", &text_list),
                    ("url", &text),
                    ("updatedAt", &text),
                ],
            )),
            "policies": list_of(&object_schema(
                &["name"],
                &[("name", &text), ("owner", &text), ("coverage", &text), ("cadence", &text)],
            )),
            "monitoring": object_schema(
                &[],
                &[
                    ("statusPage", &text),
                    (
                        "incidentHistory",
                        &list_of(&object_schema(
                            &["date", "summary", "impact"],
                            &[("date", &text), ("summary", &text), ("impact", &text)],
                        )),
                    ),
                ],
            ),
            "updates": list_of(&object_schema(
                &["date", "title", "summary"],
                &[("date", &text), ("title", &text), ("summary", &text)],
            )),
            "contacts": object_schema(
                &["email", "sla"],
                &[
                    ("email", &json!({ "type": "string", "format": "email" })),
                    ("sla", &text),
                    ("phone", &text),
                    ("officeHours", &text),
                ],
            ),
            "faqs": list_of(&object_schema(
                &["question", "answer"],
                &[("question", &text), ("answer", &text)],
            )),
            "subprocessors": list_of(&object_schema(
                &["name", "category", "location"],
                &[
                    ("name", &text),
                    ("category", &text),
                    ("location", &text),
                    ("logo", &text),
                    ("description", &text),
                ],
            )),
            "layout": {
                "type": "object",
                "properties": Value::Object(layout_properties)
            },
            "sections": text_list
        }
    })
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds an object schema with the given required keys and properties.
fn object_schema(required: &[&str], properties: &[(&str, &Value)]) -> Value {
    let properties: serde_json::Map<String, Value> = properties
        .iter()
        .map(|(name, schema)| ((*name).to_string(), (*schema).clone()))
        .collect();
    json!({
        "type": "object",
        "required": required,
        "properties": properties
    })
}

/// Builds an array schema over `items`.
fn list_of(items: &Value) -> Value {
    json!({ "type": "array", "items": items })
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::expect_used,
        reason = "Test helpers use expect/expect_err for concise failure messages."
    )]

    use jsonschema::Draft;
    use serde_json::json;

    use super::trust_center_schema;
    use crate::parse::yaml_to_value;
    use crate::template::DEFAULT_TRUST_YAML;

    #[test]
    fn default_template_matches_schema() {
        let validator = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .build(&trust_center_schema())
            .expect("schema compiles");
        let document = yaml_to_value(DEFAULT_TRUST_YAML).expect("template parses");
        let errors: Vec<String> =
            validator.iter_errors(&document).map(|error| error.to_string()).collect();
        assert!(errors.is_empty(), "unexpected schema errors: {errors:?}");
    }

    #[test]
    fn schema_rejects_missing_company_and_bad_span() {
        let validator = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .build(&trust_center_schema())
            .expect("schema compiles");
        assert!(!validator.is_valid(&json!({ "theme": "light" })));
        let bad_layout = json!({
            "company": { "name": "Acme", "tagline": "t", "description": "d" },
            "layout": { "documents": "wide" }
        });
        assert!(!validator.is_valid(&bad_layout));
    }
}
