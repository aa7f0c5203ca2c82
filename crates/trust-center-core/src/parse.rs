// crates/trust-center-core/src/parse.rs
// ============================================================================
// Module: Trust Center Parser
// Description: YAML text to validated trust center configuration.
// Purpose: Single entry point that accepts untrusted YAML and either returns a
//          fully defaulted configuration or one joined error message.
// Dependencies: serde_json, serde_yaml, thiserror
// ============================================================================

//! ## Overview
//! Parsing runs in two stages. The YAML text is first read into a plain tree
//! restricted to JSON-compatible data: explicit tags, non-finite floats, and
//! non-scalar mapping keys are rejected, and an empty document becomes an
//! empty mapping. The tree is then decoded against the configuration schema,
//! applying defaults and collecting every validation issue in one pass.
//!
//! Failures never panic. A rejected document produces a [`ParseError`] whose
//! display form is the message shown to editors, with issues formatted as
//! `path: message` and joined by ` | `.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::decode::Decoder;
use crate::decode::FieldPath;
use crate::decode::ValidationReport;
use crate::model::AuditYear;
use crate::model::Company;
use crate::model::ComplianceItem;
use crate::model::Contacts;
use crate::model::DocumentAccess;
use crate::model::DocumentEntry;
use crate::model::Faq;
use crate::model::Hero;
use crate::model::Incident;
use crate::model::Infrastructure;
use crate::model::Layout;
use crate::model::LayoutSpan;
use crate::model::Metric;
use crate::model::Monitoring;
use crate::model::Policy;
use crate::model::Subprocessor;
use crate::model::Theme;
use crate::model::TrustCenterConfig;
use crate::model::UpdateEntry;
use crate::sections::DEFAULT_SECTION_ORDER;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Trust center parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// YAML text is not well-formed.
    #[error("{0}")]
    Syntax(String),
    /// YAML uses features outside the JSON-compatible subset.
    #[error("{0}")]
    Unsupported(String),
    /// Document does not satisfy the configuration schema.
    #[error("{0}")]
    Invalid(ValidationReport),
}

// ============================================================================
// SECTION: Entry Points
// ============================================================================

/// Parses and validates a trust center YAML document.
///
/// # Errors
///
/// Returns [`ParseError`] when the YAML is malformed, uses unsupported
/// features, or fails schema validation.
pub fn parse_trust_center(yaml: &str) -> Result<TrustCenterConfig, ParseError> {
    let tree = yaml_to_value(yaml)?;
    decode_trust_center(&tree).map_err(ParseError::Invalid)
}

/// Reads YAML text into a JSON-compatible tree.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] for malformed YAML and
/// [`ParseError::Unsupported`] for tags, non-finite numbers, or complex keys.
pub fn yaml_to_value(yaml: &str) -> Result<Value, ParseError> {
    if yaml.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    let document: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|err| ParseError::Syntax(err.to_string()))?;
    match convert_node(document, &FieldPath::root())? {
        Value::Null => Ok(Value::Object(Map::new())),
        tree => Ok(tree),
    }
}

/// Decodes a JSON-compatible tree into a validated configuration.
///
/// # Errors
///
/// Returns [`ValidationReport`] listing every schema violation.
pub fn decode_trust_center(tree: &Value) -> Result<TrustCenterConfig, ValidationReport> {
    let mut decoder = Decoder::new();
    let root = FieldPath::root();
    let config = match decoder.expect_object(tree, &root) {
        Some(object) => decode_root(&mut decoder, object, &root),
        None => placeholder_config(),
    };
    decoder.finish(config)
}

// ============================================================================
// SECTION: YAML Conversion
// ============================================================================

/// Converts a YAML node into a JSON value.
fn convert_node(node: serde_yaml::Value, path: &FieldPath) -> Result<Value, ParseError> {
    match node {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(flag) => Ok(Value::Bool(flag)),
        serde_yaml::Value::Number(number) => convert_number(&number, path).map(Value::Number),
        serde_yaml::Value::String(text) => Ok(Value::String(text)),
        serde_yaml::Value::Sequence(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| convert_node(item, &path.index(index)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(mapping) => {
            let mut object = Map::new();
            for (key, value) in mapping {
                let key = convert_key(&key, path)?;
                let child = path.key(&key);
                object.insert(key, convert_node(value, &child)?);
            }
            Ok(Value::Object(object))
        }
        serde_yaml::Value::Tagged(tagged) => Err(ParseError::Unsupported(format!(
            "{path}: YAML tag {} is not supported",
            tagged.tag
        ))),
    }
}

/// Converts a YAML number into a JSON number.
fn convert_number(
    number: &serde_yaml::Number,
    path: &FieldPath,
) -> Result<serde_json::Number, ParseError> {
    if let Some(value) = number.as_u64() {
        return Ok(value.into());
    }
    if let Some(value) = number.as_i64() {
        return Ok(value.into());
    }
    number.as_f64().and_then(serde_json::Number::from_f64).ok_or_else(|| {
        ParseError::Unsupported(format!("{path}: non-finite numbers are not supported"))
    })
}

/// Converts a scalar YAML mapping key into a string key.
fn convert_key(key: &serde_yaml::Value, path: &FieldPath) -> Result<String, ParseError> {
    match key {
        serde_yaml::Value::String(text) => Ok(text.clone()),
        serde_yaml::Value::Bool(flag) => Ok(flag.to_string()),
        serde_yaml::Value::Number(number) => Ok(number.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Sequence(_)
        | serde_yaml::Value::Mapping(_)
        | serde_yaml::Value::Tagged(_) => Err(ParseError::Unsupported(format!(
            "{path}: mapping keys must be scalars"
        ))),
    }
}

// ============================================================================
// SECTION: Schema Decoding
// ============================================================================

/// Returns a placeholder used when the root is not a mapping.
fn placeholder_config() -> TrustCenterConfig {
    TrustCenterConfig {
        theme: Theme::default(),
        subprocessors_link: None,
        company: Company::default(),
        hero: Hero::default(),
        metrics: None,
        compliance: None,
        infrastructure: None,
        documents: None,
        policies: None,
        monitoring: None,
        updates: None,
        contacts: None,
        faqs: None,
        subprocessors: None,
        layout: None,
        sections: None,
    }
}

/// Decodes the root mapping.
///
/// Fields are decoded in schema declaration order, which is also the order
/// of the joined issues.
fn decode_root(
    decoder: &mut Decoder,
    object: &Map<String, Value>,
    path: &FieldPath,
) -> TrustCenterConfig {
    TrustCenterConfig {
        theme: decoder.enumeration(
            object,
            "theme",
            path,
            &Theme::VALUES,
            Theme::from_label,
            Theme::Light,
        ),
        subprocessors_link: decoder.optional_url(object, "subprocessorsLink", path),
        layout: decoder.optional_record(object, "layout", path, decode_layout),
        company: decoder
            .required_record(object, "company", path, decode_company)
            .unwrap_or_default(),
        hero: decoder.optional_record(object, "hero", path, decode_hero).unwrap_or_default(),
        metrics: decoder.optional_list(object, "metrics", path, decode_metric),
        compliance: decoder.optional_list(object, "compliance", path, decode_compliance),
        documents: decoder.optional_list(object, "documents", path, decode_document),
        policies: decoder.optional_list(object, "policies", path, decode_policy),
        infrastructure: decoder.optional_record(
            object,
            "infrastructure",
            path,
            decode_infrastructure,
        ),
        monitoring: decoder.optional_record(object, "monitoring", path, decode_monitoring),
        contacts: decoder.optional_record(object, "contacts", path, decode_contacts),
        faqs: decoder.optional_list(object, "faqs", path, decode_faq),
        subprocessors: decoder.optional_list(object, "subprocessors", path, decode_subprocessor),
        updates: decoder.optional_list(object, "updates", path, decode_update),
        sections: decoder.optional_string_list(object, "sections", path),
    }
}

/// Decodes the company block.
fn decode_company(decoder: &mut Decoder, object: &Map<String, Value>, path: &FieldPath) -> Company {
    Company {
        name: decoder.required_string(object, "name", path),
        tagline: decoder.required_string(object, "tagline", path),
        description: decoder.required_string(object, "description", path),
        website: decoder.optional_string(object, "website", path),
        logo: decoder.optional_string(object, "logo", path),
        headquarters: decoder.optional_string(object, "headquarters", path),
        trust_lead: decoder.optional_string(object, "trustLead", path),
    }
}

/// Decodes the hero block.
fn decode_hero(decoder: &mut Decoder, object: &Map<String, Value>, path: &FieldPath) -> Hero {
    Hero {
        status_message: decoder.optional_string(object, "statusMessage", path),
        last_update: decoder.optional_string(object, "lastUpdate", path),
        commitments: decoder.string_list(object, "commitments", path),
    }
}

/// Decodes a metric entry.
fn decode_metric(decoder: &mut Decoder, object: &Map<String, Value>, path: &FieldPath) -> Metric {
    Metric {
        label: decoder.required_string(object, "label", path),
        value: decoder.required_string(object, "value", path),
        caption: decoder.optional_string(object, "caption", path),
    }
}

/// Decodes a compliance entry.
fn decode_compliance(
    decoder: &mut Decoder,
    object: &Map<String, Value>,
    path: &FieldPath,
) -> ComplianceItem {
    let name = decoder.required_string(object, "name", path);
    let status = decoder.required_string(object, "status", path);
    let year = match object.get("year") {
        None => None,
        Some(Value::String(text)) => Some(AuditYear::Text(text.clone())),
        Some(Value::Number(number)) => Some(AuditYear::Number(number.clone())),
        Some(_) => {
            decoder.report(&path.key("year"), "Invalid input");
            None
        }
    };
    ComplianceItem {
        name,
        status,
        year,
        scope: decoder.optional_string(object, "scope", path),
        badge: decoder.optional_string(object, "badge", path),
    }
}

/// Decodes a document entry.
fn decode_document(
    decoder: &mut Decoder,
    object: &Map<String, Value>,
    path: &FieldPath,
) -> DocumentEntry {
    DocumentEntry {
        name: decoder.required_string(object, "name", path),
        description: decoder.required_string(object, "description", path),
        category: decoder.required_string(object, "category", path),
        access: decoder.enumeration(
            object,
            "access",
            path,
            &DocumentAccess::VALUES,
            DocumentAccess::from_label,
            DocumentAccess::Request,
        ),
        tags: decoder.string_list(object, "tags", path),
        url: decoder.optional_string(object, "url", path),
        updated_at: decoder.optional_string(object, "updatedAt", path),
    }
}

/// Decodes a policy entry.
fn decode_policy(decoder: &mut Decoder, object: &Map<String, Value>, path: &FieldPath) -> Policy {
    Policy {
        name: decoder.required_string(object, "name", path),
        owner: decoder.optional_string(object, "owner", path),
        coverage: decoder.optional_string(object, "coverage", path),
        cadence: decoder.optional_string(object, "cadence", path),
    }
}

/// Decodes the infrastructure block.
fn decode_infrastructure(
    decoder: &mut Decoder,
    object: &Map<String, Value>,
    path: &FieldPath,
) -> Infrastructure {
    Infrastructure {
        hosting: decoder.optional_string(object, "hosting", path),
        data_residency: decoder.string_list(object, "dataResidency", path),
        data_centers: decoder.string_list(object, "dataCenters", path),
        encryption: decoder.optional_string(object, "encryption", path),
        retention: decoder.optional_string(object, "retention", path),
        backups: decoder.optional_string(object, "backups", path),
    }
}

/// Decodes the monitoring block.
fn decode_monitoring(
    decoder: &mut Decoder,
    object: &Map<String, Value>,
    path: &FieldPath,
) -> Monitoring {
    Monitoring {
        status_page: decoder.optional_string(object, "statusPage", path),
        incident_history: decoder.list(object, "incidentHistory", path, |decoder, entry, path| {
            Incident {
                date: decoder.required_string(entry, "date", path),
                summary: decoder.required_string(entry, "summary", path),
                impact: decoder.required_string(entry, "impact", path),
            }
        }),
    }
}

/// Decodes an update entry.
fn decode_update(
    decoder: &mut Decoder,
    object: &Map<String, Value>,
    path: &FieldPath,
) -> UpdateEntry {
    UpdateEntry {
        date: decoder.required_string(object, "date", path),
        title: decoder.required_string(object, "title", path),
        summary: decoder.required_string(object, "summary", path),
    }
}

/// Decodes the contacts block.
fn decode_contacts(
    decoder: &mut Decoder,
    object: &Map<String, Value>,
    path: &FieldPath,
) -> Contacts {
    Contacts {
        email: decoder.required_email(object, "email", path),
        sla: decoder.required_string(object, "sla", path),
        phone: decoder.optional_string(object, "phone", path),
        office_hours: decoder.optional_string(object, "officeHours", path),
    }
}

/// Decodes a FAQ entry.
fn decode_faq(decoder: &mut Decoder, object: &Map<String, Value>, path: &FieldPath) -> Faq {
    Faq {
        question: decoder.required_string(object, "question", path),
        answer: decoder.required_string(object, "answer", path),
    }
}

/// Decodes a subprocessor entry.
fn decode_subprocessor(
    decoder: &mut Decoder,
    object: &Map<String, Value>,
    path: &FieldPath,
) -> Subprocessor {
    Subprocessor {
        name: decoder.required_string(object, "name", path),
        category: decoder.required_string(object, "category", path),
        location: decoder.required_string(object, "location", path),
        logo: decoder.optional_string(object, "logo", path),
        description: decoder.optional_string(object, "description", path),
    }
}

/// Decodes layout overrides in layout schema order; unknown keys are dropped.
fn decode_layout(decoder: &mut Decoder, object: &Map<String, Value>, path: &FieldPath) -> Layout {
    let mut layout = Layout::new();
    for section in DEFAULT_SECTION_ORDER {
        let key = section.as_str();
        let Some(value) = object.get(key) else {
            continue;
        };
        if let Some(span) =
            decoder.enum_value(value, &path.key(key), &LayoutSpan::VALUES, LayoutSpan::from_label)
        {
            layout.insert(section, span);
        }
    }
    layout
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
