// crates/trust-center-core/src/model.rs
// ============================================================================
// Module: Trust Center Configuration Model
// Description: Typed records for a validated trust center configuration.
// Purpose: Provide the canonical in-memory shape produced by the parser.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`TrustCenterConfig`] is the fully validated form of a trust center YAML
//! document. Defaults are already applied: list fields that carry defaults are
//! plain vectors, while optional lists stay `Option` because an absent list
//! hides its section and an empty list renders it with an empty-state message.
//!
//! The records serialize back to the camelCase key names used in YAML so a
//! parsed configuration can be written out and parsed again unchanged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;

// ============================================================================
// SECTION: Root Configuration
// ============================================================================

/// Validated trust center configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustCenterConfig {
    /// Page theme.
    pub theme: Theme,
    /// Optional link to the full subprocessor list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subprocessors_link: Option<String>,
    /// Company identity block.
    pub company: Company,
    /// Hero banner content.
    pub hero: Hero,
    /// Headline metrics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<Metric>>,
    /// Compliance certifications and frameworks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance: Option<Vec<ComplianceItem>>,
    /// Infrastructure facts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<Infrastructure>,
    /// Published documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<DocumentEntry>>,
    /// Security policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<Policy>>,
    /// Monitoring and incident history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<Monitoring>,
    /// Announcements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updates: Option<Vec<UpdateEntry>>,
    /// Trust team contact details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Contacts>,
    /// Frequently asked questions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<Faq>>,
    /// Third-party subprocessors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subprocessors: Option<Vec<Subprocessor>>,
    /// Per-section span overrides, in layout schema order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    /// Explicit section order; unknown names are ignored when ordering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<String>>,
}

/// Page color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Accepted YAML values, in declaration order.
    pub const VALUES: [&'static str; 2] = ["light", "dark"];

    /// Parses a theme label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: Identity & Hero
// ============================================================================

/// Company identity block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Company display name.
    pub name: String,
    /// Short tagline.
    pub tagline: String,
    /// Longer description, also used as page description.
    pub description: String,
    /// Company website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Logo URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Headquarters location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<String>,
    /// Name of the trust lead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_lead: Option<String>,
}

/// Hero banner content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    /// Status message shown under the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    /// Last update label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
    /// Security commitments.
    pub commitments: Vec<String>,
}

/// Headline metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    /// Metric label.
    pub label: String,
    /// Metric value.
    pub value: String,
    /// Optional caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

// ============================================================================
// SECTION: Section Records
// ============================================================================

/// Compliance certification or framework entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceItem {
    /// Framework name.
    pub name: String,
    /// Certification status.
    pub status: String,
    /// Audit year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<AuditYear>,
    /// Certification scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Badge image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// Audit year given either as text or as a number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AuditYear {
    /// Free-form year text.
    Text(String),
    /// Numeric year.
    Number(serde_json::Number),
}

impl fmt::Display for AuditYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Document access mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentAccess {
    /// Freely downloadable.
    Public,
    /// Gated behind an access request.
    #[default]
    Request,
}

impl DocumentAccess {
    /// Accepted YAML values, in declaration order.
    pub const VALUES: [&'static str; 2] = ["public", "request"];

    /// Parses an access label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "public" => Some(Self::Public),
            "request" => Some(Self::Request),
            _ => None,
        }
    }
}

/// Published document entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEntry {
    /// Document name.
    pub name: String,
    /// Document description.
    pub description: String,
    /// Document category.
    pub category: String,
    /// Access mode.
    pub access: DocumentAccess,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Download URL for public documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Last update label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Security policy entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Policy {
    /// Policy name.
    pub name: String,
    /// Owning team.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Coverage summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<String>,
    /// Review cadence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadence: Option<String>,
}

/// Announcement entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateEntry {
    /// Date label.
    pub date: String,
    /// Headline.
    pub title: String,
    /// Summary text.
    pub summary: String,
}

/// Frequently asked question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faq {
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
}

/// Third-party subprocessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subprocessor {
    /// Vendor name.
    pub name: String,
    /// Vendor category.
    pub category: String,
    /// Processing location.
    pub location: String,
    /// Logo URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Vendor description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Infrastructure facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Infrastructure {
    /// Hosting provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosting: Option<String>,
    /// Data residency regions.
    pub data_residency: Vec<String>,
    /// Data center names.
    pub data_centers: Vec<String>,
    /// Encryption summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<String>,
    /// Retention summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<String>,
    /// Backup summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backups: Option<String>,
}

impl Infrastructure {
    /// Returns true when at least one infrastructure fact is populated.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.hosting.is_some()
            || self.encryption.is_some()
            || self.retention.is_some()
            || self.backups.is_some()
            || !self.data_residency.is_empty()
            || !self.data_centers.is_empty()
    }
}

/// Monitoring block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Monitoring {
    /// Public status page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_page: Option<String>,
    /// Past incidents.
    pub incident_history: Vec<Incident>,
}

impl Monitoring {
    /// Returns true when a status page or incident history is available.
    #[must_use]
    pub const fn has_content(&self) -> bool {
        self.status_page.is_some() || !self.incident_history.is_empty()
    }
}

/// Past incident record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Incident {
    /// Incident date label.
    pub date: String,
    /// Incident summary.
    pub summary: String,
    /// Impact description.
    pub impact: String,
}

/// Trust team contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contacts {
    /// Contact email.
    pub email: String,
    /// Response time commitment.
    pub sla: String,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Office hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_hours: Option<String>,
}

// ============================================================================
// SECTION: Sections & Layout
// ============================================================================

/// Identifier of a renderable trust center section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    /// Documents section.
    Documents,
    /// Compliance section.
    Compliance,
    /// Policies section.
    Policies,
    /// Infrastructure section.
    Infrastructure,
    /// Monitoring section.
    Monitoring,
    /// Updates section.
    Updates,
    /// FAQs section.
    Faqs,
    /// Subprocessors section.
    Subprocessors,
    /// Contacts section.
    Contacts,
}

impl SectionKey {
    /// Returns the YAML key for the section.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Documents => "documents",
            Self::Compliance => "compliance",
            Self::Policies => "policies",
            Self::Infrastructure => "infrastructure",
            Self::Monitoring => "monitoring",
            Self::Updates => "updates",
            Self::Faqs => "faqs",
            Self::Subprocessors => "subprocessors",
            Self::Contacts => "contacts",
        }
    }

    /// Parses a section key; unknown names yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "documents" => Some(Self::Documents),
            "compliance" => Some(Self::Compliance),
            "policies" => Some(Self::Policies),
            "infrastructure" => Some(Self::Infrastructure),
            "monitoring" => Some(Self::Monitoring),
            "updates" => Some(Self::Updates),
            "faqs" => Some(Self::Faqs),
            "subprocessors" => Some(Self::Subprocessors),
            "contacts" => Some(Self::Contacts),
            _ => None,
        }
    }

    /// Position of the section within the `layout` mapping schema.
    #[must_use]
    pub const fn layout_rank(self) -> u8 {
        match self {
            Self::Compliance => 0,
            Self::Policies => 1,
            Self::Documents => 2,
            Self::Infrastructure => 3,
            Self::Monitoring => 4,
            Self::Updates => 5,
            Self::Faqs => 6,
            Self::Subprocessors => 7,
            Self::Contacts => 8,
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Width a section occupies in the two-column grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutSpan {
    /// Spans both columns.
    Full,
    /// Spans one column.
    Half,
}

impl LayoutSpan {
    /// Accepted YAML values, in declaration order.
    pub const VALUES: [&'static str; 2] = ["full", "half"];

    /// Parses a span label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "full" => Some(Self::Full),
            "half" => Some(Self::Half),
            _ => None,
        }
    }
}

/// Span overrides keyed by section.
///
/// # Invariants
/// - Each section key appears at most once.
/// - Entries are kept in layout schema order (compliance, policies,
///   documents, infrastructure, monitoring, updates, faqs, subprocessors,
///   contacts) regardless of the order they were written in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    /// Ordered overrides.
    entries: Vec<(SectionKey, LayoutSpan)>,
}

impl Layout {
    /// Creates an empty layout.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets a span override; a repeated key replaces the earlier span.
    pub fn insert(&mut self, key: SectionKey, span: LayoutSpan) {
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            entry.1 = span;
            return;
        }
        let rank = key.layout_rank();
        let index = self
            .entries
            .iter()
            .position(|(existing, _)| existing.layout_rank() > rank)
            .unwrap_or(self.entries.len());
        self.entries.insert(index, (key, span));
    }

    /// Returns the span override for a section.
    #[must_use]
    pub fn span(&self, key: SectionKey) -> Option<LayoutSpan> {
        self.entries.iter().find(|(existing, _)| *existing == key).map(|(_, span)| *span)
    }

    /// Returns the overridden section keys in layout schema order.
    pub fn keys(&self) -> impl Iterator<Item = SectionKey> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Returns true when no overrides are set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Layout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, span) in &self.entries {
            map.serialize_entry(key.as_str(), span)?;
        }
        map.end()
    }
}
