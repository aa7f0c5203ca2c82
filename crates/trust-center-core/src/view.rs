// crates/trust-center-core/src/view.rs
// ============================================================================
// Module: Trust Center Render Descriptions
// Description: Pure render models for the public trust center page.
// Purpose: Describe what each section shows, independent of presentation.
// Dependencies: serde, crate::model, crate::sections
// ============================================================================

//! ## Overview
//! Each of the nine sections maps to one [`SectionView`] variant built from
//! its slice of the configuration. Views carry display strings (titles,
//! labels, empty-state copy) but no styling. [`build_page`] combines the page
//! header with the ordered section plan from [`crate::sections`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::model::Company;
use crate::model::DocumentAccess;
use crate::model::DocumentEntry;
use crate::model::LayoutSpan;
use crate::model::Metric;
use crate::model::SectionKey;
use crate::model::Subprocessor;
use crate::model::Theme;
use crate::model::TrustCenterConfig;
use crate::sections::resolve_sections;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Empty-state copy for the compliance section.
const COMPLIANCE_EMPTY: &str = "No certifications listed yet.";
/// Empty-state copy for the policies section.
const POLICIES_EMPTY: &str = "List key policies in the YAML file to showcase them here.";
/// Empty-state copy for the documents section.
const DOCUMENTS_EMPTY: &str = "Add documents via YAML to enable this list.";
/// Empty-state copy for the monitoring section.
const MONITORING_EMPTY: &str = "No incidents recorded in the past months.";
/// Empty-state copy for the updates section.
const UPDATES_EMPTY: &str = "Use the updates field in your YAML to publish announcements.";
/// Empty-state copy for the FAQ section.
const FAQS_EMPTY: &str = "Add frequently asked questions to reduce back-and-forth with sales.";
/// Empty-state copy for the subprocessors section.
const SUBPROCESSORS_EMPTY: &str =
    "Keep your subprocessors list up to date to increase trust with prospects.";
/// Fallback shown when a policy has no coverage text.
const COVERAGE_FALLBACK: &str = "Coverage not provided";

// ============================================================================
// SECTION: Page
// ============================================================================

/// Render description of the public trust center page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustCenterPage {
    /// Page theme.
    pub theme: Theme,
    /// Visible heading, `<name> Trust Center`.
    pub title: String,
    /// Document title, `<name> | Trust Center`.
    pub meta_title: String,
    /// Page description.
    pub description: String,
    /// Company identity.
    pub company: Company,
    /// Hero banner.
    pub hero: HeroView,
    /// Headline metrics.
    pub metrics: Vec<Metric>,
    /// Sections in render order.
    pub sections: Vec<SectionBlock>,
}

/// Hero banner description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    /// Status message.
    pub status_message: Option<String>,
    /// Badge text, `Updated on <date>`.
    pub updated_label: Option<String>,
    /// Security commitments.
    pub commitments: Vec<String>,
}

/// A placed section with its render description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBlock {
    /// Section identifier.
    pub key: SectionKey,
    /// Grid span.
    pub span: LayoutSpan,
    /// Section content.
    pub view: SectionView,
}

/// Builds the full page description for a configuration.
#[must_use]
pub fn build_page(config: &TrustCenterConfig) -> TrustCenterPage {
    let name = &config.company.name;
    let sections = resolve_sections(config)
        .into_iter()
        .filter_map(|section| {
            build_section(config, section.key).map(|view| SectionBlock {
                key: section.key,
                span: section.span,
                view,
            })
        })
        .collect();
    TrustCenterPage {
        theme: config.theme,
        title: format!("{name} Trust Center"),
        meta_title: format!("{name} | Trust Center"),
        description: config.company.description.clone(),
        company: config.company.clone(),
        hero: HeroView {
            status_message: config.hero.status_message.clone(),
            updated_label: config
                .hero
                .last_update
                .as_ref()
                .map(|date| format!("Updated on {date}")),
            commitments: config.hero.commitments.clone(),
        },
        metrics: config.metrics.clone().unwrap_or_default(),
        sections,
    }
}

// ============================================================================
// SECTION: Section Views
// ============================================================================

/// Render description of one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SectionView {
    /// Certifications and frameworks.
    Compliance(ListView<ComplianceCard>),
    /// Policies and controls.
    Policies(ListView<PolicyCard>),
    /// Published documents.
    Documents(ListView<DocumentCard>),
    /// Infrastructure facts.
    Infrastructure(InfrastructureView),
    /// Monitoring and incident history.
    Monitoring(MonitoringView),
    /// Announcements.
    Updates(ListView<UpdateCard>),
    /// Frequently asked questions.
    Faqs(ListView<FaqCard>),
    /// Third-party vendors.
    Subprocessors(SubprocessorsView),
    /// Trust team contacts.
    Contacts(ContactsView),
}

/// Titled list of cards with optional empty-state copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView<T> {
    /// Section title.
    pub title: String,
    /// Cards in configuration order.
    pub items: Vec<T>,
    /// Copy shown when `items` is empty.
    pub empty_state: Option<String>,
}

impl<T> ListView<T> {
    /// Builds a list view, attaching `empty` copy when there are no items.
    fn new(title: &str, items: Vec<T>, empty: &str) -> Self {
        let empty_state = items.is_empty().then(|| empty.to_string());
        Self {
            title: title.to_string(),
            items,
            empty_state,
        }
    }
}

/// Compliance card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceCard {
    /// Framework name.
    pub name: String,
    /// Status badge text.
    pub status: String,
    /// `Scope: <scope>` line.
    pub scope: Option<String>,
    /// `Audit year: <year>` line.
    pub audit_year: Option<String>,
    /// Badge image URL.
    pub badge: Option<String>,
}

/// Policy card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyCard {
    /// Policy name.
    pub name: String,
    /// Owning team.
    pub owner: Option<String>,
    /// Coverage text, with a fallback when missing.
    pub coverage: String,
    /// `Cadence: <cadence>` line.
    pub cadence: Option<String>,
}

/// Document card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCard {
    /// Document name.
    pub name: String,
    /// Document description.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Access badge, `Request only` or `Public`.
    pub access_label: String,
    /// Tags.
    pub tags: Vec<String>,
    /// `Updated on <date>` line.
    pub updated_label: Option<String>,
    /// Primary action.
    pub action: DocumentAction,
}

/// Action offered for a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DocumentAction {
    /// Opens the access request dialog for the named document.
    Request {
        /// Button label.
        label: String,
        /// Document name to prefill.
        document: String,
    },
    /// Links to the public document.
    Link {
        /// Button label.
        label: String,
        /// Document URL.
        url: String,
    },
    /// Public document without a URL.
    Unavailable {
        /// Button label.
        label: String,
    },
}

/// Labelled infrastructure fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fact {
    /// Fact label.
    pub label: String,
    /// Fact value.
    pub value: String,
}

/// Infrastructure section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfrastructureView {
    /// Section title.
    pub title: String,
    /// Populated facts in display order.
    pub facts: Vec<Fact>,
}

/// Monitoring section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringView {
    /// Section title.
    pub title: String,
    /// Status page link.
    pub status_page: Option<String>,
    /// Past incidents.
    pub incidents: Vec<IncidentCard>,
    /// Copy shown when there are no incidents.
    pub empty_state: Option<String>,
}

/// Incident card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidentCard {
    /// Incident summary.
    pub summary: String,
    /// Date followed by the impact statement.
    pub detail: String,
}

/// Update card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCard {
    /// Date label.
    pub date: String,
    /// Headline.
    pub title: String,
    /// Summary.
    pub summary: String,
}

/// FAQ card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqCard {
    /// Question.
    pub question: String,
    /// Answer.
    pub answer: String,
}

/// Subprocessors section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubprocessorsView {
    /// Section title, with a count suffix when vendors are listed.
    pub title: String,
    /// Link to the full list.
    pub details_link: Option<String>,
    /// Vendors.
    pub vendors: Vec<VendorCard>,
    /// Copy shown when no vendors are listed.
    pub empty_state: Option<String>,
}

/// Subprocessor card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorCard {
    /// Vendor name.
    pub name: String,
    /// Vendor category.
    pub category: String,
    /// Processing location.
    pub location: String,
    /// Logo URL.
    pub logo: Option<String>,
    /// Initials shown when there is no logo.
    pub initials: String,
    /// Vendor description.
    pub description: Option<String>,
}

/// Contacts section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactsView {
    /// Section title.
    pub title: String,
    /// `<email> (SLA <sla>)` line.
    pub headline: String,
    /// Contact email.
    pub email: String,
    /// Response time commitment.
    pub sla: String,
    /// Phone number.
    pub phone: Option<String>,
    /// `Office hours: <hours>` line.
    pub office_hours: Option<String>,
}

// ============================================================================
// SECTION: Builders
// ============================================================================

/// Builds the view for one section, or `None` when its data is absent.
#[must_use]
pub fn build_section(config: &TrustCenterConfig, key: SectionKey) -> Option<SectionView> {
    match key {
        SectionKey::Compliance => config.compliance.as_ref().map(|items| {
            let cards = items
                .iter()
                .map(|item| ComplianceCard {
                    name: item.name.clone(),
                    status: item.status.clone(),
                    scope: item.scope.as_ref().map(|scope| format!("Scope: {scope}")),
                    audit_year: item.year.as_ref().map(|year| format!("Audit year: {year}")),
                    badge: item.badge.clone(),
                })
                .collect();
            SectionView::Compliance(ListView::new(
                "Certifications & compliance",
                cards,
                COMPLIANCE_EMPTY,
            ))
        }),
        SectionKey::Policies => config.policies.as_ref().map(|items| {
            let cards = items
                .iter()
                .map(|policy| PolicyCard {
                    name: policy.name.clone(),
                    owner: policy.owner.clone(),
                    coverage: policy
                        .coverage
                        .clone()
                        .unwrap_or_else(|| COVERAGE_FALLBACK.to_string()),
                    cadence: policy.cadence.as_ref().map(|cadence| format!("Cadence: {cadence}")),
                })
                .collect();
            SectionView::Policies(ListView::new("Policies & controls", cards, POLICIES_EMPTY))
        }),
        SectionKey::Documents => config.documents.as_ref().map(|items| {
            let cards = items.iter().map(document_card).collect();
            SectionView::Documents(ListView::new("Available documents", cards, DOCUMENTS_EMPTY))
        }),
        SectionKey::Infrastructure => config.infrastructure.as_ref().map(|infrastructure| {
            let mut facts = Vec::new();
            let labelled = [
                ("Hosting", infrastructure.hosting.clone()),
                ("Encryption", infrastructure.encryption.clone()),
                ("Retention", infrastructure.retention.clone()),
                ("Backups", infrastructure.backups.clone()),
                ("Regions", joined(&infrastructure.data_residency)),
                ("Data centers", joined(&infrastructure.data_centers)),
            ];
            for (label, value) in labelled {
                if let Some(value) = value {
                    facts.push(Fact {
                        label: label.to_string(),
                        value,
                    });
                }
            }
            SectionView::Infrastructure(InfrastructureView {
                title: "Stack & infrastructure".to_string(),
                facts,
            })
        }),
        SectionKey::Monitoring => config.monitoring.as_ref().map(|monitoring| {
            let incidents: Vec<IncidentCard> = monitoring
                .incident_history
                .iter()
                .map(|incident| IncidentCard {
                    summary: incident.summary.clone(),
                    detail: format!("{} — Impact: {}", incident.date, incident.impact),
                })
                .collect();
            SectionView::Monitoring(MonitoringView {
                title: "Monitoring & history".to_string(),
                status_page: monitoring.status_page.clone(),
                empty_state: incidents.is_empty().then(|| MONITORING_EMPTY.to_string()),
                incidents,
            })
        }),
        SectionKey::Updates => config.updates.as_ref().map(|items| {
            let cards = items
                .iter()
                .map(|update| UpdateCard {
                    date: update.date.clone(),
                    title: update.title.clone(),
                    summary: update.summary.clone(),
                })
                .collect();
            SectionView::Updates(ListView::new("Recent updates", cards, UPDATES_EMPTY))
        }),
        SectionKey::Faqs => config.faqs.as_ref().map(|items| {
            let cards = items
                .iter()
                .map(|faq| FaqCard {
                    question: faq.question.clone(),
                    answer: faq.answer.clone(),
                })
                .collect();
            SectionView::Faqs(ListView::new("FAQs", cards, FAQS_EMPTY))
        }),
        SectionKey::Subprocessors => {
            if config.subprocessors.is_none() && config.subprocessors_link.is_none() {
                return None;
            }
            let vendors: Vec<VendorCard> = config
                .subprocessors
                .iter()
                .flatten()
                .map(vendor_card)
                .collect();
            let title = if vendors.is_empty() {
                "Subprocessors".to_string()
            } else {
                format!("Subprocessors ({})", vendors.len())
            };
            Some(SectionView::Subprocessors(SubprocessorsView {
                title,
                details_link: config.subprocessors_link.clone(),
                empty_state: vendors.is_empty().then(|| SUBPROCESSORS_EMPTY.to_string()),
                vendors,
            }))
        }
        SectionKey::Contacts => config.contacts.as_ref().map(|contacts| {
            SectionView::Contacts(ContactsView {
                title: "Trust team".to_string(),
                headline: format!("{} (SLA {})", contacts.email, contacts.sla),
                email: contacts.email.clone(),
                sla: contacts.sla.clone(),
                phone: contacts.phone.clone(),
                office_hours: contacts
                    .office_hours
                    .as_ref()
                    .map(|hours| format!("Office hours: {hours}")),
            })
        }),
    }
}

/// Builds a document card.
fn document_card(document: &DocumentEntry) -> DocumentCard {
    let action = match (document.access, &document.url) {
        (DocumentAccess::Request, _) => DocumentAction::Request {
            label: "Request access".to_string(),
            document: document.name.clone(),
        },
        (DocumentAccess::Public, Some(url)) => DocumentAction::Link {
            label: "Open document".to_string(),
            url: url.clone(),
        },
        (DocumentAccess::Public, None) => DocumentAction::Unavailable {
            label: "Link unavailable".to_string(),
        },
    };
    let access_label = match document.access {
        DocumentAccess::Request => "Request only",
        DocumentAccess::Public => "Public",
    };
    DocumentCard {
        name: document.name.clone(),
        description: document.description.clone(),
        category: document.category.clone(),
        access_label: access_label.to_string(),
        tags: document.tags.clone(),
        updated_label: document.updated_at.as_ref().map(|date| format!("Updated on {date}")),
        action,
    }
}

/// Builds a subprocessor card.
fn vendor_card(vendor: &Subprocessor) -> VendorCard {
    VendorCard {
        name: vendor.name.clone(),
        category: vendor.category.clone(),
        location: vendor.location.clone(),
        logo: vendor.logo.clone(),
        initials: vendor_initials(&vendor.name),
        description: vendor.description.clone(),
    }
}

/// Returns up to two uppercase initials from space-separated words.
#[must_use]
pub fn vendor_initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Joins a non-empty list with `", "`.
fn joined(values: &[String]) -> Option<String> {
    (!values.is_empty()).then(|| values.join(", "))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
