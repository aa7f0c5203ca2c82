// crates/trust-center-core/src/sections.rs
// ============================================================================
// Module: Section Selection & Ordering
// Description: Decides which sections render, their spans, and their order.
// Purpose: Turn a validated configuration into an ordered section plan.
// Dependencies: crate::model
// ============================================================================

//! ## Overview
//! Selection decides which of the nine sections have something to show and
//! how wide each one is. Ordering then merges five sources of precedence:
//!
//! 1. the explicit `sections` list (unknown names dropped),
//! 2. `layout` keys in layout schema order (the order of
//!    [`DEFAULT_SECTION_ORDER`]), whatever order the YAML wrote them in,
//! 3. section keys present in the configuration, in [`SECTION_KEYS`] order,
//! 4. [`DEFAULT_SECTION_ORDER`],
//! 5. whatever selected sections remain, in construction order.
//!
//! The first occurrence of a key wins and only selected sections are placed,
//! so the result is a permutation of the selection.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::model::Infrastructure;
use crate::model::LayoutSpan;
use crate::model::Monitoring;
use crate::model::SectionKey;
use crate::model::TrustCenterConfig;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Declared section key order.
pub const SECTION_KEYS: [SectionKey; 9] = [
    SectionKey::Documents,
    SectionKey::Compliance,
    SectionKey::Policies,
    SectionKey::Infrastructure,
    SectionKey::Monitoring,
    SectionKey::Updates,
    SectionKey::Faqs,
    SectionKey::Subprocessors,
    SectionKey::Contacts,
];

/// Default render order; also the construction order of selected sections.
pub const DEFAULT_SECTION_ORDER: [SectionKey; 9] = [
    SectionKey::Compliance,
    SectionKey::Policies,
    SectionKey::Documents,
    SectionKey::Infrastructure,
    SectionKey::Monitoring,
    SectionKey::Updates,
    SectionKey::Faqs,
    SectionKey::Subprocessors,
    SectionKey::Contacts,
];

// ============================================================================
// SECTION: Types
// ============================================================================

/// A section chosen for rendering with its resolved span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectedSection {
    /// Section identifier.
    pub key: SectionKey,
    /// Resolved grid span.
    pub span: LayoutSpan,
}

// ============================================================================
// SECTION: Selection
// ============================================================================

/// Returns the span used when the layout does not override a section.
#[must_use]
pub const fn default_span(key: SectionKey) -> LayoutSpan {
    match key {
        SectionKey::Documents | SectionKey::Subprocessors | SectionKey::Contacts => {
            LayoutSpan::Full
        }
        SectionKey::Compliance
        | SectionKey::Policies
        | SectionKey::Infrastructure
        | SectionKey::Monitoring
        | SectionKey::Updates
        | SectionKey::Faqs => LayoutSpan::Half,
    }
}

/// Returns true when the section has something to render.
#[must_use]
pub fn is_section_present(config: &TrustCenterConfig, key: SectionKey) -> bool {
    match key {
        SectionKey::Documents => config.documents.is_some(),
        SectionKey::Compliance => config.compliance.is_some(),
        SectionKey::Policies => config.policies.is_some(),
        SectionKey::Updates => config.updates.is_some(),
        SectionKey::Faqs => config.faqs.is_some(),
        SectionKey::Infrastructure => {
            config.infrastructure.as_ref().is_some_and(Infrastructure::has_content)
        }
        SectionKey::Monitoring => config.monitoring.as_ref().is_some_and(Monitoring::has_content),
        SectionKey::Subprocessors => {
            config.subprocessors.is_some() || config.subprocessors_link.is_some()
        }
        SectionKey::Contacts => config.contacts.is_some(),
    }
}

/// Returns true when the section's own configuration key was provided.
fn has_section_key(config: &TrustCenterConfig, key: SectionKey) -> bool {
    match key {
        SectionKey::Documents => config.documents.is_some(),
        SectionKey::Compliance => config.compliance.is_some(),
        SectionKey::Policies => config.policies.is_some(),
        SectionKey::Infrastructure => config.infrastructure.is_some(),
        SectionKey::Monitoring => config.monitoring.is_some(),
        SectionKey::Updates => config.updates.is_some(),
        SectionKey::Faqs => config.faqs.is_some(),
        SectionKey::Subprocessors => config.subprocessors.is_some(),
        SectionKey::Contacts => config.contacts.is_some(),
    }
}

/// Selects present sections with their spans, in construction order.
#[must_use]
pub fn select_sections(config: &TrustCenterConfig) -> Vec<SelectedSection> {
    DEFAULT_SECTION_ORDER
        .iter()
        .copied()
        .filter(|key| is_section_present(config, *key))
        .map(|key| SelectedSection {
            key,
            span: config
                .layout
                .as_ref()
                .and_then(|layout| layout.span(key))
                .unwrap_or_else(|| default_span(key)),
        })
        .collect()
}

// ============================================================================
// SECTION: Ordering
// ============================================================================

/// Accumulates sections in precedence order without duplicates.
struct OrderMerge<'a> {
    /// Sections eligible for placement.
    selected: &'a [SelectedSection],
    /// Sections placed so far.
    ordered: Vec<SelectedSection>,
}

impl<'a> OrderMerge<'a> {
    /// Starts a merge over the selected sections.
    const fn new(selected: &'a [SelectedSection]) -> Self {
        Self {
            selected,
            ordered: Vec::new(),
        }
    }

    /// Places `key` if it is selected and not yet placed.
    fn push(&mut self, key: SectionKey) {
        if self.ordered.iter().any(|section| section.key == key) {
            return;
        }
        if let Some(section) = self.selected.iter().find(|section| section.key == key) {
            self.ordered.push(*section);
        }
    }

    /// Places every key from `keys` in order.
    fn extend(&mut self, keys: impl IntoIterator<Item = SectionKey>) {
        for key in keys {
            self.push(key);
        }
    }
}

/// Orders selected sections using the five-pass precedence merge.
#[must_use]
pub fn order_sections(
    config: &TrustCenterConfig,
    selected: &[SelectedSection],
) -> Vec<SelectedSection> {
    let mut merge = OrderMerge::new(selected);
    if let Some(sections) = &config.sections {
        merge.extend(sections.iter().filter_map(|name| SectionKey::from_key(name)));
    }
    if let Some(layout) = &config.layout {
        merge.extend(layout.keys());
    }
    merge.extend(SECTION_KEYS.iter().copied().filter(|key| has_section_key(config, *key)));
    merge.extend(DEFAULT_SECTION_ORDER);
    merge.extend(selected.iter().map(|section| section.key));
    merge.ordered
}

/// Selects and orders the sections of a configuration.
#[must_use]
pub fn resolve_sections(config: &TrustCenterConfig) -> Vec<SelectedSection> {
    let selected = select_sections(config);
    order_sections(config, &selected)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
