// crates/trust-center-core/src/template.rs
// ============================================================================
// Module: Default Trust Center Template
// Description: Built-in YAML document used to seed and recover the page.
// Purpose: Provide the fallback configuration when nothing valid is stored.
// Dependencies: crate::parse
// ============================================================================

//! ## Overview
//! [`DEFAULT_TRUST_YAML`] is served when no configuration has been saved and
//! is the fallback when stored YAML fails to parse. It must always parse; the
//! service checks this once at construction and refuses to start otherwise.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::model::TrustCenterConfig;
use crate::parse::ParseError;
use crate::parse::parse_trust_center;

// ============================================================================
// SECTION: Template
// ============================================================================

/// Default trust center YAML document.
pub const DEFAULT_TRUST_YAML: &str = r#"theme: light
subprocessorsLink: https://eztrust.security/subprocessors
company:
  name: EzTrust
  tagline: Fast trust for revenue teams
  description: Centralize audits, policies, and evidence inside a single YAML-powered trust center.
  website: https://eztrust.security
  headquarters: Sao Paulo, Brazil
  trustLead: Laura Ribeiro
hero:
  statusMessage: Latest SOC 2 Type II audit completed May/2024.
  lastUpdate: 2024-06-12
  commitments:
    - Quarterly external pen-tests with Conviso
    - Daily backups with 35-day retention
metrics:
  - label: Uptime
    value: 99.98%
    caption: last 12 months
  - label: Customers
    value: 320+
    caption: scale-ups and fintechs across Brazil and the US
  - label: Security team
    value: 6 people
    caption: includes GRC, AppSec, and SecOps
compliance:
  - name: SOC 2 Type II
    status: Certified
    year: 2024
    scope: Security & Availability
  - name: ISO 27001
    status: Certified
    year: 2023
    scope: Global operations
  - name: LGPD
    status: Aligned
    scope: Data processor commitments
infrastructure:
  hosting: AWS (Control Tower hardened org)
  dataResidency:
    - us-east-1
    - sa-east-1
  dataCenters:
    - Equinix SP
    - AWS North Virginia
  encryption: AES-256 at rest + TLS 1.3 in transit
  retention: Audit logs retained for 400 days
  backups: Continuous snapshots with weekly restore tests
documents:
  - name: SOC 2 report
    description: Executive summary plus independent auditor letter.
    category: Audits
    access: request
    tags:
      - Confidential
    updatedAt: 2024-05-18
  - name: ISO 27001 SoA
    description: Statement of applicability with implemented controls.
    category: Certifications
    access: request
    tags:
      - NDA
    updatedAt: 2024-02-05
  - name: Security overview
    description: Technical control overview for prospects.
    category: Overview
    access: public
    url: https://status.eztrust/security-guide.pdf
    tags:
      - Public
policies:
  - name: Logical Access Policy
    owner: Security Ops
    coverage: SSO everywhere plus enforced MFA
    cadence: Reviewed quarterly
  - name: Incident Management
    owner: GRC
    coverage: Four severity levels with RACI defined
    cadence: Bi-monthly tabletop exercises
monitoring:
  statusPage: https://status.eztrust/security
  incidentHistory:
    - date: 2024-03-11
      summary: Partial outage on the audit webhook
      impact: No data loss. Timeout increased and workers tuned.
updates:
  - date: 2024-06-06
    title: New CAIQ questionnaire
    summary: Custom fintech-ready version now available.
  - date: 2024-05-20
    title: Expanded to sa-east-1
    summary: Brazilian customer data can stay in-country.
contacts:
  email: trust@eztrust.com
  sla: 1 business day
  phone: +55 11 99999-9999
  officeHours: 9am to 6pm BRT
faqs:
  - question: Do you sign DPAs or SCCs?
    answer: Yes, we have pre-approved templates and sign via DocuSign within 2 business days.
  - question: Do you run a bug bounty?
    answer: We have a private HackerOne program live since 2022.
subprocessors:
  - name: AWS
    category: IT infrastructure
    location: United States of America
    logo: https://upload.wikimedia.org/wikipedia/commons/9/93/Amazon_Web_Services_Logo.svg
    description: Primary cloud provider (Control Tower hardened org).
  - name: Datadog
    category: Monitoring and observability
    location: United States of America
    logo: https://upload.wikimedia.org/wikipedia/en/3/3b/Datadog_logo.svg
    description: SaaS monitoring platform for logs, metrics, and traces.
  - name: OpenAI
    category: Artificial Intelligence
    location: United States of America
    logo: https://upload.wikimedia.org/wikipedia/commons/0/04/OpenAI_Logo.svg
    description: Model inference for trust center assistant features.
"#;

/// Parses the default template.
///
/// # Errors
///
/// Returns [`ParseError`] when the built-in template is invalid.
pub fn default_config() -> Result<TrustCenterConfig, ParseError> {
    parse_trust_center(DEFAULT_TRUST_YAML)
}
