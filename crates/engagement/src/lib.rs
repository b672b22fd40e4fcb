//! Engagement scoring pipeline for the Meridian CRM engine.
//!
//! Three stages, all pure functions over read-only snapshots:
//!
//! 1. [`compute_metrics`] derives [`EngagementMetrics`] from a contact's
//!    deal and activity history.
//! 2. The scoring engine evaluates an ordered, immutable rule table over
//!    the input and produces a clamped score, a priority tier, and one
//!    reason per fired rule. Two profiles exist: [`score_lead`] for raw
//!    signal bundles and [`score_contact`] for resolved contacts.
//! 3. The recommendation stage appends priority-driven closing actions.
//!
//! Scoring never fails: absent or null inputs mean a rule does not fire,
//! never an error.
//!
//! [`EngagementMetrics`]: crm_core::EngagementMetrics

mod contact;
mod lead;
mod metrics;
mod recommend;
mod rules;

pub use contact::{contact_priority, score_contact, ContactContext};
pub use lead::{lead_priority, score_lead, LeadSignals};
pub use metrics::compute_metrics;
pub use rules::{evaluate, Evaluation, Rule};
