//! Generic lead-intake scoring profile.
//!
//! Scores a loosely-typed signal bundle submitted at the boundary, e.g.
//! from an external form or an e-commerce import. Baseline 0, additive
//! rules, thresholds 70/40.

use serde::Deserialize;
use tracing::debug;

use crm_core::{Priority, ScoreResult};

use crate::recommend;
use crate::rules::{evaluate, Rule};

/// Raw engagement signals for a lead. Every field is optional; missing
/// data simply keeps the corresponding rules from firing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadSignals {
    pub lifecycle_stage: Option<String>,
    pub last_order_amount: Option<f64>,
    pub total_orders: Option<u32>,
    pub email_opens: Option<u32>,
    pub page_views: Option<u32>,
    pub days_since_last_order: Option<i64>,
    pub days_since_last_activity: Option<i64>,
}

const LEAD_RULES: &[Rule<LeadSignals>] = &[
    Rule {
        id: "existing-customer",
        group: Some("lifecycle"),
        delta: 20,
        reason: "Existing customer",
        applies: is_customer,
        action: None,
    },
    Rule {
        id: "potential-lead",
        group: Some("lifecycle"),
        delta: 10,
        reason: "Potential lead",
        applies: is_lead,
        action: None,
    },
    Rule {
        id: "high-value-order",
        group: None,
        delta: 20,
        reason: "High last order amount",
        applies: high_value_order,
        action: None,
    },
    Rule {
        id: "frequent-buyer",
        group: None,
        delta: 15,
        reason: "Long order history",
        applies: frequent_buyer,
        action: None,
    },
    Rule {
        id: "opens-emails",
        group: None,
        delta: 10,
        reason: "Opens emails actively",
        applies: opens_emails,
        action: None,
    },
    Rule {
        id: "visits-site",
        group: None,
        delta: 10,
        reason: "Visits the site often",
        applies: visits_site,
        action: None,
    },
    Rule {
        id: "order-gone-stale",
        group: None,
        delta: -10,
        reason: "Has not ordered in a long time",
        applies: order_gone_stale,
        action: None,
    },
    Rule {
        id: "contact-gone-stale",
        group: None,
        delta: -10,
        reason: "No contact in a long time",
        applies: contact_gone_stale,
        action: None,
    },
];

fn is_customer(signals: &LeadSignals) -> bool {
    signals.lifecycle_stage.as_deref() == Some("customer")
}

fn is_lead(signals: &LeadSignals) -> bool {
    signals.lifecycle_stage.as_deref() == Some("lead")
}

fn high_value_order(signals: &LeadSignals) -> bool {
    signals.last_order_amount.is_some_and(|amount| amount > 200.0)
}

fn frequent_buyer(signals: &LeadSignals) -> bool {
    signals.total_orders.is_some_and(|orders| orders > 5)
}

fn opens_emails(signals: &LeadSignals) -> bool {
    signals.email_opens.is_some_and(|opens| opens > 3)
}

fn visits_site(signals: &LeadSignals) -> bool {
    signals.page_views.is_some_and(|views| views > 5)
}

fn order_gone_stale(signals: &LeadSignals) -> bool {
    signals.days_since_last_order.is_some_and(|days| days > 90)
}

fn contact_gone_stale(signals: &LeadSignals) -> bool {
    signals.days_since_last_activity.is_some_and(|days| days > 60)
}

/// Priority thresholds for the generic profile.
pub fn lead_priority(score: i32) -> Priority {
    if score >= 70 {
        Priority::High
    } else if score >= 40 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Score a raw signal bundle with the generic profile.
pub fn score_lead(signals: &LeadSignals) -> ScoreResult {
    let eval = evaluate(LEAD_RULES, 0, signals);
    let priority = lead_priority(eval.score);

    let mut suggested_actions = eval.actions;
    recommend::close_out_lead(priority, &mut suggested_actions);

    debug!(score = eval.score, ?priority, "scored lead signals");

    ScoreResult {
        score: eval.score,
        priority,
        reasons: eval.reasons,
        suggested_actions,
    }
}
