//! Contact triage scoring profile.
//!
//! Scores a resolved contact together with its deal and activity history
//! and derived metrics. Baseline 50, if/else-if chains expressed as rule
//! groups, thresholds 75/40.

use tracing::debug;

use crm_core::{
    ActivityRecord, ContactSnapshot, DealRecord, DealStage, EngagementMetrics, Priority,
    ScoreResult,
};

use crate::recommend;
use crate::rules::{evaluate, Rule};

/// Everything the contact profile looks at. `activities` must be ordered
/// newest-first; `deals` may arrive in any order.
#[derive(Debug, Clone, Copy)]
pub struct ContactContext<'a> {
    pub contact: &'a ContactSnapshot,
    pub deals: &'a [DealRecord],
    pub activities: &'a [ActivityRecord],
    pub metrics: &'a EngagementMetrics,
}

const BASELINE: i32 = 50;

fn contact_rules<'a>() -> [Rule<ContactContext<'a>>; 12] {
    [
        Rule {
            id: "has-won-deal",
            group: None,
            delta: 20,
            reason: "Has won deals",
            applies: has_won_deal,
            action: None,
        },
        Rule {
            id: "repeat-buyer",
            group: None,
            delta: 10,
            reason: "Has purchased more than once",
            applies: repeat_buyer,
            action: None,
        },
        Rule {
            id: "ordered-recently",
            group: Some("order-recency"),
            delta: 10,
            reason: "Ordered recently",
            applies: ordered_recently,
            action: None,
        },
        Rule {
            id: "order-long-ago",
            group: Some("order-recency"),
            delta: -10,
            reason: "No deal closed in a long time",
            applies: order_long_ago,
            action: None,
        },
        Rule {
            id: "existing-customer",
            group: Some("lifecycle"),
            delta: 10,
            reason: "Existing customer",
            applies: is_customer,
            action: None,
        },
        Rule {
            id: "churn-risk",
            group: Some("lifecycle"),
            delta: -15,
            reason: "Flagged as churn risk",
            applies: churn_flagged,
            action: None,
        },
        Rule {
            id: "vip-tag",
            group: None,
            delta: 15,
            reason: "VIP tag",
            applies: vip_tagged,
            action: None,
        },
        Rule {
            id: "open-pipeline",
            group: None,
            delta: 10,
            reason: "Has active deals",
            applies: has_open_pipeline,
            action: Some(open_deal_action),
        },
        Rule {
            id: "no-activity-yet",
            group: Some("activity"),
            delta: 10,
            reason: "No activity yet - worth reaching out",
            applies: no_activity,
            action: Some(|_| "Call and introduce yourself".to_string()),
        },
        Rule {
            id: "activity-stale",
            group: Some("activity"),
            delta: -10,
            reason: "No recent contact",
            applies: activity_stale,
            action: Some(|_| "Send a follow-up email".to_string()),
        },
        Rule {
            id: "activity-cooling",
            group: Some("activity"),
            delta: 0,
            reason: "No touchpoint for a few weeks",
            applies: activity_cooling,
            action: Some(|_| "Remind them of the proposed value by email".to_string()),
        },
        Rule {
            id: "activity-fresh",
            group: Some("activity"),
            delta: 0,
            reason: "Recently in contact",
            applies: activity_fresh,
            action: None,
        },
    ]
}

fn has_won_deal(ctx: &ContactContext) -> bool {
    ctx.deals.iter().any(|deal| deal.stage == DealStage::Won)
}

fn repeat_buyer(ctx: &ContactContext) -> bool {
    ctx.metrics.total_orders > 1
}

fn ordered_recently(ctx: &ContactContext) -> bool {
    ctx.metrics.days_since_last_order.is_some_and(|days| days <= 30)
}

fn order_long_ago(ctx: &ContactContext) -> bool {
    ctx.metrics.days_since_last_order.is_some_and(|days| days > 120)
}

fn is_customer(ctx: &ContactContext) -> bool {
    ctx.contact.lifecycle_stage.as_deref() == Some("customer")
}

fn churn_flagged(ctx: &ContactContext) -> bool {
    ctx.contact
        .lifecycle_stage
        .as_deref()
        .is_some_and(|stage| stage.to_lowercase().contains("churn"))
}

fn vip_tagged(ctx: &ContactContext) -> bool {
    ctx.contact.has_tag("vip")
}

fn has_open_pipeline(ctx: &ContactContext) -> bool {
    ctx.deals.iter().any(|deal| deal.stage.is_open_pipeline())
}

/// Name the most recently touched open deal in the follow-up action.
fn open_deal_action(ctx: &ContactContext) -> String {
    let title = ctx
        .deals
        .iter()
        .filter(|deal| deal.stage.is_open_pipeline())
        .max_by_key(|deal| deal.last_touched())
        .map(|deal| deal.title.as_str())
        .unwrap_or_default();
    format!("Follow up on deal \"{title}\" and push the stage forward")
}

fn no_activity(ctx: &ContactContext) -> bool {
    ctx.activities.is_empty()
}

fn activity_stale(ctx: &ContactContext) -> bool {
    ctx.metrics
        .days_since_last_activity
        .is_some_and(|days| days > 45)
}

fn activity_cooling(ctx: &ContactContext) -> bool {
    ctx.metrics
        .days_since_last_activity
        .is_some_and(|days| days > 14)
}

fn activity_fresh(ctx: &ContactContext) -> bool {
    ctx.metrics.days_since_last_activity.is_some()
}

/// Priority thresholds for the contact profile.
pub fn contact_priority(score: i32) -> Priority {
    if score >= 75 {
        Priority::High
    } else if score <= 40 {
        Priority::Low
    } else {
        Priority::Medium
    }
}

/// Score a resolved contact with the triage profile.
pub fn score_contact(ctx: &ContactContext) -> ScoreResult {
    let eval = evaluate(&contact_rules(), BASELINE, ctx);
    let priority = contact_priority(eval.score);

    let mut suggested_actions = eval.actions;
    recommend::close_out_contact(priority, ctx, &mut suggested_actions);

    debug!(
        contact = %ctx.contact.id,
        score = eval.score,
        ?priority,
        "scored contact"
    );

    ScoreResult {
        score: eval.score,
        priority,
        reasons: eval.reasons,
        suggested_actions,
    }
}
