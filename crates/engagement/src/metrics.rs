//! Metrics aggregation over deal and activity history.

use chrono::{DateTime, Utc};
use crm_core::{ActivityRecord, DealRecord, DealStage, EngagementMetrics};

/// Derive [`EngagementMetrics`] from a contact's history.
///
/// The reference deal is the most recently updated won deal, falling back
/// to the most recently updated deal of any stage. `activities` must be
/// ordered newest-first, as delivered by the persistence collaborator;
/// they are not re-sorted here.
///
/// Pure function of its inputs; the caller supplies `now` so results are
/// reproducible under a frozen clock.
pub fn compute_metrics(
    deals: &[DealRecord],
    activities: &[ActivityRecord],
    now: DateTime<Utc>,
) -> EngagementMetrics {
    let mut ordered: Vec<&DealRecord> = deals.iter().collect();
    ordered.sort_by(|a, b| b.last_touched().cmp(&a.last_touched()));

    let total_orders = ordered
        .iter()
        .filter(|deal| deal.stage == DealStage::Won)
        .count() as u32;

    let reference = ordered
        .iter()
        .find(|deal| deal.stage == DealStage::Won)
        .or_else(|| ordered.first())
        .copied();

    EngagementMetrics {
        last_order_amount: reference.and_then(|deal| deal.amount).unwrap_or(0.0),
        total_orders,
        days_since_last_order: reference.map(|deal| whole_days_since(deal.last_touched(), now)),
        days_since_last_activity: activities
            .first()
            .map(|activity| whole_days_since(activity.created_at, now)),
    }
}

/// Difference between two instants, rounded to the nearest whole day.
fn whole_days_since(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (now - then).num_milliseconds() as f64;
    (millis / 86_400_000.0).round() as i64
}
