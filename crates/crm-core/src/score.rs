//! Derived scoring output types.

use serde::{Deserialize, Serialize};

/// Metrics derived from a contact's deal and activity history.
///
/// Recomputed from scratch on every invocation; never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementMetrics {
    /// Amount of the reference deal, 0 when there is none.
    pub last_order_amount: f64,
    /// Count of won deals.
    pub total_orders: u32,
    /// Whole days since the reference deal was last touched.
    pub days_since_last_order: Option<i64>,
    /// Whole days since the newest activity was logged.
    pub days_since_last_activity: Option<i64>,
}

impl Default for EngagementMetrics {
    fn default() -> Self {
        Self {
            last_order_amount: 0.0,
            total_orders: 0,
            days_since_last_order: None,
            days_since_last_activity: None,
        }
    }
}

/// Coarse priority tier derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Result of evaluating a scoring profile.
///
/// `reasons` holds one entry per fired rule, in rule evaluation order.
/// `suggested_actions` preserves insertion order and allows duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Final score, clamped to 0..=100.
    pub score: i32,
    /// Priority tier derived from the final score alone.
    pub priority: Priority,
    /// Human-readable justifications, in rule order.
    pub reasons: Vec<String>,
    /// Suggested next actions, in insertion order.
    pub suggested_actions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_default() {
        let metrics = EngagementMetrics::default();
        assert_eq!(metrics.last_order_amount, 0.0);
        assert_eq!(metrics.total_orders, 0);
        assert!(metrics.days_since_last_order.is_none());
        assert!(metrics.days_since_last_activity.is_none());
    }

    #[test]
    fn test_priority_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let p: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(p, Priority::Medium);
    }

    #[test]
    fn test_score_result_wire_shape() {
        let result = ScoreResult {
            score: 75,
            priority: Priority::High,
            reasons: vec!["VIP tag".to_string()],
            suggested_actions: vec!["Call today".to_string()],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["score"], 75);
        assert_eq!(value["priority"], "high");
        assert_eq!(value["suggestedActions"][0], "Call today");
    }
}
