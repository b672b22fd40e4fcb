//! Priority-driven closing actions.
//!
//! Appended after the rule table has run and the final priority is
//! known. Action lists keep insertion order and are never deduplicated.

use crm_core::Priority;

use crate::contact::ContactContext;

/// Closing actions for the generic lead profile.
pub fn close_out_lead(priority: Priority, actions: &mut Vec<String>) {
    match priority {
        Priority::High => {
            actions.push("Call today".to_string());
            actions.push("Offer a higher plan".to_string());
        }
        Priority::Medium => actions.push("Send a personalized email".to_string()),
        Priority::Low => actions.push("Keep in the nurture sequence".to_string()),
    }
}

/// Closing actions for the contact triage profile.
///
/// High priority always gets an urgency action plus an upsell prompt.
/// Low-priority contacts with no deals and an unconverted lifecycle get
/// a demo invitation.
pub fn close_out_contact(priority: Priority, ctx: &ContactContext, actions: &mut Vec<String>) {
    match priority {
        Priority::High => {
            actions.push("Call today".to_string());
            actions.push("Offer an upsell or cross-sell".to_string());
        }
        Priority::Low => {
            if ctx.deals.is_empty() && ctx.contact.is_unconverted() {
                actions.push("Invite to a demo or consultation".to_string());
            }
        }
        Priority::Medium => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_core::{ContactSnapshot, EngagementMetrics};

    fn snapshot(lifecycle: Option<&str>) -> ContactSnapshot {
        ContactSnapshot {
            id: "c-1".to_string(),
            first_name: None,
            last_name: None,
            email: None,
            company: None,
            phone: None,
            lifecycle_stage: lifecycle.map(str::to_string),
            tags: Vec::new(),
            owner_name: None,
        }
    }

    #[test]
    fn test_lead_actions_per_tier() {
        let mut actions = Vec::new();
        close_out_lead(Priority::High, &mut actions);
        assert_eq!(actions, vec!["Call today", "Offer a higher plan"]);

        let mut actions = Vec::new();
        close_out_lead(Priority::Medium, &mut actions);
        assert_eq!(actions, vec!["Send a personalized email"]);

        let mut actions = Vec::new();
        close_out_lead(Priority::Low, &mut actions);
        assert_eq!(actions, vec!["Keep in the nurture sequence"]);
    }

    #[test]
    fn test_demo_invite_requires_low_priority_no_deals_unconverted() {
        let contact = snapshot(Some("lead"));
        let metrics = EngagementMetrics::default();
        let ctx = ContactContext {
            contact: &contact,
            deals: &[],
            activities: &[],
            metrics: &metrics,
        };

        let mut actions = Vec::new();
        close_out_contact(Priority::Low, &ctx, &mut actions);
        assert_eq!(actions, vec!["Invite to a demo or consultation"]);

        // Converted lifecycle blocks the invite.
        let converted = snapshot(Some("customer"));
        let ctx = ContactContext {
            contact: &converted,
            deals: &[],
            activities: &[],
            metrics: &metrics,
        };
        let mut actions = Vec::new();
        close_out_contact(Priority::Low, &ctx, &mut actions);
        assert!(actions.is_empty());

        // Medium priority blocks the invite too.
        let lead = snapshot(None);
        let ctx = ContactContext {
            contact: &lead,
            deals: &[],
            activities: &[],
            metrics: &metrics,
        };
        let mut actions = Vec::new();
        close_out_contact(Priority::Medium, &ctx, &mut actions);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_existing_actions_are_preserved_and_order_kept() {
        let contact = snapshot(Some("customer"));
        let metrics = EngagementMetrics::default();
        let ctx = ContactContext {
            contact: &contact,
            deals: &[],
            activities: &[],
            metrics: &metrics,
        };
        let mut actions = vec!["Call and introduce yourself".to_string()];
        close_out_contact(Priority::High, &ctx, &mut actions);
        assert_eq!(
            actions,
            vec![
                "Call and introduce yourself",
                "Call today",
                "Offer an upsell or cross-sell",
            ]
        );
    }
}
