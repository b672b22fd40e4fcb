//! Prompt rendering from CRM snapshots.
//!
//! Turns contact, deal, and activity records into the natural-language
//! context the provider sees. Summaries are capped at 5 entries each.

use crm_core::{
    ActivityRecord, ChatMessage, ContactSnapshot, DealRecord, EngagementMetrics,
    GenerationRequest,
};

/// System prompt for free-form CRM chat.
pub const CHAT_SYSTEM_PROMPT: &str = "You are a CRM assistant. \
    Answer concretely and to the point. \
    If data is missing, ask for clarification first instead of guessing. \
    Rely only on what the user or the CRM context provides.";

/// System prompt for contact-aware outreach drafting.
pub const OUTREACH_SYSTEM_PROMPT: &str = "Act as a senior account manager writing replies to customers. \
    Keep the tone professional, friendly, and focused on the business goal. \
    Use a clear call to action and a concrete next step. \
    Avoid generic phrasing; personalize the content from the CRM context.";

/// How many deals/activities make it into a prompt.
const SUMMARY_CAP: usize = 5;

/// Build a free-form chat request, with an optional custom system prompt
/// and model override.
pub fn chat_request(
    prompt: &str,
    system: Option<&str>,
    model: Option<String>,
) -> GenerationRequest {
    let request = GenerationRequest::new(vec![
        ChatMessage::system(system.unwrap_or(CHAT_SYSTEM_PROMPT)),
        ChatMessage::user(prompt),
    ]);
    match model {
        Some(model) => request.with_model(model),
        None => request,
    }
}

/// Multi-line briefing of a contact and its engagement metrics.
pub fn contact_briefing(contact: &ContactSnapshot, metrics: &EngagementMetrics) -> String {
    let mut lines = vec![
        format!("Name: {}", contact.display_name()),
        format!("Email: {}", contact.email.as_deref().unwrap_or("-")),
        format!("Company: {}", contact.company.as_deref().unwrap_or("-")),
        format!("Phone: {}", contact.phone.as_deref().unwrap_or("-")),
        format!(
            "Lifecycle stage: {}",
            contact.lifecycle_stage.as_deref().unwrap_or("-")
        ),
    ];

    if let Some(owner) = contact.owner_name.as_deref().filter(|o| !o.trim().is_empty()) {
        lines.push(format!("Account owner: {owner}"));
    }
    if !contact.tags.is_empty() {
        lines.push(format!("Tags: {}", contact.tags.join(", ")));
    }

    lines.push(format!(
        "Last order amount: {:.2} EUR",
        metrics.last_order_amount
    ));
    lines.push(format!("Total orders: {}", metrics.total_orders));
    lines.push(format!(
        "Days since last order: {}",
        format_days(metrics.days_since_last_order)
    ));
    lines.push(format!(
        "Days since last contact: {}",
        format_days(metrics.days_since_last_activity)
    ));

    lines.join("\n")
}

/// Bullet-list summary of the most recent deals.
pub fn summarize_deals(deals: &[DealRecord]) -> String {
    if deals.is_empty() {
        return "- No active deals.".to_string();
    }
    deals
        .iter()
        .take(SUMMARY_CAP)
        .map(|deal| {
            let amount = match deal.amount {
                Some(amount) => format!("{:.2} {}", amount, deal.currency),
                None => "amount not specified".to_string(),
            };
            format!("- {} ({}, {})", deal.title, deal.stage, amount)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bullet-list summary of the most recent activities.
pub fn summarize_activities(activities: &[ActivityRecord]) -> String {
    if activities.is_empty() {
        return "- No recorded activities.".to_string();
    }
    activities
        .iter()
        .take(SUMMARY_CAP)
        .map(|activity| {
            let subject = activity
                .subject
                .as_deref()
                .map(|s| format!(" - {s}"))
                .unwrap_or_default();
            let state = if activity.completed { "completed" } else { "open" };
            format!("- {}{} ({})", activity.kind, subject, state)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assemble the full outreach-drafting request for a contact.
pub fn outreach_request(
    contact: &ContactSnapshot,
    deals: &[DealRecord],
    activities: &[ActivityRecord],
    metrics: &EngagementMetrics,
    prompt: &str,
) -> GenerationRequest {
    let user_prompt = [
        "CRM context:",
        &contact_briefing(contact, metrics),
        "",
        "Recent deals:",
        &summarize_deals(deals),
        "",
        "Recent activities:",
        &summarize_activities(activities),
        "",
        "Customer message or extra context:",
        prompt.trim(),
        "",
        "Task: prepare a professional reply (2-3 paragraphs) with a clear \
         recommendation or call to action. If data is missing, suggest what \
         is needed, but do not invent facts.",
    ]
    .join("\n");

    GenerationRequest::new(vec![
        ChatMessage::system(OUTREACH_SYSTEM_PROMPT),
        ChatMessage::user(user_prompt),
    ])
}

fn format_days(days: Option<i64>) -> String {
    match days {
        Some(days) => days.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use crm_core::{ActivityKind, DealStage};

    fn contact() -> ContactSnapshot {
        ContactSnapshot {
            id: "c-1".to_string(),
            first_name: Some("Nora".to_string()),
            last_name: Some("Ellis".to_string()),
            email: Some("nora@example.com".to_string()),
            company: Some("Ellis & Co".to_string()),
            phone: None,
            lifecycle_stage: Some("customer".to_string()),
            tags: vec!["vip".to_string(), "newsletter".to_string()],
            owner_name: Some("Priya Shah".to_string()),
        }
    }

    fn metrics() -> EngagementMetrics {
        EngagementMetrics {
            last_order_amount: 1499.5,
            total_orders: 3,
            days_since_last_order: Some(12),
            days_since_last_activity: None,
        }
    }

    fn deal(title: &str, stage: DealStage, amount: Option<f64>) -> DealRecord {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        DealRecord {
            id: title.to_string(),
            title: title.to_string(),
            amount,
            currency: "EUR".to_string(),
            stage,
            created_at: created,
            updated_at: Some(created + Duration::days(3)),
        }
    }

    #[test]
    fn test_chat_request_uses_default_system_prompt() {
        let request = chat_request("What changed?", None, None);
        assert_eq!(request.messages[0].content, CHAT_SYSTEM_PROMPT);
        assert_eq!(request.messages[1].content, "What changed?");
        assert!(request.model.is_none());
    }

    #[test]
    fn test_chat_request_honors_overrides() {
        let request = chat_request("hi", Some("Be terse."), Some("mixtral-8x7b".to_string()));
        assert_eq!(request.messages[0].content, "Be terse.");
        assert_eq!(request.model.as_deref(), Some("mixtral-8x7b"));
    }

    #[test]
    fn test_briefing_includes_owner_tags_and_metrics() {
        let text = contact_briefing(&contact(), &metrics());
        assert!(text.contains("Name: Nora Ellis"));
        assert!(text.contains("Account owner: Priya Shah"));
        assert!(text.contains("Tags: vip, newsletter"));
        assert!(text.contains("Last order amount: 1499.50 EUR"));
        assert!(text.contains("Days since last order: 12"));
        assert!(text.contains("Days since last contact: -"));
    }

    #[test]
    fn test_briefing_skips_missing_owner() {
        let mut c = contact();
        c.owner_name = None;
        let text = contact_briefing(&c, &metrics());
        assert!(!text.contains("Account owner"));
    }

    #[test]
    fn test_deal_summary_caps_at_five() {
        let deals: Vec<DealRecord> = (0..8)
            .map(|i| deal(&format!("Deal {i}"), DealStage::Proposal, Some(100.0)))
            .collect();
        let text = summarize_deals(&deals);
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("Deal 0 (proposal, 100.00 EUR)"));
    }

    #[test]
    fn test_deal_summary_handles_unpriced_and_empty() {
        assert_eq!(summarize_deals(&[]), "- No active deals.");
        let text = summarize_deals(&[deal("Pilot", DealStage::New, None)]);
        assert!(text.contains("Pilot (new, amount not specified)"));
    }

    #[test]
    fn test_activity_summary() {
        assert_eq!(summarize_activities(&[]), "- No recorded activities.");
        let activities = vec![ActivityRecord {
            id: "a-1".to_string(),
            kind: ActivityKind::Meeting,
            subject: Some("Kickoff".to_string()),
            completed: false,
            scheduled_at: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        }];
        let text = summarize_activities(&activities);
        assert_eq!(text, "- meeting - Kickoff (open)");
    }

    #[test]
    fn test_outreach_request_layers_context_and_prompt() {
        let request = outreach_request(
            &contact(),
            &[deal("Renewal", DealStage::Negotiation, Some(900.0))],
            &[],
            &metrics(),
            "  They asked about volume pricing.  ",
        );
        assert_eq!(request.messages[0].content, OUTREACH_SYSTEM_PROMPT);
        let user = &request.messages[1].content;
        assert!(user.starts_with("CRM context:"));
        assert!(user.contains("Renewal (negotiation, 900.00 EUR)"));
        assert!(user.contains("They asked about volume pricing."));
        assert!(!user.contains("  They asked"));
    }
}
