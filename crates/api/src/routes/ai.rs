//! AI endpoints: chat, outreach drafting, and scoring.

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crm_core::{
    ActivityKind, ActivityRecord, DealRecord, DealStage, EngagementMetrics, FallbackTemplate,
    GenerationResult, Priority,
};
use engagement::{compute_metrics, score_contact, score_lead, ContactContext, LeadSignals};
use groq_gateway::prompt;

/// How many deals/activities the next-action response displays.
const DISPLAY_CAP: usize = 5;

/// Request for free-form CRM chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: String,
    /// Optional system prompt override.
    #[serde(default)]
    pub system: Option<String>,
    /// Optional model override.
    #[serde(default)]
    pub model: Option<String>,
}

/// Free-form chat against the configured provider.
///
/// Timeouts and provider outages come back as a fallback reply with
/// `fallback: true`, never as an error.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<GenerationResult>> {
    let prompt_text = request.prompt.trim();
    if prompt_text.is_empty() {
        return Err(ApiError::Validation("prompt must not be empty".to_string()));
    }

    let system = request
        .system
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let generation = prompt::chat_request(prompt_text, system, request.model);
    let result = state
        .gateway
        .generate_or_fallback(generation, FallbackTemplate::ServiceBusy)
        .await?;

    Ok(Json(result))
}

/// Request to draft an outreach reply for a contact.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReplyRequest {
    #[serde(default)]
    pub contact_id: String,
    #[serde(default)]
    pub prompt: String,
}

/// Draft an outreach reply grounded in the contact's CRM history.
pub async fn generate_reply(
    State(state): State<AppState>,
    Json(request): Json<GenerateReplyRequest>,
) -> Result<Json<GenerationResult>> {
    let contact_id = request.contact_id.trim();
    let prompt_text = request.prompt.trim();
    if contact_id.is_empty() {
        return Err(ApiError::Validation(
            "contactId must not be empty".to_string(),
        ));
    }
    if prompt_text.is_empty() {
        return Err(ApiError::Validation("prompt must not be empty".to_string()));
    }

    let history = state
        .directory
        .contact_with_history(contact_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            entity: "contact",
            id: contact_id.to_string(),
        })?;

    let metrics = compute_metrics(&history.deals, &history.activities, Utc::now());
    let generation = prompt::outreach_request(
        &history.contact,
        &history.deals,
        &history.activities,
        &metrics,
        prompt_text,
    );

    info!(contact = %contact_id, "drafting outreach reply");

    let result = state
        .gateway
        .generate_or_fallback(
            generation,
            FallbackTemplate::DraftEcho {
                context: prompt_text.to_string(),
            },
        )
        .await?;

    Ok(Json(result))
}

/// Score a raw lead signal bundle with the generic profile.
pub async fn lead_score(Json(signals): Json<LeadSignals>) -> Json<crm_core::ScoreResult> {
    Json(score_lead(&signals))
}

/// Deal fields surfaced in the next-action response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealDisplay {
    pub id: String,
    pub title: String,
    pub amount: Option<f64>,
    pub currency: String,
    pub stage: DealStage,
    pub created_at: DateTime<Utc>,
}

impl From<&DealRecord> for DealDisplay {
    fn from(deal: &DealRecord) -> Self {
        Self {
            id: deal.id.clone(),
            title: deal.title.clone(),
            amount: deal.amount,
            currency: deal.currency.clone(),
            stage: deal.stage,
            created_at: deal.created_at,
        }
    }
}

/// Activity fields surfaced in the next-action response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDisplay {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub subject: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&ActivityRecord> for ActivityDisplay {
    fn from(activity: &ActivityRecord) -> Self {
        Self {
            id: activity.id.clone(),
            kind: activity.kind,
            subject: activity.subject.clone(),
            due_date: activity.scheduled_at,
            completed: activity.completed,
            created_at: activity.created_at,
        }
    }
}

/// Triage summary for a contact.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextActionResponse {
    pub contact_id: String,
    pub contact_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub lifecycle_stage: Option<String>,
    pub tags: Vec<String>,
    pub metrics: EngagementMetrics,
    pub score: i32,
    pub priority: Priority,
    pub reasons: Vec<String>,
    pub suggested_actions: Vec<String>,
    pub deals: Vec<DealDisplay>,
    pub activities: Vec<ActivityDisplay>,
}

/// Score a contact with the triage profile and suggest next steps.
pub async fn next_action(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NextActionResponse>> {
    let history = state
        .directory
        .contact_with_history(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            entity: "contact",
            id: id.clone(),
        })?;

    let metrics = compute_metrics(&history.deals, &history.activities, Utc::now());
    let score = score_contact(&ContactContext {
        contact: &history.contact,
        deals: &history.deals,
        activities: &history.activities,
        metrics: &metrics,
    });

    let contact = &history.contact;
    Ok(Json(NextActionResponse {
        contact_id: contact.id.clone(),
        contact_name: contact.display_name(),
        email: contact.email.clone(),
        phone: contact.phone.clone(),
        company: contact.company.clone(),
        lifecycle_stage: contact.lifecycle_stage.clone(),
        tags: contact.tags.clone(),
        metrics,
        score: score.score,
        priority: score.priority,
        reasons: score.reasons,
        suggested_actions: score.suggested_actions,
        deals: history.deals.iter().take(DISPLAY_CAP).map(Into::into).collect(),
        activities: history
            .activities
            .iter()
            .take(DISPLAY_CAP)
            .map(Into::into)
            .collect(),
    }))
}
