//! Read-only relationship snapshots.
//!
//! These records are projections supplied by the persistence collaborator;
//! the engine never mutates or stores them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact as seen by the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSnapshot {
    /// Contact identifier.
    pub id: String,
    /// First name, if recorded.
    pub first_name: Option<String>,
    /// Last name, if recorded.
    pub last_name: Option<String>,
    /// Email address, if recorded.
    pub email: Option<String>,
    /// Company name, if recorded.
    pub company: Option<String>,
    /// Phone number, if recorded.
    pub phone: Option<String>,
    /// Lifecycle stage ("lead", "customer", churn-flavored, or free text).
    pub lifecycle_stage: Option<String>,
    /// Tag set, e.g. "vip".
    #[serde(default)]
    pub tags: Vec<String>,
    /// Display name of the owning user, if assigned.
    pub owner_name: Option<String>,
}

impl ContactSnapshot {
    /// Human-readable name: first + last, falling back to the email
    /// address, falling back to a placeholder.
    pub fn display_name(&self) -> String {
        let joined = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !joined.is_empty() {
            return joined;
        }

        match self.email.as_deref().map(str::trim) {
            Some(email) if !email.is_empty() => email.to_string(),
            _ => "Unknown contact".to_string(),
        }
    }

    /// Whether the tag set contains the given tag (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether the lifecycle stage is unset or still "lead".
    pub fn is_unconverted(&self) -> bool {
        match self.lifecycle_stage.as_deref() {
            None | Some("") | Some("lead") => true,
            Some(_) => false,
        }
    }
}

/// Pipeline stage of a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealStage {
    New,
    Qualified,
    Proposal,
    Negotiation,
    Won,
    Lost,
}

impl DealStage {
    /// Stages that count as an open pipeline worth chasing.
    pub fn is_open_pipeline(&self) -> bool {
        matches!(self, DealStage::Proposal | DealStage::Negotiation | DealStage::Qualified)
    }
}

impl fmt::Display for DealStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DealStage::New => "new",
            DealStage::Qualified => "qualified",
            DealStage::Proposal => "proposal",
            DealStage::Negotiation => "negotiation",
            DealStage::Won => "won",
            DealStage::Lost => "lost",
        };
        f.write_str(label)
    }
}

/// A deal attached to a contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRecord {
    /// Deal identifier.
    pub id: String,
    /// Deal title.
    pub title: String,
    /// Monetary amount, if priced.
    pub amount: Option<f64>,
    /// Currency code, e.g. "EUR".
    pub currency: String,
    /// Pipeline stage.
    pub stage: DealStage,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp, if the deal was ever touched after creation.
    pub updated_at: Option<DateTime<Utc>>,
}

impl DealRecord {
    /// The most recent timestamp on the record: update time, falling back
    /// to creation time.
    pub fn last_touched(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}

/// Kind of a logged activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Task,
    Call,
    Email,
    Meeting,
    Note,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityKind::Task => "task",
            ActivityKind::Call => "call",
            ActivityKind::Email => "email",
            ActivityKind::Meeting => "meeting",
            ActivityKind::Note => "note",
        };
        f.write_str(label)
    }
}

/// A logged activity against a contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// Activity identifier.
    pub id: String,
    /// Activity kind.
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// Optional subject line.
    pub subject: Option<String>,
    /// Whether the activity is done.
    #[serde(default)]
    pub completed: bool,
    /// Scheduled or due timestamp, if any.
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
