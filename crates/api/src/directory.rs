//! Contact lookup behind a trait, so handlers stay storage-agnostic.
//!
//! Real persistence lives in a separate service; this boundary only needs
//! read access to a contact and its recent history. The in-memory
//! implementation loads a JSON contact book at startup.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crm_core::{ActivityRecord, ContactSnapshot, DealRecord};

/// Errors loading or querying the directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read contact book: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse contact book: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A contact together with its recent history.
///
/// `deals` are ordered newest-touched first and `activities` newest
/// first; downstream summaries take the head of each list.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactHistory {
    pub contact: ContactSnapshot,
    #[serde(default)]
    pub deals: Vec<DealRecord>,
    #[serde(default)]
    pub activities: Vec<ActivityRecord>,
}

/// Read access to contacts and their histories.
#[async_trait]
pub trait ContactDirectory: Send + Sync {
    /// Look up a contact with its deal and activity history.
    ///
    /// Returns `Ok(None)` for an unknown id.
    async fn contact_with_history(
        &self,
        id: &str,
    ) -> Result<Option<ContactHistory>, DirectoryError>;
}

/// Directory backed by an in-memory map.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    contacts: HashMap<String, ContactHistory>,
}

impl InMemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a directory from a JSON contact book: an array of
    /// `{ contact, deals, activities }` entries.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let entries: Vec<ContactHistory> = serde_json::from_str(&raw)?;

        let mut directory = Self::new();
        for entry in entries {
            directory.insert(entry);
        }
        info!(
            contacts = directory.len(),
            path = %path.as_ref().display(),
            "loaded contact book"
        );
        Ok(directory)
    }

    /// Insert a contact, normalizing the history ordering.
    pub fn insert(&mut self, mut history: ContactHistory) {
        history
            .deals
            .sort_by(|a, b| b.last_touched().cmp(&a.last_touched()));
        history
            .activities
            .sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.contacts.insert(history.contact.id.clone(), history);
    }

    /// Number of contacts in the directory.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the directory holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[async_trait]
impl ContactDirectory for InMemoryDirectory {
    async fn contact_with_history(
        &self,
        id: &str,
    ) -> Result<Option<ContactHistory>, DirectoryError> {
        Ok(self.contacts.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use crm_core::{ActivityKind, DealStage};

    fn history() -> ContactHistory {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        ContactHistory {
            contact: ContactSnapshot {
                id: "c-1".to_string(),
                first_name: Some("Iris".to_string()),
                last_name: None,
                email: None,
                company: None,
                phone: None,
                lifecycle_stage: Some("customer".to_string()),
                tags: vec![],
                owner_name: None,
            },
            deals: vec![
                DealRecord {
                    id: "d-old".to_string(),
                    title: "Old".to_string(),
                    amount: Some(10.0),
                    currency: "EUR".to_string(),
                    stage: DealStage::Won,
                    created_at: base,
                    updated_at: None,
                },
                DealRecord {
                    id: "d-new".to_string(),
                    title: "New".to_string(),
                    amount: Some(20.0),
                    currency: "EUR".to_string(),
                    stage: DealStage::Proposal,
                    created_at: base + Duration::days(30),
                    updated_at: None,
                },
            ],
            activities: vec![
                ActivityRecord {
                    id: "a-old".to_string(),
                    kind: ActivityKind::Call,
                    subject: None,
                    completed: true,
                    scheduled_at: None,
                    created_at: base,
                },
                ActivityRecord {
                    id: "a-new".to_string(),
                    kind: ActivityKind::Email,
                    subject: None,
                    completed: false,
                    scheduled_at: None,
                    created_at: base + Duration::days(10),
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_lookup_returns_normalized_history() {
        let mut directory = InMemoryDirectory::new();
        directory.insert(history());

        let found = directory.contact_with_history("c-1").await.unwrap().unwrap();
        assert_eq!(found.deals[0].id, "d-new");
        assert_eq!(found.activities[0].id, "a-new");
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let directory = InMemoryDirectory::new();
        let found = directory.contact_with_history("nope").await.unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_contact_book_parses_camel_case() {
        let raw = r#"[
            {
                "contact": {
                    "id": "c-7",
                    "firstName": "Maya",
                    "lastName": null,
                    "email": "maya@example.com",
                    "company": null,
                    "phone": null,
                    "lifecycleStage": "lead",
                    "tags": ["newsletter"],
                    "ownerName": null
                },
                "deals": [],
                "activities": []
            }
        ]"#;
        let entries: Vec<ContactHistory> = serde_json::from_str(raw).unwrap();
        assert_eq!(entries[0].contact.id, "c-7");
        assert_eq!(entries[0].contact.first_name.as_deref(), Some("Maya"));
    }
}
