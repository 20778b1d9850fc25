use chrono::{DateTime, Utc};
use mailroom_shared::{Result, bail};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// A persisted contact-form submission.
///
/// `is_read` is the only field that changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// A validated submission that has not been given an id or timestamp yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl NewContactMessage {
    pub(crate) fn into_message(self, id: String, created_at: DateTime<Utc>) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            is_read: false,
            created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct ContactMessageRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: i64,
}

impl TryFrom<ContactMessageRow> for ContactMessage {
    type Error = mailroom_shared::Error;

    fn try_from(row: ContactMessageRow) -> Result<Self> {
        let Some(created_at) = DateTime::from_timestamp_millis(row.created_at) else {
            bail!("contact message {} has an out of range created_at", row.id);
        };

        Ok(Self {
            id: row.id,
            name: row.name,
            email: row.email,
            subject: row.subject,
            message: row.message,
            is_read: row.is_read,
            created_at,
        })
    }
}
