use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One uploaded file and the state of its notification email.
///
/// Snapshot as delivered by the backend. Ids grow with creation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: i64,
    pub name: String,
    #[serde(rename = "size")]
    pub size_bytes: i64,
    pub created_at: DateTime<Utc>,
    pub email_sent: bool,
    #[serde(default)]
    pub email_sent_at: Option<DateTime<Utc>>,
    pub email_recipient: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    Pending,
    Failed,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "sent",
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::Failed => "failed",
        }
    }
}

impl FileRecord {
    /// Status shown in the listing's delivery column.
    pub fn delivery_status(&self) -> DeliveryStatus {
        if self.email_sent {
            DeliveryStatus::Sent
        } else if self.error_message.is_some() {
            DeliveryStatus::Failed
        } else {
            DeliveryStatus::Pending
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Query for one page: records with `id > cursor`, at most `limit` of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub cursor: i64,
    pub limit: u32,
}

impl PageQuery {
    pub fn first(limit: u32) -> Self {
        Self { cursor: 0, limit }
    }
}

/// One page of records plus the count across all pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    #[serde(rename = "files", default, deserialize_with = "null_as_empty")]
    pub records: Vec<FileRecord>,
    #[serde(rename = "totalRecords")]
    pub total_records: u64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<FileRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<FileRecord>>::deserialize(deserializer)?.unwrap_or_default())
}
