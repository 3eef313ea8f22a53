#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use file_flow_client::models::{FileRecord, PageQuery, PageResult, SelectedFile};
use file_flow_client::services::FileTransport;
use flow_core::error::ClientError;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Semaphore;

pub const PAGE_SIZE: u32 = 10;

pub fn record(id: i64) -> FileRecord {
    FileRecord {
        id,
        name: format!("file-{}.txt", id),
        size_bytes: 1024 * id,
        created_at: Utc.timestamp_opt(1_700_000_000 + id, 0).unwrap(),
        email_sent: id % 2 == 0,
        email_sent_at: None,
        email_recipient: format!("user{}@example.com", id),
        error_message: None,
    }
}

pub fn ids(records: &[FileRecord]) -> Vec<i64> {
    records.iter().map(|r| r.id).collect()
}

/// Backend stand-in holding records with dense ids `1..=total`.
#[derive(Default)]
pub struct InMemoryTransport {
    records: Mutex<Vec<FileRecord>>,
    failure: Mutex<Option<(StatusCode, String)>>,
    hold: Mutex<Option<Arc<Semaphore>>>,
    delays: Mutex<HashMap<i64, Duration>>,
    queries: Mutex<Vec<PageQuery>>,
    uploads: Mutex<Vec<(SelectedFile, String)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl InMemoryTransport {
    pub fn with_records(total: i64) -> Arc<Self> {
        let transport = Self::default();
        *transport.records.lock().unwrap() = (1..=total).map(record).collect();
        Arc::new(transport)
    }

    /// Make every following call fail with `status` and raw `body`.
    pub fn fail_with(&self, status: StatusCode, body: &str) {
        *self.failure.lock().unwrap() = Some((status, body.to_string()));
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Park every following list call until a permit is released.
    pub fn hold(&self) -> Arc<Semaphore> {
        let semaphore = Arc::new(Semaphore::new(0));
        *self.hold.lock().unwrap() = Some(semaphore.clone());
        semaphore
    }

    pub fn delay_cursor(&self, cursor: i64, delay: Duration) {
        self.delays.lock().unwrap().insert(cursor, delay);
    }

    pub fn queries(&self) -> Vec<PageQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn cursors(&self) -> Vec<i64> {
        self.queries().iter().map(|q| q.cursor).collect()
    }

    pub fn uploads(&self) -> Vec<(SelectedFile, String)> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn failure(&self) -> Option<ClientError> {
        self.failure
            .lock()
            .unwrap()
            .as_ref()
            .map(|(status, body)| ClientError::from_response_body(*status, body))
    }
}

#[async_trait]
impl FileTransport for InMemoryTransport {
    async fn list_files(&self, query: PageQuery) -> Result<PageResult, ClientError> {
        self.queries.lock().unwrap().push(query);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let hold = self.hold.lock().unwrap().clone();
        if let Some(semaphore) = hold {
            semaphore.acquire().await.unwrap().forget();
        }
        let delay = self.delays.lock().unwrap().get(&query.cursor).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if let Some(err) = self.failure() {
            return Err(err);
        }

        let records = self.records.lock().unwrap();
        let page = records
            .iter()
            .filter(|r| r.id > query.cursor)
            .take(query.limit as usize)
            .cloned()
            .collect();

        Ok(PageResult {
            records: page,
            total_records: records.len() as u64,
        })
    }

    async fn upload_file(
        &self,
        file: &SelectedFile,
        email_recipient: &str,
    ) -> Result<(), ClientError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        self.uploads
            .lock()
            .unwrap()
            .push((file.clone(), email_recipient.to_string()));
        Ok(())
    }
}
