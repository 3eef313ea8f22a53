use crate::listing::state::ListingViewState;
use crate::models::{PageQuery, PageResult};
use crate::services::{FileTransport, Notifier};
use flow_core::error::ClientError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data.";

/// Fetches one page and merges it into the view state.
///
/// `is_loading` goes up before the request and down when it settles, on both
/// paths. Each request takes a sequence number; a response that is no longer
/// the latest one issued leaves the view state alone. A load dropped before
/// it settles still lowers the flag.
pub struct ListingFetcher {
    transport: Arc<dyn FileTransport>,
    notifier: Notifier,
    state: watch::Sender<ListingViewState>,
    sequence: AtomicU64,
}

impl ListingFetcher {
    pub fn new(transport: Arc<dyn FileTransport>, notifier: Notifier, page_size: u32) -> Self {
        let (state, _) = watch::channel(ListingViewState::new(page_size));
        Self {
            transport,
            notifier,
            state,
            sequence: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ListingViewState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ListingViewState {
        self.state.borrow().clone()
    }

    /// Fetch `query` and, on success, show it as page `page_index`.
    ///
    /// On failure the visible rows and total are kept and a notification with
    /// the backend message (or a generic one) is published. The error is still
    /// returned to the caller.
    pub async fn load_page(
        &self,
        query: PageQuery,
        page_index: u32,
    ) -> Result<PageResult, ClientError> {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|state| state.is_loading = true);
        let mut pending = PendingLoad {
            fetcher: self,
            seq,
            settled: false,
        };

        tracing::debug!(seq, cursor = query.cursor, limit = query.limit, page_index, "Loading page");

        let result = self.transport.list_files(query).await;
        pending.settled = true;

        if !self.is_latest(seq) {
            tracing::debug!(seq, "Discarding superseded page response");
            return result;
        }

        match &result {
            Ok(page) => {
                if page.records.is_empty() && page.total_records > 0 {
                    tracing::warn!(
                        cursor = query.cursor,
                        total_records = page.total_records,
                        "Cursor is past the last record"
                    );
                }

                self.state.send_modify(|state| {
                    state.visible_records = page.records.clone();
                    state.total_records = page.total_records;
                    state.cursor = query.cursor;
                    state.page_index = page_index;
                    state.is_loading = false;
                });

                tracing::info!(
                    page_index,
                    cursor = query.cursor,
                    rows = page.records.len(),
                    total_records = page.total_records,
                    "Page loaded"
                );
            }
            Err(e) => {
                self.state.send_modify(|state| state.is_loading = false);
                tracing::error!(
                    page_index,
                    cursor = query.cursor,
                    error = %e,
                    "Failed to load page"
                );
                self.notifier.notify_failure(e, LOAD_FAILED_MESSAGE);
            }
        }

        result
    }

    fn is_latest(&self, seq: u64) -> bool {
        self.sequence.load(Ordering::SeqCst) == seq
    }
}

/// Lowers `is_loading` if a `load_page` future is dropped mid-request.
struct PendingLoad<'a> {
    fetcher: &'a ListingFetcher,
    seq: u64,
    settled: bool,
}

impl Drop for PendingLoad<'_> {
    fn drop(&mut self) {
        if self.settled || !self.fetcher.is_latest(self.seq) {
            return;
        }
        tracing::debug!(seq = self.seq, "Page load cancelled");
        self.fetcher
            .state
            .send_modify(|state| state.is_loading = false);
    }
}
