use crate::listing::cursor::{clamp_cursor, compute_next_cursor, PageChange};
use crate::listing::fetcher::ListingFetcher;
use crate::listing::state::ListingViewState;
use crate::models::PageQuery;
use crate::services::{FileTransport, Notifier};
use flow_core::error::ClientError;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{watch, Mutex};

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("A page is already loading")]
    Busy,

    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    #[error("Page size is fixed at {expected}, paginator sent {actual}")]
    PageSizeChanged { expected: u32, actual: u32 },

    #[error("Failed to load page: {0}")]
    Fetch(#[from] ClientError),
}

/// Paginated listing of the user's uploaded files.
///
/// Page moves run one at a time: `change_page` waits its turn behind the
/// fetch in flight (first come, first served), `try_change_page` refuses
/// instead. Either way no two fetches overlap and events apply in the order
/// they were issued.
pub struct FileListing {
    fetcher: ListingFetcher,
    gate: Mutex<()>,
    page_size: u32,
}

impl FileListing {
    pub fn new(
        transport: Arc<dyn FileTransport>,
        notifier: Notifier,
        page_size: u32,
    ) -> Result<Self, ListingError> {
        if page_size == 0 {
            return Err(ListingError::InvalidPageSize);
        }
        Ok(Self {
            fetcher: ListingFetcher::new(transport, notifier, page_size),
            gate: Mutex::new(()),
            page_size,
        })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn subscribe(&self) -> watch::Receiver<ListingViewState> {
        self.fetcher.subscribe()
    }

    pub fn snapshot(&self) -> ListingViewState {
        self.fetcher.snapshot()
    }

    /// First load when the listing is shown: page 0 from the start.
    pub async fn mount(&self) -> Result<(), ListingError> {
        let _guard = self.gate.lock().await;
        self.fetcher
            .load_page(PageQuery::first(self.page_size), 0)
            .await?;
        Ok(())
    }

    /// Re-fetch the page currently shown, picking up new delivery statuses.
    pub async fn refresh(&self) -> Result<(), ListingError> {
        let _guard = self.gate.lock().await;
        let current = self.fetcher.snapshot();
        let query = PageQuery {
            cursor: current.cursor,
            limit: self.page_size,
        };
        self.fetcher.load_page(query, current.page_index).await?;
        Ok(())
    }

    /// Apply a paginator event, waiting for any fetch in flight to settle first.
    pub async fn change_page(&self, event: PageChange) -> Result<(), ListingError> {
        self.check_page_size(&event)?;
        let _guard = self.gate.lock().await;
        self.apply(event).await
    }

    /// Apply a paginator event, or fail with [`ListingError::Busy`] if a
    /// fetch is in flight.
    pub async fn try_change_page(&self, event: PageChange) -> Result<(), ListingError> {
        self.check_page_size(&event)?;
        let _guard = self.gate.try_lock().map_err(|_| {
            tracing::debug!(page_index = event.page_index, "Page change rejected, fetch in flight");
            ListingError::Busy
        })?;
        self.apply(event).await
    }

    async fn apply(&self, event: PageChange) -> Result<(), ListingError> {
        let current = self.fetcher.snapshot();
        let next = compute_next_cursor(
            event.page_index,
            event.previous_page_index,
            self.page_size,
            current.cursor,
            current.total_records,
        );
        let cursor = clamp_cursor(next);

        tracing::debug!(
            page_index = event.page_index,
            previous_page_index = event.previous_page_index,
            prior_cursor = current.cursor,
            cursor,
            "Page change"
        );

        self.fetcher
            .load_page(
                PageQuery {
                    cursor,
                    limit: self.page_size,
                },
                event.page_index,
            )
            .await?;
        Ok(())
    }

    fn check_page_size(&self, event: &PageChange) -> Result<(), ListingError> {
        if event.page_size != self.page_size {
            tracing::warn!(
                expected = self.page_size,
                actual = event.page_size,
                "Paginator page size differs from listing page size"
            );
            return Err(ListingError::PageSizeChanged {
                expected: self.page_size,
                actual: event.page_size,
            });
        }
        Ok(())
    }
}
