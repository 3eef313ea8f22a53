use crate::listing::cursor::page_count;
use crate::models::FileRecord;

/// What the listing table renders. Only the listing writes it; readers get
/// snapshots through [`crate::listing::FileListing::subscribe`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListingViewState {
    pub visible_records: Vec<FileRecord>,
    pub page_index: u32,
    pub page_size: u32,
    pub is_loading: bool,
    pub cursor: i64,
    pub total_records: u64,
}

impl ListingViewState {
    pub fn new(page_size: u32) -> Self {
        Self {
            visible_records: Vec::new(),
            page_index: 0,
            page_size,
            is_loading: false,
            cursor: 0,
            total_records: 0,
        }
    }

    pub fn page_count(&self) -> u64 {
        page_count(self.total_records, self.page_size)
    }

    pub fn has_previous_page(&self) -> bool {
        !self.is_loading && self.page_index > 0
    }

    pub fn has_next_page(&self) -> bool {
        !self.is_loading && u64::from(self.page_index) + 1 < self.page_count()
    }
}
