//! Keyset-paginated listing of uploaded files.
pub mod controller;
pub mod cursor;
pub mod fetcher;
pub mod state;

pub use controller::{FileListing, ListingError};
pub use cursor::{compute_next_cursor, PageChange};
pub use fetcher::{ListingFetcher, LOAD_FAILED_MESSAGE};
pub use state::ListingViewState;
