pub mod api_client;
pub mod file_client;
pub mod notifier;

pub use api_client::{ApiClient, ApiPrefix};
pub use file_client::{FileClient, FileTransport};
pub use notifier::Notifier;
