pub mod file_record;
pub mod notification;
pub mod upload;

pub use file_record::{DeliveryStatus, FileRecord, PageQuery, PageResult};
pub use notification::{Notification, NotificationLevel};
pub use upload::SelectedFile;
