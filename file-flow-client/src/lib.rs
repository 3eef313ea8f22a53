pub mod config;
pub mod listing;
pub mod models;
pub mod services;
pub mod upload;
pub mod utils;

use config::Settings;
use flow_core::error::ClientError;
use listing::FileListing;
use services::{ApiClient, FileClient, FileTransport, Notifier};
use std::sync::Arc;
use upload::UploadService;

/// Everything a rendering layer needs, wired over one shared transport.
#[derive(Clone)]
pub struct FileFlow {
    pub notifier: Notifier,
    pub listing: Arc<FileListing>,
    pub uploads: Arc<UploadService>,
}

impl FileFlow {
    /// Fails with [`ClientError::InvalidRequest`] when `page_size` is zero.
    pub fn new(
        transport: Arc<dyn FileTransport>,
        notifier: Notifier,
        page_size: u32,
    ) -> Result<Self, ClientError> {
        let listing = FileListing::new(transport.clone(), notifier.clone(), page_size)
            .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
        Ok(Self {
            listing: Arc::new(listing),
            uploads: Arc::new(UploadService::new(transport, notifier.clone())),
            notifier,
        })
    }

    /// Build the HTTP transport from settings and wire the components over it.
    pub fn from_settings(settings: &Settings) -> Result<Self, ClientError> {
        let api = Arc::new(ApiClient::new(settings.api.clone())?);
        let transport: Arc<dyn FileTransport> = Arc::new(FileClient::new(api));
        let notifier = Notifier::new(settings.notifications.duration());

        tracing::info!(
            base_url = %settings.api.base_url,
            page_size = settings.listing.page_size,
            "File flow client ready"
        );

        Self::new(transport, notifier, settings.listing.page_size)
    }
}

/// Install logging for the embedding application from `[logging]` settings.
pub fn init_tracing(
    settings: &config::LoggingSettings,
) -> Result<(), flow_core::observability::ObservabilityError> {
    flow_core::observability::init_tracing(
        "file-flow-client",
        &settings.level,
        settings.otlp_endpoint.as_deref(),
    )
}
