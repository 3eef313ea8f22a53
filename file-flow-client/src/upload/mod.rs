//! Upload form: pick a file, name a recipient, submit as multipart.

use crate::models::SelectedFile;
use crate::services::{FileTransport, Notifier};
use flow_core::error::ClientError;
use std::sync::Arc;
use validator::Validate;

pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload file.";
pub const UPLOAD_SUCCEEDED_MESSAGE: &str = "File uploaded. The recipient will be notified by email.";
pub const FILE_REQUIRED_MESSAGE: &str = "Please select a non-empty file to upload.";

#[derive(Debug, Clone, Default, Validate)]
pub struct UploadForm {
    pub file: Option<SelectedFile>,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email_recipient: String,
}

impl UploadForm {
    pub fn new(file: Option<SelectedFile>, email_recipient: impl Into<String>) -> Self {
        Self {
            file,
            email_recipient: email_recipient.into(),
        }
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
    }

    /// Name of the selected file, for display next to the picker.
    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|f| f.name.as_str())
    }

    /// Check the form and hand back the file to send.
    pub fn validated_file(&self) -> Result<&SelectedFile, ClientError> {
        let file = match &self.file {
            Some(file) if !file.is_empty() => file,
            _ => return Err(ClientError::InvalidRequest(FILE_REQUIRED_MESSAGE.to_string())),
        };
        self.validate()?;
        Ok(file)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Submits upload forms through the shared transport.
pub struct UploadService {
    transport: Arc<dyn FileTransport>,
    notifier: Notifier,
}

impl UploadService {
    pub fn new(transport: Arc<dyn FileTransport>, notifier: Notifier) -> Self {
        Self {
            transport,
            notifier,
        }
    }

    /// Validate and send `form`. Invalid forms never reach the network.
    ///
    /// Success resets the form; failure keeps it and publishes a notification.
    pub async fn submit(&self, form: &mut UploadForm) -> Result<(), ClientError> {
        let file = match form.validated_file() {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!(error = %e, "Upload form rejected");
                self.notifier.notify_failure(&e, UPLOAD_FAILED_MESSAGE);
                return Err(e);
            }
        };

        match self
            .transport
            .upload_file(file, &form.email_recipient)
            .await
        {
            Ok(()) => {
                form.reset();
                self.notifier.notify_success(UPLOAD_SUCCEEDED_MESSAGE);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Upload failed");
                self.notifier.notify_failure(&e, UPLOAD_FAILED_MESSAGE);
                Err(e)
            }
        }
    }
}
