//! User-uploaded-files resource client.
//!
//! The listing and upload components only see [`FileTransport`]; [`FileClient`]
//! is the HTTP implementation over [`ApiClient`].

use crate::models::{PageQuery, PageResult, SelectedFile};
use crate::services::api_client::{ApiClient, ApiPrefix};
use async_trait::async_trait;
use flow_core::error::ClientError;
use reqwest::multipart::{Form, Part};
use std::sync::Arc;

#[async_trait]
pub trait FileTransport: Send + Sync {
    /// Fetch the records after `query.cursor`, at most `query.limit` of them.
    async fn list_files(&self, query: PageQuery) -> Result<PageResult, ClientError>;

    /// Upload `file` and ask the backend to notify `email_recipient`.
    async fn upload_file(&self, file: &SelectedFile, email_recipient: &str)
        -> Result<(), ClientError>;
}

pub struct FileClient {
    api: Arc<ApiClient>,
}

impl FileClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl FileTransport for FileClient {
    async fn list_files(&self, query: PageQuery) -> Result<PageResult, ClientError> {
        let page: PageResult = self
            .api
            .get(ApiPrefix::UserUploadedFiles, "", &query)
            .await?;

        tracing::debug!(
            cursor = query.cursor,
            limit = query.limit,
            returned = page.records.len(),
            total_records = page.total_records,
            "Fetched file page"
        );

        Ok(page)
    }

    async fn upload_file(
        &self,
        file: &SelectedFile,
        email_recipient: &str,
    ) -> Result<(), ClientError> {
        let part = Part::bytes(file.data.clone())
            .file_name(file.name.clone())
            .mime_str(&file.content_type)?;

        let form = Form::new()
            .text("emailRecipient", email_recipient.to_string())
            .part("file", part);

        self.api
            .post_multipart(ApiPrefix::UserUploadedFiles, "", form)
            .await?;

        tracing::info!(
            file_name = %file.name,
            size = file.size(),
            "File uploaded successfully"
        );

        Ok(())
    }
}
