//! Remote blob object store
//!
//! Talks to an Azure-style blob endpoint with a shared access signature
//! URL: `GET {account}/{container}/{blob}?{sas}` to download and a
//! `PUT` with `x-ms-blob-type: BlockBlob` to overwrite.

use async_trait::async_trait;
use reqwest::StatusCode;
use shared::{component_debug, ComponentId, SharedError};
use url::Url;

use crate::error::{SchedulerError, SchedulerResult};
use crate::traits::ObjectStore;

pub const DEFAULT_CONTAINER: &str = "bicollections";
pub const DEFAULT_BLOB_NAME: &str = "fulfillment/bi_office_hours.xlsx";

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub struct BlobStore {
    client: reqwest::Client,
    blob_url: Url,
}

impl BlobStore {
    /// Create a store for `container/blob` under an account-level SAS URL
    pub fn new(sas_url: &str, container: &str, blob_name: &str) -> SchedulerResult<Self> {
        Self::with_client(reqwest::Client::new(), sas_url, container, blob_name)
    }

    pub fn with_client(
        client: reqwest::Client,
        sas_url: &str,
        container: &str,
        blob_name: &str,
    ) -> SchedulerResult<Self> {
        let blob_url = build_blob_url(sas_url, container, blob_name)?;
        Ok(Self { client, blob_url })
    }

    /// Blob URL without the signature, safe to log
    fn redacted_url(&self) -> String {
        let mut url = self.blob_url.clone();
        url.set_query(None);
        url.to_string()
    }

    /// Transport failure with the signed URL stripped from the message
    fn transport_error(&self, operation: &str, e: reqwest::Error) -> SchedulerError {
        SchedulerError::storage(operation, &self.location(), e.without_url())
    }
}

/// Append the container and blob path to the account URL, keeping the query
pub fn build_blob_url(sas_url: &str, container: &str, blob_name: &str) -> SchedulerResult<Url> {
    let invalid = |value: &str| SchedulerError::SharedError(SharedError::InvalidConfig {
        field: "sas_url".to_string(),
        value: value.to_string(),
    });

    let mut url = Url::parse(sas_url).map_err(|_| invalid("<unparseable>"))?;
    {
        let mut segments = url.path_segments_mut().map_err(|_| invalid("<not a base url>"))?;
        segments.pop_if_empty();
        segments.push(container);
        for part in blob_name.split('/').filter(|p| !p.is_empty()) {
            segments.push(part);
        }
    }
    Ok(url)
}

#[async_trait]
impl ObjectStore for BlobStore {
    async fn read(&self) -> SchedulerResult<Vec<u8>> {
        let response = self
            .client
            .get(self.blob_url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error("download", e))?;

        match response.status() {
            status if status.is_success() => {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| self.transport_error("download", e))?;
                component_debug!(ComponentId::Gateway, "☁️ Downloaded {} bytes from {}", bytes.len(), self.redacted_url());
                Ok(bytes.to_vec())
            }
            StatusCode::NOT_FOUND => Err(SchedulerError::MissingStore {
                location: self.location(),
            }),
            status => Err(SchedulerError::storage(
                "download",
                &self.location(),
                format!("HTTP {status}"),
            )),
        }
    }

    async fn write(&self, bytes: Vec<u8>) -> SchedulerResult<()> {
        let size = bytes.len();
        let response = self
            .client
            .put(self.blob_url.clone())
            .header("x-ms-blob-type", "BlockBlob")
            .header(reqwest::header::CONTENT_TYPE, XLSX_CONTENT_TYPE)
            .body(bytes)
            .send()
            .await
            .map_err(|e| self.transport_error("upload", e))?;

        if !response.status().is_success() {
            return Err(SchedulerError::storage(
                "upload",
                &self.location(),
                format!("HTTP {}", response.status()),
            ));
        }

        component_debug!(ComponentId::Gateway, "☁️ Uploaded {} bytes to {}", size, self.redacted_url());
        Ok(())
    }

    fn location(&self) -> String {
        self.redacted_url()
    }
}
