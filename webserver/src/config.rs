//! Command line and environment configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use scheduler::services::blob_store::{DEFAULT_BLOB_NAME, DEFAULT_CONTAINER};
use scheduler::services::local_store::DEFAULT_DATA_FILE;
use scheduler::{BlobStore, LocalFileStore, MissingStorePolicy, WorkbookGateway, DEFAULT_RECENCY_WINDOW};

use crate::error::{WebServerError, WebServerResult};

/// Where the workbook is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Workbook file on local disk
    Local,
    /// Remote blob addressed by a SAS URL
    Blob,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "webserver")]
#[command(about = "Office hours participant rotation dashboard")]
pub struct Config {
    /// Interface to bind
    #[arg(long, env = "OFFICE_HOURS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port for HTTP server
    #[arg(long, env = "OFFICE_HOURS_PORT", default_value = "8080")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Storage backend
    #[arg(long, env = "OFFICE_HOURS_BACKEND", value_enum, default_value_t = Backend::Local)]
    pub backend: Backend,

    /// Workbook path for the local backend
    #[arg(long, env = "OFFICE_HOURS_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Account SAS URL for the blob backend
    #[arg(long, env = "OFFICE_HOURS_SAS_URL", hide_env_values = true)]
    pub sas_url: Option<String>,

    /// Blob container
    #[arg(long, env = "OFFICE_HOURS_CONTAINER", default_value = DEFAULT_CONTAINER)]
    pub container: String,

    /// Blob name inside the container
    #[arg(long, env = "OFFICE_HOURS_BLOB_NAME", default_value = DEFAULT_BLOB_NAME)]
    pub blob_name: String,

    /// How many leading history entries are excluded from selection
    #[arg(long, env = "OFFICE_HOURS_RECENCY_WINDOW", default_value_t = DEFAULT_RECENCY_WINDOW)]
    pub recency_window: usize,

    /// Dashboard files directory
    #[arg(long, default_value = "./webserver/static")]
    pub static_dir: PathBuf,

    /// Fail at startup when no workbook exists instead of starting empty
    #[arg(long)]
    pub strict_missing_store: bool,
}

impl Config {
    pub fn bind_address(&self) -> WebServerResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| WebServerError::Config(format!("Invalid bind address {}:{}: {}", self.host, self.port, e)))
    }

    pub fn missing_policy(&self) -> MissingStorePolicy {
        if self.strict_missing_store {
            MissingStorePolicy::Fail
        } else {
            MissingStorePolicy::EmptyDefaults
        }
    }

    pub fn local_gateway(&self) -> WorkbookGateway<LocalFileStore> {
        WorkbookGateway::new(LocalFileStore::new(&self.data_file)).with_missing_policy(self.missing_policy())
    }

    pub fn blob_gateway(&self) -> WebServerResult<WorkbookGateway<BlobStore>> {
        let sas_url = self
            .sas_url
            .as_deref()
            .ok_or_else(|| WebServerError::Config("--sas-url (or OFFICE_HOURS_SAS_URL) is required for the blob backend".to_string()))?;
        let store = BlobStore::new(sas_url, &self.container, &self.blob_name)?;
        Ok(WorkbookGateway::new(store).with_missing_policy(self.missing_policy()))
    }
}
