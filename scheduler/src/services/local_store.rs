//! Local file object store
//!
//! Keeps the workbook at a path on disk. Writes go to a sibling temp file
//! that is renamed over the target so readers never see a partial file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shared::{component_debug, ComponentId};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{SchedulerError, SchedulerResult};
use crate::traits::ObjectStore;

/// Default workbook file name
pub const DEFAULT_DATA_FILE: &str = "office_hours.xlsx";

pub struct LocalFileStore {
    path: PathBuf,
}

impl LocalFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for LocalFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

#[async_trait]
impl ObjectStore for LocalFileStore {
    async fn read(&self) -> SchedulerResult<Vec<u8>> {
        match fs::read(&self.path).await {
            Ok(bytes) => {
                component_debug!(ComponentId::Gateway, "📂 Read {} bytes from {}", bytes.len(), self.path.display());
                Ok(bytes)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(SchedulerError::MissingStore {
                location: self.location(),
            }),
            Err(e) => Err(SchedulerError::storage("read", &self.location(), e)),
        }
    }

    async fn write(&self, bytes: Vec<u8>) -> SchedulerResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SchedulerError::storage("create directory", &parent.display().to_string(), e))?;
        }

        let temp_path = self.temp_path();
        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| SchedulerError::storage("create", &temp_path.display().to_string(), e))?;
        file.write_all(&bytes)
            .await
            .map_err(|e| SchedulerError::storage("write", &temp_path.display().to_string(), e))?;
        file.sync_all()
            .await
            .map_err(|e| SchedulerError::storage("sync", &temp_path.display().to_string(), e))?;
        drop(file);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| SchedulerError::storage("rename", &self.location(), e))?;

        component_debug!(ComponentId::Gateway, "💾 Wrote {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
