use crate::error::{Result, VoucherError};
use crate::models::VoucherRecord;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Append-only log of generated vouchers, stored as one JSON array.
///
/// Every append reads the whole log and rewrites it; there is no locking,
/// the last writer wins. The new log is staged next to the old one and
/// renamed over it, so an interrupted append leaves the previous log intact.
pub struct VoucherHistoryStore {
    path: PathBuf,
}

impl VoucherHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add `record` to the end of the log
    pub async fn append(&self, record: &VoucherRecord) -> Result<()> {
        let mut log = self.read_log().await?;
        log.push(record.clone());

        let json = serde_json::to_vec_pretty(&log)
            .map_err(|source| VoucherError::HistoryEncode { source })?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| self.io_error(source))?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || replace_file(&dir, &path, &json))
            .await
            .map_err(|e| self.io_error(std::io::Error::new(std::io::ErrorKind::Other, e)))?
            .map_err(|source| self.io_error(source))?;

        info!("💾 Saved voucher to history ({} entries)", log.len());
        Ok(())
    }

    /// All vouchers, most recent first; empty when nothing was saved yet
    pub async fn list(&self) -> Result<Vec<VoucherRecord>> {
        let mut log = self.read_log().await?;
        log.reverse();
        Ok(log)
    }

    async fn read_log(&self) -> Result<Vec<VoucherRecord>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No history log at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|source| VoucherError::HistoryCorrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn io_error(&self, source: std::io::Error) -> VoucherError {
        VoucherError::History {
            path: self.path.clone(),
            source,
        }
    }
}

/// Stage `contents` in `dir` and rename it over `path`
fn replace_file(dir: &Path, path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    staged.write_all(contents)?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}
