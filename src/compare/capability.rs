//! Injected share/export collaborators
//!
//! The comparison screen only talks to these traits, so it stays testable
//! without a share sheet or a filesystem.

use crate::error::CapabilityError;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// What gets handed to a share target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn comparison(url: impl Into<String>) -> Self {
        Self {
            title: "Insurance Policy Comparison".to_string(),
            text: "Check out this insurance policy comparison".to_string(),
            url: url.into(),
        }
    }
}

pub trait Share {
    /// Returns whether the payload was delivered
    fn share(&self, payload: &SharePayload) -> Result<bool, CapabilityError>;
}

/// Reference to an exported document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub path: PathBuf,
    pub bytes: usize,
}

pub trait DocumentExporter {
    fn export_document(&self, content: &str) -> Result<FileHandle, CapabilityError>;
}

/// Try the primary share target, falling back when it is unavailable
pub fn share_with_fallback(
    primary: &dyn Share,
    fallback: &dyn Share,
    payload: &SharePayload,
) -> Result<bool, CapabilityError> {
    match primary.share(payload) {
        Err(CapabilityError::ShareUnavailable) => {
            log::debug!("share target unavailable, using fallback");
            fallback.share(payload)
        }
        other => other,
    }
}

/// Share target that is never available (no native share sheet)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoShare;

impl Share for NoShare {
    fn share(&self, _payload: &SharePayload) -> Result<bool, CapabilityError> {
        Err(CapabilityError::ShareUnavailable)
    }
}

/// Fallback that "copies" the link, keeping the last copied text
#[derive(Debug, Default)]
pub struct ClipboardShare {
    copied: Mutex<Option<String>>,
}

impl ClipboardShare {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_copied(&self) -> Option<String> {
        self.copied.lock().ok().and_then(|c| c.clone())
    }
}

impl Share for ClipboardShare {
    fn share(&self, payload: &SharePayload) -> Result<bool, CapabilityError> {
        let mut copied = self
            .copied
            .lock()
            .map_err(|_| CapabilityError::ShareUnavailable)?;
        *copied = Some(payload.url.clone());
        Ok(true)
    }
}

/// Writes exported documents into a directory under a fixed file name
#[derive(Debug, Clone)]
pub struct FileExporter {
    dir: PathBuf,
    file_name: String,
}

impl FileExporter {
    pub fn new(dir: impl AsRef<Path>, file_name: impl Into<String>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            file_name: file_name.into(),
        }
    }

    /// Exporter for `policy-comparison.txt` in `dir`
    pub fn comparison_report(dir: impl AsRef<Path>) -> Self {
        Self::new(dir, "policy-comparison.txt")
    }
}

impl DocumentExporter for FileExporter {
    fn export_document(&self, content: &str) -> Result<FileHandle, CapabilityError> {
        let path = self.dir.join(&self.file_name);
        fs::write(&path, content).map_err(|source| CapabilityError::Export {
            path: path.clone(),
            source,
        })?;
        log::info!("Exported {} bytes to {}", content.len(), path.display());
        Ok(FileHandle {
            path,
            bytes: content.len(),
        })
    }
}
