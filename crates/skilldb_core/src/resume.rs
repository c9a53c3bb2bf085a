//! Résumé file storage.
//!
//! # Responsibility
//! - Own the résumé directory and the stored file naming scheme.
//! - Return the path string the caller records in `resume_path`.
//!
//! # Invariants
//! - Stored names are `{employee_id}_{original}` with whitespace runs in the
//!   original name collapsed to `_` and directory parts dropped.
//! - Writing a file and writing the record are independent; a failure in
//!   between can leave an orphaned file or a dangling `resume_path`.

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Upload types accepted by the résumé form.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx"];

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

#[derive(Debug)]
pub enum ResumeError {
    Io { path: PathBuf, source: io::Error },
    UnsupportedExtension(String),
    InvalidFileName(String),
}

impl Display for ResumeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "résumé I/O failed at `{}`: {source}", path.display()),
            Self::UnsupportedExtension(name) => write!(
                f,
                "unsupported résumé file `{name}`; expected one of {}",
                ALLOWED_EXTENSIONS.join("|")
            ),
            Self::InvalidFileName(name) => write!(f, "invalid résumé file name `{name}`"),
        }
    }
}

impl Error for ResumeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Directory-backed résumé storage.
#[derive(Debug, Clone)]
pub struct ResumeStore {
    dir: PathBuf,
}

impl ResumeStore {
    /// Uses `dir`, creating it when absent.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, ResumeError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| ResumeError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `bytes` and returns the stored path as recorded in the table.
    pub fn save(
        &self,
        employee_id: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<String, ResumeError> {
        let path = self.dir.join(stored_file_name(employee_id, original_name)?);
        fs::write(&path, bytes).map_err(|source| ResumeError::Io {
            path: path.clone(),
            source,
        })?;
        info!(
            "event=resume_save module=resume status=ok employee_id={employee_id} bytes={}",
            bytes.len()
        );
        Ok(path.to_string_lossy().into_owned())
    }

    /// Copies an existing file into the store under its sanitized name.
    pub fn save_from_path(&self, employee_id: &str, source_path: &Path) -> Result<String, ResumeError> {
        let original_name = source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| ResumeError::InvalidFileName(source_path.display().to_string()))?;
        let bytes = fs::read(source_path).map_err(|source| ResumeError::Io {
            path: source_path.to_path_buf(),
            source,
        })?;
        self.save(employee_id, &original_name, &bytes)
    }
}

/// Builds the stored file name for an upload.
pub fn stored_file_name(employee_id: &str, original_name: &str) -> Result<String, ResumeError> {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();
    if base.is_empty() || base == "." || base == ".." {
        return Err(ResumeError::InvalidFileName(original_name.to_string()));
    }

    let extension = Path::new(base)
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    match extension {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => return Err(ResumeError::UnsupportedExtension(original_name.to_string())),
    }

    let id = employee_id.trim().replace(['/', '\\'], "_");
    if id.is_empty() {
        return Err(ResumeError::InvalidFileName(original_name.to_string()));
    }
    let sanitized = WHITESPACE_RE.replace_all(base, "_");
    Ok(format!("{id}_{sanitized}"))
}
