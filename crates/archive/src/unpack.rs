//! Per-job archive unpacking.
//!
//! Every unpack call stages its work inside a fresh temporary directory,
//! so concurrent jobs never share a path even when their derived archive
//! names collide. The directory is removed on every exit path, success or
//! failure, when the `TempDir` drops.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::instrument;
use zip::ZipArchive;

use crate::error::{ErrorKind, Result};

/// Result of one unpack job.
///
/// The job's scratch directory lives as long as this value; dropping it
/// removes the extracted entry along with the directory.
#[derive(Debug)]
pub struct Unpacked {
    /// Local name the payload was staged under, derived from the source URL.
    pub archive_name: String,
    /// Name of the single file entry recovered from the archive.
    pub entry_name: String,
    /// Entry content, with invalid UTF-8 replaced by U+FFFD.
    pub text: String,
    entry_rel: PathBuf,
    workdir: TempDir,
}

impl Unpacked {
    /// The job's scratch directory.
    pub fn workdir(&self) -> &Path {
        self.workdir.path()
    }

    /// Path of the extracted entry inside the job directory.
    pub fn entry_path(&self) -> PathBuf {
        self.workdir.path().join(&self.entry_rel)
    }

    /// Path the archive was staged at before its removal.
    pub fn archive_path(&self) -> PathBuf {
        self.workdir.path().join(&self.archive_name)
    }
}

/// Unpack a single-entry ZIP payload and recover its text content.
///
/// Sequence: stage the payload under `archive_name` in a fresh temporary
/// directory, open it as a ZIP archive, require exactly one file entry
/// (directory entries are ignored), extract that entry, delete the staged
/// archive, and read the entry back as text.
///
/// # Errors
///
/// - `Corrupt` when the payload is not a readable ZIP archive,
/// - `ContentsUnexpected` when the file entry count is not exactly one,
/// - `Storage` for filesystem failures at any step.
#[instrument(skip(payload), fields(payload_size = payload.len(), entry))]
pub fn unpack(archive_name: &str, payload: &[u8]) -> Result<Unpacked> {
    let workdir = TempDir::new().map_err(ErrorKind::from)?;
    let archive_path = workdir.path().join(archive_name);
    fs::write(&archive_path, payload).map_err(ErrorKind::from)?;

    let staged = File::open(&archive_path).map_err(ErrorKind::from)?;
    let mut archive = ZipArchive::new(staged).map_err(|err| ErrorKind::Corrupt(err.to_string()))?;

    let mut file_indices = Vec::new();
    for index in 0..archive.len() {
        let entry = archive.by_index(index).map_err(|err| ErrorKind::Corrupt(err.to_string()))?;
        if !entry.is_dir() {
            file_indices.push(index);
        }
    }
    if file_indices.len() != 1 {
        exn::bail!(ErrorKind::ContentsUnexpected(file_indices.len()));
    }

    let (entry_name, entry_rel) = {
        let mut entry = archive.by_index(file_indices[0]).map_err(|err| ErrorKind::Corrupt(err.to_string()))?;
        let entry_name = entry.name().to_string();
        // Reject entries that would escape the job directory.
        let Some(entry_rel) = entry.enclosed_name() else {
            exn::bail!(ErrorKind::Corrupt(format!("unsafe entry path {entry_name:?}")));
        };
        let dest = workdir.path().join(&entry_rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(ErrorKind::from)?;
        }
        let mut output = File::create(&dest).map_err(ErrorKind::from)?;
        // Decode failures mid-stream surface here.
        io::copy(&mut entry, &mut output).map_err(|err| ErrorKind::Corrupt(err.to_string()))?;
        (entry_name, entry_rel)
    };

    fs::remove_file(&archive_path).map_err(ErrorKind::from)?;

    let bytes = fs::read(workdir.path().join(&entry_rel)).map_err(ErrorKind::from)?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    tracing::Span::current().record("entry", entry_name.as_str());

    Ok(Unpacked {
        archive_name: archive_name.to_string(),
        entry_name,
        text,
        entry_rel,
        workdir,
    })
}
