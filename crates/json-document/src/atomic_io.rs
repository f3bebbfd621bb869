//! Atomic file replacement.
//!
//! The new content is written to a hidden sibling file, flushed to disk and
//! renamed over the target. A crash mid-write leaves the previous document in
//! place.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::Utf8Path;
use cap_std::fs::{Dir, OpenOptions};

use crate::error::DocumentError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replaces `file_name` inside `dir` with `contents`.
///
/// `document_path` is only used to label errors.
pub(crate) fn replace_file(
    dir: &Dir,
    file_name: &str,
    document_path: &Utf8Path,
    contents: &str,
) -> Result<(), DocumentError> {
    let tmp_name = temp_file_name(file_name);

    write_temp_file(dir, &tmp_name, document_path, contents)?;
    if let Err(err) = rename_over(dir, &tmp_name, file_name) {
        // The temp file is useless once the rename has failed.
        if dir.remove_file(&tmp_name).is_err() {
            // Ignore cleanup failures.
        }
        return Err(write_error(document_path, &err));
    }
    sync_directory(dir);

    Ok(())
}

fn temp_file_name(file_name: &str) -> String {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(".{file_name}.tmp.{}.{nanos}.{counter}", std::process::id())
}

fn write_temp_file(
    dir: &Dir,
    tmp_name: &str,
    document_path: &Utf8Path,
    contents: &str,
) -> Result<(), DocumentError> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(tmp_name, &options)
        .map_err(|err| write_error(document_path, &err))?;

    let outcome = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.sync_all());
    if let Err(err) = outcome {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(write_error(document_path, &err));
    }

    Ok(())
}

#[cfg(windows)]
fn rename_over(dir: &Dir, tmp_name: &str, file_name: &str) -> io::Result<()> {
    // Windows refuses to rename onto an existing file.
    match dir.remove_file(file_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, file_name)
}

#[cfg(not(windows))]
fn rename_over(dir: &Dir, tmp_name: &str, file_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, file_name)
}

fn sync_directory(dir: &Dir) {
    // Best effort: some platforms cannot fsync a directory handle.
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Ignore sync failures.
    }
}

fn write_error(document_path: &Utf8Path, err: &io::Error) -> DocumentError {
    DocumentError::Write {
        path: document_path.to_path_buf(),
        message: err.to_string(),
    }
}
