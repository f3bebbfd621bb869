//! The on-disk JSON document handle.

use std::io;
use std::path::Path;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::atomic_io::replace_file;
use crate::error::DocumentError;

/// A JSON document stored as a single file.
///
/// The handle keeps the parent directory open, so later reads and writes are
/// scoped to that directory even if the process changes its working
/// directory.
#[derive(Debug)]
pub struct JsonDocument {
    dir: Dir,
    file_name: String,
    path: Utf8PathBuf,
}

impl JsonDocument {
    /// Opens the document at `path`, creating the parent directory when it
    /// does not exist yet.
    ///
    /// The file itself is not created; see [`JsonDocument::read_or_init`].
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NonUtf8Path`] or [`DocumentError::NotAFile`]
    /// for unusable paths and [`DocumentError::Open`] when the directory
    /// cannot be created or opened.
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        let path = Utf8Path::from_path(path).ok_or_else(|| DocumentError::NonUtf8Path {
            path: path.to_path_buf(),
        })?;
        let Some(Utf8Component::Normal(file_name)) = path.components().next_back() else {
            return Err(DocumentError::NotAFile {
                path: path.to_path_buf(),
            });
        };
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };

        let dir = open_parent(parent).map_err(|err| DocumentError::Open {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

        Ok(Self {
            dir,
            file_name: file_name.to_owned(),
            path: path.to_path_buf(),
        })
    }

    /// Path the document was opened with.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Returns `true` when the document file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.dir.exists(&self.file_name)
    }

    /// Reads and decodes the document.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Read`] when the file cannot be read and
    /// [`DocumentError::Parse`] when its content does not decode as `T`.
    pub fn read<T: DeserializeOwned>(&self) -> Result<Option<T>, DocumentError> {
        let contents = match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(DocumentError::Read {
                    path: self.path.clone(),
                    message: err.to_string(),
                });
            }
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|err| DocumentError::Parse {
                path: self.path.clone(),
                message: err.to_string(),
            })
    }

    /// Reads the document, first writing `T::default()` when it is missing.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`JsonDocument::read`] and
    /// [`JsonDocument::write`].
    pub fn read_or_init<T>(&self) -> Result<T, DocumentError>
    where
        T: DeserializeOwned + Serialize + Default,
    {
        if let Some(value) = self.read()? {
            return Ok(value);
        }
        let initial = T::default();
        self.write(&initial)?;
        Ok(initial)
    }

    /// Replaces the whole document with the pretty-printed JSON of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Serialize`] when `value` cannot be encoded and
    /// [`DocumentError::Write`] when the file cannot be replaced.
    pub fn write<T: Serialize>(&self, value: &T) -> Result<(), DocumentError> {
        let contents =
            serde_json::to_string_pretty(value).map_err(|err| DocumentError::Serialize {
                path: self.path.clone(),
                message: err.to_string(),
            })?;
        replace_file(&self.dir, &self.file_name, &self.path, &contents)
    }
}

fn open_parent(parent: &Utf8Path) -> io::Result<Dir> {
    Dir::create_ambient_dir_all(parent, ambient_authority())?;
    Dir::open_ambient_dir(parent, ambient_authority())
}
