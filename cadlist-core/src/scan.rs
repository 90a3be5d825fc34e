//! Directory scanning.

use std::{fmt, fs, path::Path};

use tracing::{debug, warn};

use crate::{
    error::{Result, ScanError},
    paths::SOURCE_EXTENSION,
};

/// A matched file name with its `.cpp` extension removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseName(String);

impl BaseName {
    /// Derive a base name from a directory entry name.
    ///
    /// The suffix match is case-sensitive: `x.CPP` does not match. A name
    /// that is exactly `.cpp` matches and yields an empty base name.
    pub fn from_file_name(name: &str) -> Option<Self> {
        name.strip_suffix(SOURCE_EXTENSION)
            .map(|base| Self(base.to_string()))
    }
}

impl fmt::Display for BaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collect the base names of all `.cpp` entries directly inside `dir`.
///
/// Names are returned in directory enumeration order, which depends on the
/// filesystem. Only entry names are inspected, so a subdirectory named
/// `foo.cpp` is listed like a file would be.
pub fn scan(dir: &Path) -> Result<Vec<BaseName>> {
    if !dir.is_dir() {
        return Err(ScanError::InvalidDirectory {
            path: dir.to_path_buf(),
        });
    }

    let read_dir_error = |source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    let mut entries = 0usize;
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        entries += 1;

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            warn!(entry = ?file_name, "skipping entry with non UTF-8 name");
            continue;
        };
        if let Some(base) = BaseName::from_file_name(name) {
            names.push(base);
        }
    }

    debug!(
        dir = %dir.display(),
        entries,
        matched = names.len(),
        "scanned directory"
    );

    if names.is_empty() {
        return Err(ScanError::NoMatchingFiles {
            path: dir.to_path_buf(),
        });
    }

    Ok(names)
}
