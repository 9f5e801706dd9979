// SPDX-License-Identifier: MPL-2.0
//! Markup fragments stored as files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::application::port::FragmentSource;
use crate::error::{Error, Result};

/// A fragment read from a file on each fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFragment {
    path: PathBuf,
}

impl FileFragment {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FragmentSource for FileFragment {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .map_err(|e| Error::Fragment(format!("{}: {e}", self.path.display())))
    }
}
