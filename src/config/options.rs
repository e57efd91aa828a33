// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::DEFAULT_HEADER_ROW;
use crate::core::csv::Delim;
use crate::core::xlsx::is_workbook;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub load: LoadOptions,
    /// Delimiter used when rows leave the app (CLI output / export).
    pub export_format: Delim,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            load: LoadOptions::default(),
            export_format: Delim::Csv,
        }
    }
}

/// How an input file is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Delimited(Delim),
    /// First worksheet of an Excel/ODS workbook
    Workbook,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    pub path: Option<PathBuf>,
    /// Explicit delimiter; `None` means "guess from the extension".
    pub format: Option<Delim>,
    pub header_row: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            path: None,
            format: None,
            header_row: DEFAULT_HEADER_ROW,
        }
    }
}

impl LoadOptions {
    pub fn for_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
            ..Self::default()
        }
    }

    /// Delimiter to parse with: explicit choice, else extension, else CSV.
    pub fn delim(&self) -> Delim {
        self.format
            .or_else(|| self.path.as_deref().and_then(Delim::from_path))
            .unwrap_or(Delim::Csv)
    }

    /// Workbook by extension unless a delimiter was forced.
    pub fn input_format(&self) -> InputFormat {
        match (self.format, self.path.as_deref()) {
            (None, Some(p)) if is_workbook(p) => InputFormat::Workbook,
            _ => InputFormat::Delimited(self.delim()),
        }
    }
}
