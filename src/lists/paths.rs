use std::path::{Path, PathBuf};

use crate::lists::defs::UNKNOWN_ION;

/// Layout of a reference-data directory.
///
/// ```text
/// <root>/lists/<ion>_lines.dat
/// <root>/lists/UNKNWNs.dat
/// <root>/NIST/<ion>_vacuum.ascii
/// <root>/sources/arcline_sources.ascii
/// <root>/sources/by_hand_list.ascii
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn lists_dir(&self) -> PathBuf {
        self.root.join("lists")
    }

    pub fn nist_dir(&self) -> PathBuf {
        self.root.join("NIST")
    }

    pub fn sources_dir(&self) -> PathBuf {
        self.root.join("sources")
    }

    pub fn line_file(&self, ion: &str) -> PathBuf {
        self.lists_dir().join(format!("{ion}_lines.dat"))
    }

    pub fn unknown_file(&self) -> PathBuf {
        self.lists_dir().join(format!("{UNKNOWN_ION}s.dat"))
    }

    pub fn nist_file(&self, ion: &str) -> PathBuf {
        self.nist_dir().join(format!("{ion}_vacuum.ascii"))
    }

    pub fn source_table_file(&self) -> PathBuf {
        self.sources_dir().join("arcline_sources.ascii")
    }

    pub fn by_hand_file(&self) -> PathBuf {
        self.sources_dir().join("by_hand_list.ascii")
    }
}
