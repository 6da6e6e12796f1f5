use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// On-disk layout of a batch of trials:
///
/// ```text
/// <runs_dir>/run01/<label_filename>
/// <runs_dir>/run02/<label_filename>
/// ...
/// ```
#[derive(Clone, Debug)]
pub struct TrialLayout {
    runs_dir: PathBuf,
    label_filename: String,
}

/// Resolved paths of one existing trial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialPaths {
    pub name: String,
    pub dir: PathBuf,
    pub label_file: PathBuf,
}

impl TrialLayout {
    pub fn new(runs_dir: impl Into<PathBuf>, label_filename: impl Into<String>) -> Self {
        Self {
            runs_dir: runs_dir.into(),
            label_filename: label_filename.into(),
        }
    }

    pub fn runs_dir(&self) -> &Path {
        &self.runs_dir
    }

    /// Folder name of the 1-based trial `index`: `run01`, `run02`, ...
    pub fn trial_name(index: usize) -> String {
        format!("run{index:02}")
    }

    /// Fails with `MissingRunRoot` unless the run root is a directory.
    pub fn ensure_root(&self) -> Result<()> {
        if self.runs_dir.is_dir() {
            Ok(())
        } else {
            Err(Error::MissingRunRoot(self.runs_dir.clone()))
        }
    }

    /// Check that the trial directory and its label file exist.
    pub fn resolve(&self, index: usize) -> Result<TrialPaths> {
        let name = Self::trial_name(index);
        let dir = self.runs_dir.join(&name);
        if !dir.is_dir() {
            return Err(Error::MissingTrialDirectory(dir));
        }
        let label_file = dir.join(&self.label_filename);
        if !label_file.is_file() {
            return Err(Error::MissingLabelFile(label_file));
        }
        Ok(TrialPaths {
            name,
            dir,
            label_file,
        })
    }
}
