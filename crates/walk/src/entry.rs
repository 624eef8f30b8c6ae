use std::path::{Path, PathBuf};

/// One regular file discovered during traversal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalkEntry {
    pub(crate) full_path: PathBuf,
    pub(crate) relative_path: PathBuf,
    pub(crate) depth: usize,
}

impl WalkEntry {
    /// Returns the absolute path of the file.
    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Returns the path relative to the traversal root.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Returns the depth below the root; direct children are at depth 1.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }
}
