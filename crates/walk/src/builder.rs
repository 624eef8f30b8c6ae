use std::fs;
use std::path::PathBuf;

use crate::error::WalkError;
use crate::walker::Walker;

/// Configures a file traversal rooted at a directory.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    root: PathBuf,
    follow_symlinks: bool,
    max_depth: Option<usize>,
}

impl WalkBuilder {
    /// Creates a builder that will traverse the given root directory.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            follow_symlinks: false,
            max_depth: None,
        }
    }

    /// Configures whether directory symlinks are descended into.
    ///
    /// Canonical paths are tracked while following so that cycles
    /// terminate. Symlinks pointing at regular files are yielded as files
    /// when following is enabled and skipped otherwise.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Bounds the traversal depth. Entries directly below the root are at
    /// depth 1; directories at the bound are not descended into.
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Builds the walker, verifying that the root is a readable directory.
    pub fn build(self) -> Result<Walker, WalkError> {
        let root = absolutize(self.root)?;
        let metadata =
            fs::metadata(&root).map_err(|error| WalkError::root(root.clone(), error))?;
        if !metadata.is_dir() {
            return Err(WalkError::not_a_directory(root));
        }

        Walker::start(root, self.follow_symlinks, self.max_depth)
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf, WalkError> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd =
        std::env::current_dir().map_err(|error| WalkError::root(PathBuf::from("."), error))?;
    Ok(cwd.join(path))
}
