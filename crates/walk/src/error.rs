use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error returned when traversal cannot start or continue.
#[derive(Debug)]
pub struct WalkError {
    kind: WalkErrorKind,
}

impl WalkError {
    pub(crate) fn root(path: PathBuf, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::Root { path, source },
        }
    }

    pub(crate) fn not_a_directory(path: PathBuf) -> Self {
        Self {
            kind: WalkErrorKind::NotADirectory { path },
        }
    }

    pub(crate) fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::ReadDir { path, source },
        }
    }

    pub(crate) fn metadata(path: PathBuf, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::Metadata { path, source },
        }
    }

    /// Returns the specific failure that stopped the walk.
    #[must_use]
    pub fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Returns the filesystem path the failure refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match &self.kind {
            WalkErrorKind::Root { path, .. }
            | WalkErrorKind::NotADirectory { path }
            | WalkErrorKind::ReadDir { path, .. }
            | WalkErrorKind::Metadata { path, .. } => path,
        }
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WalkErrorKind::Root { path, source } => {
                write!(f, "cannot walk '{}': {}", path.display(), source)
            }
            WalkErrorKind::NotADirectory { path } => {
                write!(f, "cannot walk '{}': not a directory", path.display())
            }
            WalkErrorKind::ReadDir { path, source } => {
                write!(f, "cannot list directory '{}': {}", path.display(), source)
            }
            WalkErrorKind::Metadata { path, source } => {
                write!(f, "cannot inspect '{}': {}", path.display(), source)
            }
        }
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            WalkErrorKind::Root { source, .. }
            | WalkErrorKind::ReadDir { source, .. }
            | WalkErrorKind::Metadata { source, .. } => Some(source),
            WalkErrorKind::NotADirectory { .. } => None,
        }
    }
}

/// Classification of traversal failures.
#[derive(Debug)]
pub enum WalkErrorKind {
    /// The traversal root is missing or unreadable.
    Root {
        /// The configured root.
        path: PathBuf,
        /// Underlying error from the operating system.
        source: io::Error,
    },
    /// The traversal root exists but is not a directory.
    NotADirectory {
        /// The configured root.
        path: PathBuf,
    },
    /// A directory's contents could not be listed.
    ReadDir {
        /// The directory that failed.
        path: PathBuf,
        /// Underlying error from the operating system.
        source: io::Error,
    },
    /// An entry's metadata could not be queried.
    Metadata {
        /// The entry that failed.
        path: PathBuf,
        /// Underlying error from the operating system.
        source: io::Error,
    },
}
