#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` enumerates the regular files below a directory in a stable,
//! platform-independent order. The sync engine drives it to collect
//! candidate paths for glob matching, so the walker deliberately stays
//! small: directories are traversal state rather than output, sibling
//! entries are sorted lexicographically before being visited, and an
//! optional depth bound lets fixed-depth globs avoid descending into
//! subtrees they can never match.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures the traversal root, the optional depth
//!   bound, and whether directory symlinks are followed.
//! - [`Walker`] implements [`Iterator`] and yields [`WalkEntry`] values
//!   depth-first. Each entry carries the absolute path, the path relative
//!   to the root, and its depth.
//! - When symlink following is enabled, canonical directory paths are
//!   tracked so cycles terminate; a symlinked directory is visited at most
//!   once.
//!
//! # Errors
//!
//! Traversal reports [`WalkError`] when the root is missing or not a
//! directory, or when reading a directory fails. Broken symlinks are
//! skipped with a diagnostic instead of aborting the walk.
//!
//! # Examples
//!
//! ```
//! use walk::WalkBuilder;
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! std::fs::create_dir(temp.path().join("locales"))?;
//! std::fs::write(temp.path().join("locales/en.yml"), b"en:\n")?;
//!
//! let mut files = Vec::new();
//! for entry in WalkBuilder::new(temp.path()).build()? {
//!     files.push(entry?.relative_path().to_path_buf());
//! }
//! assert_eq!(files, vec![std::path::PathBuf::from("locales/en.yml")]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod entry;
mod error;
mod walker;

pub use builder::WalkBuilder;
pub use entry::WalkEntry;
pub use error::{WalkError, WalkErrorKind};
pub use walker::Walker;
