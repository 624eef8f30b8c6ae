#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` is the entry point of the locale file pattern resolution
//! engine. A configured [`Source`] answers the push question: which local
//! files match the pattern, and which locale does each of them encode? A
//! configured [`Target`] answers the pull question: given the remote
//! locale list and the configured tags, which destination path should each
//! downloaded resource land at?
//!
//! Both directions share the same [`patterns::PathPattern`] machinery.
//! Push enumerates candidates with the pattern's globbing form over the
//! deterministic [`walk`] traversal and extracts metadata per file; pull
//! substitutes concrete values into the pattern, one path per
//! `(locale, tag)` combination.
//!
//! # Design
//!
//! - Validation runs eagerly in [`Source::new`] and [`Target::new`], so a
//!   misconfigured entry fails before any filesystem or network work.
//! - Discovery is resilient per file: a candidate that fails placeholder
//!   resolution is skipped with a diagnostic, never fatal.
//! - The engine is synchronous and treats the filesystem as read-only;
//!   transfers and directory creation belong to the calling collaborator.
//!
//! # Errors
//!
//! [`EngineError`] wraps the pattern, validation, and traversal errors of
//! the underlying crates and adds the pull-side failure of an explicit
//! locale identifier that matches nothing remote.
//!
//! # Examples
//!
//! ```no_run
//! use engine::{Source, SourceParams};
//! use std::path::Path;
//!
//! let source = Source::new("./config/locales/**/*.yml", None, SourceParams::default())?;
//! let files = source.discover(Path::new("."))?;
//! for file in &files {
//!     println!("{} -> {}", file.path.display(), file.locale_code);
//! }
//! # Ok::<(), engine::EngineError>(())
//! ```

mod discover;
mod error;
mod expand;
mod source;
mod target;

pub use discover::{FileDiscoverer, TraversalMode, traversal_mode};
pub use error::{EngineError, EngineResult};
pub use expand::TargetExpander;
pub use source::{Source, SourceParams};
pub use target::{Target, TargetParams};
