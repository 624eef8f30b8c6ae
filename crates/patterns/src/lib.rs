#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `patterns` turns a user-supplied path template such as
//! `./config/locales/<locale_code>/<tag>.yml` into the two derived forms the
//! sync engine needs: an anchored matcher that extracts placeholder values
//! from concrete paths, and a globbing form used to enumerate candidate
//! files. Patterns mix literal text with the wildcards `*` and `**` and the
//! named placeholders `<locale_name>`, `<locale_code>`, and `<tag>`, each
//! standing for one path component's worth of locale metadata.
//!
//! # Design
//!
//! - [`PathPattern`] is the immutable value built once per configured
//!   source or target entry. Parsing tokenizes the raw string into a
//!   [`Segment`] sequence and eagerly compiles the cached matching forms;
//!   the heavy lifting happens exactly once.
//! - Placeholder extraction uses synthetic capture group names (`p0`,
//!   `p1`, ...) with a side table back to the logical [`Placeholder`] kind,
//!   because regex engines reject duplicate named groups. When one kind
//!   occurs several times, resolution folds the captures together and
//!   requires them to agree.
//! - [`validate_source`] and [`validate_target`] run the structural and
//!   parameter checks that must pass before any filesystem or network work
//!   begins. Each check produces a distinct, user-actionable error.
//!
//! # Invariants
//!
//! - A compiled matcher only accepts full-string matches; partial matches
//!   never resolve.
//! - `**` is recognized before `*`, so the stars inside a recursive
//!   wildcard are never counted as bare wildcards.
//! - A bare `*` in the matching form is path-unaware and may span directory
//!   separators; placeholders always capture exactly one path component.
//! - Resolution of a pattern without placeholders succeeds trivially with
//!   an empty value map.
//!
//! # Errors
//!
//! [`PatternError`] reports strings that cannot be compiled (empty input,
//! repeated `**`, adjacent wildcards). [`ValidateError`] reports
//! precondition violations with the offending pattern in the message.
//! [`ResolveError`] reports paths that do not match or placeholder
//! repetitions that disagree with themselves. All errors are values; the
//! crate never panics on user input.
//!
//! # Examples
//!
//! ```
//! use patterns::{PathPattern, Placeholder};
//!
//! let pattern = PathPattern::parse("./locales/<locale_code>/strings.yml")?;
//! let values = pattern.resolve("locales/de/strings.yml")?;
//! assert_eq!(values.get(Placeholder::LocaleCode), Some("de"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod compile;
mod error;
mod pattern;
mod resolve;
mod segment;
mod validate;

pub use error::{PatternError, PatternErrorKind};
pub use pattern::PathPattern;
pub use resolve::{ResolveError, ResolveErrorKind, ResolvedPlaceholders};
pub use segment::{Placeholder, Segment};
pub use validate::{ValidateError, ValidateErrorKind, validate_source, validate_target};
