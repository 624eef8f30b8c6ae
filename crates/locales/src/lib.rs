#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `locales` carries the data model the sync engine exchanges with its
//! collaborators: the authoritative [`RemoteLocale`] list fetched from the
//! translation service, the [`FileFormat`] registry entries, the
//! [`LocaleFile`] records the engine produces for upload and download, and
//! the [`TagSet`] parsed from configuration. On top of the model it
//! implements correlation: deciding which remote locale, if any, a
//! discovered local file corresponds to.
//!
//! # Design
//!
//! - The remote-facing types derive `serde::Deserialize` because they
//!   arrive as JSON from the API client. The engine never mutates the
//!   remote list, it only queries it.
//! - Correlation is a set of pure functions. "No match" is a normal
//!   result that callers turn into a locale-creation decision, never an
//!   error.
//!
//! # Examples
//!
//! ```
//! use locales::{LocaleFile, RemoteLocale, find_remote_locale};
//!
//! let remotes = vec![RemoteLocale {
//!     id: "ab-12".into(),
//!     name: "German".into(),
//!     code: "de".into(),
//! }];
//!
//! let mut file = LocaleFile::new("locales/de.yml".into());
//! file.locale_code = "de".into();
//!
//! let found = find_remote_locale(&file, None, &remotes).expect("matches");
//! assert_eq!(found.id, "ab-12");
//! ```

mod correlate;
mod file;
mod format;
mod remote;
mod tags;

pub use correlate::{correlate, find_remote_locale, locale_by_identifier, should_create_locale};
pub use file::LocaleFile;
pub use format::FileFormat;
pub use remote::RemoteLocale;
pub use tags::TagSet;
