use std::path::PathBuf;

/// Resolved correspondence between one local path and its locale identity.
///
/// Created by push-side discovery or pull-side expansion and consumed by
/// the upload/download collaborator. Metadata extracted from the path is
/// stored as plain strings; fields a pattern did not provide stay empty.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LocaleFile {
    /// Absolute path of the local file.
    pub path: PathBuf,
    /// Locale name extracted from the path or taken from the remote
    /// locale.
    pub locale_name: String,
    /// Locale code extracted from the path or taken from the remote
    /// locale.
    pub locale_code: String,
    /// Tag extracted from the path or substituted during expansion.
    pub tag: String,
    /// API name of the file format the entry was configured with.
    pub file_format: String,
    /// Canonical remote locale id, set once correlation succeeds.
    pub locale_id: Option<String>,
    /// Whether a matching locale already exists remotely.
    pub remote_exists: bool,
}

impl LocaleFile {
    /// Creates an empty record for the given path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    /// Reports whether the record carries any locale-identifying
    /// information.
    #[must_use]
    pub fn has_locale_identity(&self) -> bool {
        !self.locale_name.is_empty() || !self.locale_code.is_empty()
    }
}
