use std::path::Path;

use locales::{FileFormat, LocaleFile, RemoteLocale, TagSet};
use patterns::PathPattern;

use crate::discover::FileDiscoverer;
use crate::error::EngineResult;

/// Configuration parameters accompanying a push source pattern.
#[derive(Clone, Debug, Default)]
pub struct SourceParams {
    /// Explicit remote locale id overriding path extraction.
    pub locale_id: Option<String>,
    /// Tags configured for upload.
    pub tags: TagSet,
}

/// One configured push entry: a pattern plus its parameters.
///
/// Construction validates eagerly, so a `Source` in hand is known to be
/// well-formed before any filesystem work starts.
#[derive(Clone, Debug)]
pub struct Source {
    pattern: PathPattern,
    format: Option<FileFormat>,
    params: SourceParams,
}

impl Source {
    /// Parses and validates a push source entry.
    ///
    /// # Errors
    ///
    /// Returns the pattern compilation or precondition error verbatim;
    /// see [`patterns::validate_source`] for the individual checks.
    pub fn new(
        raw: &str,
        format: Option<FileFormat>,
        params: SourceParams,
    ) -> EngineResult<Self> {
        let pattern = PathPattern::parse(raw)?;
        let declared = format
            .as_ref()
            .map(|format| format.extension.as_str())
            .filter(|extension| !extension.is_empty());
        patterns::validate_source(&pattern, declared, params.tags.as_slice())?;
        Ok(Self {
            pattern,
            format,
            params,
        })
    }

    /// Returns the validated pattern.
    #[must_use]
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// Enumerates matching files under `root` and resolves the locale
    /// metadata each path encodes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError`] when enumeration fails; individual
    /// files that fail to resolve are skipped with a diagnostic.
    pub fn discover(&self, root: &Path) -> EngineResult<Vec<LocaleFile>> {
        FileDiscoverer::new(&self.pattern, root, self.format.as_ref()).discover()
    }

    /// Correlates discovered files against the remote locale list,
    /// setting `remote_exists` and the canonical locale id in place.
    pub fn correlate(&self, files: &mut [LocaleFile], remotes: &[RemoteLocale]) {
        for file in files.iter_mut() {
            locales::correlate(file, self.params.locale_id.as_deref(), remotes);
        }
    }

    /// Decides whether the uploader should create a new remote locale for
    /// the file.
    #[must_use]
    pub fn should_create_locale(&self, file: &LocaleFile) -> bool {
        locales::should_create_locale(file, self.format.as_ref())
    }

    /// Tag list for uploading one file: the configured tags with the
    /// file's own resolved tag merged in.
    #[must_use]
    pub fn upload_tags(&self, file: &LocaleFile) -> TagSet {
        let mut tags = self.params.tags.clone();
        tags.merge(&file.tag);
        tags
    }
}
