use std::path::Path;

use locales::{FileFormat, LocaleFile, RemoteLocale, TagSet};
use patterns::PathPattern;

use crate::error::{EngineError, EngineResult};
use crate::expand::TargetExpander;

/// Configuration parameters accompanying a pull target pattern.
#[derive(Clone, Debug, Default)]
pub struct TargetParams {
    /// Explicit locale identifier selecting a single remote locale.
    pub locale_id: Option<String>,
    /// Tags to expand a `<tag>` placeholder over.
    pub tags: TagSet,
}

/// One configured pull entry: a pattern plus its parameters.
///
/// Construction validates eagerly; in particular a target must carry
/// exactly one source of locale information, either the explicit
/// identifier or a locale placeholder in the pattern.
#[derive(Clone, Debug)]
pub struct Target {
    pattern: PathPattern,
    format: Option<FileFormat>,
    params: TargetParams,
}

impl Target {
    /// Parses and validates a pull target entry.
    ///
    /// # Errors
    ///
    /// Returns the pattern compilation or precondition error verbatim;
    /// see [`patterns::validate_target`] for the individual checks.
    pub fn new(
        raw: &str,
        format: Option<FileFormat>,
        params: TargetParams,
    ) -> EngineResult<Self> {
        let pattern = PathPattern::parse(raw)?;
        let declared = format
            .as_ref()
            .map(|format| format.extension.as_str())
            .filter(|extension| !extension.is_empty());
        patterns::validate_target(
            &pattern,
            declared,
            params.locale_id.as_deref(),
            params.tags.as_slice(),
        )?;
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

    /// Generates one destination file per `(locale, tag)` pair under
    /// `root`.
    ///
    /// With an explicit locale identifier the single matching remote
    /// locale is expanded; otherwise every remote locale is. The
    /// identifier is resolved by id first, then code, then name.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownLocale`] when the explicit
    /// identifier matches nothing in the remote list.
    pub fn files(&self, root: &Path, remotes: &[RemoteLocale]) -> EngineResult<Vec<LocaleFile>> {
        let expander = TargetExpander::new(&self.pattern, root, self.format.as_ref());

        if let Some(identifier) = self
            .params
            .locale_id
            .as_deref()
            .filter(|identifier| !identifier.is_empty())
        {
            let locale = locales::locale_by_identifier(remotes, identifier).ok_or_else(|| {
                EngineError::UnknownLocale {
                    identifier: identifier.to_owned(),
                }
            })?;
            return Ok(expander.expand(std::slice::from_ref(locale), &self.params.tags));
        }

        Ok(expander.expand(remotes, &self.params.tags))
    }
}
