use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use tracing::debug;

use locales::{FileFormat, LocaleFile};
use patterns::{PathPattern, Placeholder, Segment};
use walk::WalkBuilder;

use crate::error::{EngineError, EngineResult};

/// Traversal strategy derived from a pattern's wildcard segments.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraversalMode {
    /// No wildcard or placeholder; the pattern names exactly one file.
    Literal,
    /// Wildcards or placeholders without `**`; a fixed-depth glob.
    Single,
    /// A `**` segment; the whole subtree is walked.
    Recursive,
}

/// Derives the traversal strategy for a compiled pattern.
#[must_use]
pub fn traversal_mode(pattern: &PathPattern) -> TraversalMode {
    let mut mode = TraversalMode::Literal;
    for segment in pattern.segments() {
        match segment {
            Segment::RecursiveWildcard => return TraversalMode::Recursive,
            Segment::SingleWildcard | Segment::Placeholder(_) => mode = TraversalMode::Single,
            Segment::Literal(_) => {}
        }
    }
    mode
}

/// Enumerates local files matching a pattern and resolves their locale
/// metadata (the push direction).
///
/// Candidates are collected through the pattern's globbing form; every
/// candidate is then resolved through the anchored matcher to extract the
/// locale name, code, and tag its path encodes. Candidates that fail to
/// resolve, for example a repeated placeholder disagreeing with itself,
/// are skipped with a diagnostic.
pub struct FileDiscoverer<'a> {
    pattern: &'a PathPattern,
    root: &'a Path,
    format: Option<&'a FileFormat>,
}

impl<'a> FileDiscoverer<'a> {
    /// Creates a discoverer for one configured pattern under a project
    /// root.
    #[must_use]
    pub fn new(pattern: &'a PathPattern, root: &'a Path, format: Option<&'a FileFormat>) -> Self {
        Self {
            pattern,
            root,
            format,
        }
    }

    /// Enumerates and resolves all matching files, in deterministic walk
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when the globbing form cannot be compiled
    /// or traversal fails. Per-candidate resolution failures are skipped,
    /// not returned.
    pub fn discover(&self) -> EngineResult<Vec<LocaleFile>> {
        match traversal_mode(self.pattern) {
            TraversalMode::Literal => Ok(self.literal_candidate().into_iter().collect()),
            TraversalMode::Single => {
                let depth = self.pattern.glob().split('/').count();
                self.enumerate(Some(depth), false)
            }
            TraversalMode::Recursive => self.enumerate(None, true),
        }
    }

    /// A pattern without wildcards or placeholders names exactly one file;
    /// whether it exists is the uploader's concern.
    fn literal_candidate(&self) -> Option<LocaleFile> {
        let relative = self.pattern.normalized().to_owned();
        self.resolve_candidate(&relative, self.root.join(&relative))
    }

    fn enumerate(
        &self,
        max_depth: Option<usize>,
        filter_extension: bool,
    ) -> EngineResult<Vec<LocaleFile>> {
        let matcher = self.glob_matcher()?;
        let suffix = if filter_extension {
            self.extension_suffix()
        } else {
            None
        };

        let mut builder = WalkBuilder::new(self.root);
        if let Some(depth) = max_depth {
            builder = builder.max_depth(depth);
        }

        let mut files = Vec::new();
        for entry in builder.build()? {
            let entry = entry?;
            let Some(relative) = entry.relative_path().to_str() else {
                debug!(path = %entry.relative_path().display(), "skipping non UTF-8 path");
                continue;
            };
            if let Some(suffix) = &suffix {
                if !relative.ends_with(suffix.as_str()) {
                    continue;
                }
            }
            if !matcher.is_match(relative) {
                continue;
            }
            if let Some(file) = self.resolve_candidate(relative, entry.full_path().to_path_buf()) {
                files.push(file);
            }
        }
        Ok(files)
    }

    fn glob_matcher(&self) -> EngineResult<GlobMatcher> {
        GlobBuilder::new(self.pattern.glob())
            .literal_separator(true)
            .build()
            .map(|glob| glob.compile_matcher())
            .map_err(|source| EngineError::Glob {
                pattern: self.pattern.glob().to_owned(),
                source,
            })
    }

    /// The format extension pre-filters recursive walks when the pattern
    /// itself does not pin one down.
    fn extension_suffix(&self) -> Option<String> {
        let format = self.format?;
        (!format.extension.is_empty()).then(|| format!(".{}", format.extension))
    }

    fn resolve_candidate(&self, relative: &str, full_path: PathBuf) -> Option<LocaleFile> {
        match self.pattern.resolve(relative) {
            Ok(values) => {
                let mut file = LocaleFile::new(full_path);
                file.locale_name = values
                    .get(Placeholder::LocaleName)
                    .unwrap_or_default()
                    .to_owned();
                file.locale_code = values
                    .get(Placeholder::LocaleCode)
                    .unwrap_or_default()
                    .to_owned();
                file.tag = values.get(Placeholder::Tag).unwrap_or_default().to_owned();
                if let Some(format) = self.format {
                    file.file_format = format.name.clone();
                }
                Some(file)
            }
            Err(error) => {
                debug!(%error, "skipping candidate that does not resolve");
                None
            }
        }
    }
}
