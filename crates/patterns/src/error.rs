use std::error::Error;
use std::fmt;

/// Error produced when a pattern string cannot be compiled into a matcher.
#[derive(Debug)]
pub struct PatternError {
    kind: PatternErrorKind,
}

impl PatternError {
    pub(crate) fn empty() -> Self {
        Self {
            kind: PatternErrorKind::Empty,
        }
    }

    pub(crate) fn repeated_recursive_wildcard(pattern: &str) -> Self {
        Self {
            kind: PatternErrorKind::RepeatedRecursiveWildcard {
                pattern: pattern.to_owned(),
            },
        }
    }

    pub(crate) fn adjacent_wildcards(pattern: &str) -> Self {
        Self {
            kind: PatternErrorKind::AdjacentWildcards {
                pattern: pattern.to_owned(),
            },
        }
    }

    pub(crate) fn matcher(pattern: &str, source: regex::Error) -> Self {
        Self {
            kind: PatternErrorKind::Matcher {
                pattern: pattern.to_owned(),
                source,
            },
        }
    }

    /// Returns the specific compilation failure.
    #[must_use]
    pub fn kind(&self) -> &PatternErrorKind {
        &self.kind
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            PatternErrorKind::Empty => write!(f, "pattern is empty"),
            PatternErrorKind::RepeatedRecursiveWildcard { pattern } => {
                write!(f, "pattern '{pattern}' uses '**' more than once")
            }
            PatternErrorKind::AdjacentWildcards { pattern } => {
                write!(
                    f,
                    "pattern '{pattern}' places wildcards directly next to each other and cannot be matched unambiguously"
                )
            }
            PatternErrorKind::Matcher { pattern, source } => {
                write!(f, "failed to compile pattern '{pattern}' into a matcher: {source}")
            }
        }
    }
}

impl Error for PatternError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            PatternErrorKind::Matcher { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Classification of pattern compilation failures.
#[derive(Debug)]
pub enum PatternErrorKind {
    /// The pattern string was empty.
    Empty,
    /// The pattern used `**` more than once.
    RepeatedRecursiveWildcard {
        /// The offending pattern as configured.
        pattern: String,
    },
    /// Two wildcards were placed directly next to each other.
    AdjacentWildcards {
        /// The offending pattern as configured.
        pattern: String,
    },
    /// The derived regular expression failed to compile.
    Matcher {
        /// The offending pattern as configured.
        pattern: String,
        /// Underlying error reported by the regex engine.
        source: regex::Error,
    },
}
