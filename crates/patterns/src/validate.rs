use std::error::Error;
use std::fmt;

use crate::pattern::PathPattern;
use crate::segment::{Placeholder, Segment};

/// Validates a push source pattern before any filesystem work begins.
///
/// `declared_extension` is the configured file format's extension, used
/// when the pattern itself carries none. `tags` is the configured tag list
/// accompanying the pattern.
///
/// Empty pattern strings never reach this function; they are rejected by
/// [`PathPattern::parse`].
///
/// # Errors
///
/// Returns the first violated check as a [`ValidateError`].
pub fn validate_source(
    pattern: &PathPattern,
    declared_extension: Option<&str>,
    tags: &[String],
) -> Result<(), ValidateError> {
    shared_checks(pattern, declared_extension)?;
    tag_check(pattern, tags)
}

/// Validates a pull target pattern before any network work begins.
///
/// On top of the checks shared with [`validate_source`], a target must
/// carry exactly one source of locale information: either the explicit
/// `locale_id` parameter or a locale placeholder in the pattern.
///
/// # Errors
///
/// Returns the first violated check as a [`ValidateError`].
pub fn validate_target(
    pattern: &PathPattern,
    declared_extension: Option<&str>,
    locale_id: Option<&str>,
    tags: &[String],
) -> Result<(), ValidateError> {
    shared_checks(pattern, declared_extension)?;
    locale_information_check(pattern, locale_id)?;
    tag_check(pattern, tags)
}

fn shared_checks(
    pattern: &PathPattern,
    declared_extension: Option<&str>,
) -> Result<(), ValidateError> {
    if pattern.extension().is_none() && !declared_extension.is_some_and(|ext| !ext.is_empty()) {
        return Err(ValidateError::missing_extension(pattern));
    }

    for placeholder in Placeholder::ALL {
        if pattern.occurrences(placeholder) > 1 {
            return Err(ValidateError::repeated_placeholder(pattern, placeholder));
        }
    }

    let single = pattern
        .segments()
        .iter()
        .filter(|segment| matches!(segment, Segment::SingleWildcard))
        .count();
    if single > 1 {
        return Err(ValidateError::too_many_wildcards(pattern));
    }

    let recursive = pattern
        .segments()
        .iter()
        .filter(|segment| matches!(segment, Segment::RecursiveWildcard))
        .count();
    if recursive > 1 {
        return Err(ValidateError::too_many_recursive_wildcards(pattern));
    }

    Ok(())
}

fn locale_information_check(
    pattern: &PathPattern,
    locale_id: Option<&str>,
) -> Result<(), ValidateError> {
    let has_id = locale_id.is_some_and(|id| !id.is_empty());
    match (has_id, pattern.has_locale_placeholder()) {
        (true, true) => Err(ValidateError::ambiguous_locale_information(pattern)),
        (false, false) => Err(ValidateError::no_locale_information(pattern)),
        _ => Ok(()),
    }
}

fn tag_check(pattern: &PathPattern, tags: &[String]) -> Result<(), ValidateError> {
    if pattern.has_placeholder(Placeholder::Tag) && tags.is_empty() {
        return Err(ValidateError::missing_tag_list(pattern));
    }
    Ok(())
}

/// Error describing a precondition violated by a configured pattern.
///
/// Checks run eagerly and the first violation wins; no partial validation
/// state is retained.
#[derive(Debug)]
pub struct ValidateError {
    kind: ValidateErrorKind,
}

impl ValidateError {
    fn missing_extension(pattern: &PathPattern) -> Self {
        Self {
            kind: ValidateErrorKind::MissingExtension {
                pattern: pattern.as_str().to_owned(),
            },
        }
    }

    fn repeated_placeholder(pattern: &PathPattern, placeholder: Placeholder) -> Self {
        Self {
            kind: ValidateErrorKind::RepeatedPlaceholder {
                pattern: pattern.as_str().to_owned(),
                placeholder,
            },
        }
    }

    fn too_many_wildcards(pattern: &PathPattern) -> Self {
        Self {
            kind: ValidateErrorKind::TooManyWildcards {
                pattern: pattern.as_str().to_owned(),
            },
        }
    }

    fn too_many_recursive_wildcards(pattern: &PathPattern) -> Self {
        Self {
            kind: ValidateErrorKind::TooManyRecursiveWildcards {
                pattern: pattern.as_str().to_owned(),
            },
        }
    }

    fn no_locale_information(pattern: &PathPattern) -> Self {
        Self {
            kind: ValidateErrorKind::NoLocaleInformation {
                pattern: pattern.as_str().to_owned(),
            },
        }
    }

    fn ambiguous_locale_information(pattern: &PathPattern) -> Self {
        Self {
            kind: ValidateErrorKind::AmbiguousLocaleInformation {
                pattern: pattern.as_str().to_owned(),
            },
        }
    }

    fn missing_tag_list(pattern: &PathPattern) -> Self {
        Self {
            kind: ValidateErrorKind::MissingTagList {
                pattern: pattern.as_str().to_owned(),
            },
        }
    }

    /// Returns the specific check that failed.
    #[must_use]
    pub fn kind(&self) -> &ValidateErrorKind {
        &self.kind
    }
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValidateErrorKind::MissingExtension { pattern } => {
                write!(
                    f,
                    "pattern '{pattern}' has no file extension and no file format with an extension is configured"
                )
            }
            ValidateErrorKind::RepeatedPlaceholder {
                pattern,
                placeholder,
            } => {
                write!(f, "pattern '{pattern}' uses {placeholder} more than once")
            }
            ValidateErrorKind::TooManyWildcards { pattern } => {
                write!(f, "pattern '{pattern}' uses more than one '*' wildcard")
            }
            ValidateErrorKind::TooManyRecursiveWildcards { pattern } => {
                write!(f, "pattern '{pattern}' uses '**' more than once")
            }
            ValidateErrorKind::NoLocaleInformation { pattern } => {
                write!(
                    f,
                    "pattern '{pattern}' carries no locale information: configure a locale id or add a <locale_name> or <locale_code> placeholder"
                )
            }
            ValidateErrorKind::AmbiguousLocaleInformation { pattern } => {
                write!(
                    f,
                    "ambiguous locale information for pattern '{pattern}': found both a locale id parameter and a locale placeholder"
                )
            }
            ValidateErrorKind::MissingTagList { pattern } => {
                write!(f, "pattern '{pattern}' uses <tag> but no tags are configured")
            }
        }
    }
}

impl Error for ValidateError {}

/// Classification of precondition failures.
#[derive(Debug)]
pub enum ValidateErrorKind {
    /// Neither the pattern nor the configured format carries an extension.
    MissingExtension {
        /// The offending pattern as configured.
        pattern: String,
    },
    /// A placeholder kind occurred more than once.
    RepeatedPlaceholder {
        /// The offending pattern as configured.
        pattern: String,
        /// The repeated placeholder.
        placeholder: Placeholder,
    },
    /// More than one bare `*` wildcard.
    TooManyWildcards {
        /// The offending pattern as configured.
        pattern: String,
    },
    /// More than one `**` wildcard.
    TooManyRecursiveWildcards {
        /// The offending pattern as configured.
        pattern: String,
    },
    /// Neither a locale id parameter nor a locale placeholder is present.
    NoLocaleInformation {
        /// The offending pattern as configured.
        pattern: String,
    },
    /// Both a locale id parameter and a locale placeholder are present.
    AmbiguousLocaleInformation {
        /// The offending pattern as configured.
        pattern: String,
    },
    /// The pattern uses `<tag>` but the tag list parameter is empty.
    MissingTagList {
        /// The offending pattern as configured.
        pattern: String,
    },
}
