use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::error::Error;
use std::fmt;

use crate::compile::CompiledPattern;
use crate::segment::Placeholder;

/// Placeholder values extracted from one concrete path.
///
/// Keys are exactly the distinct placeholder kinds present in the pattern
/// that produced the map; a pattern without placeholders resolves to an
/// empty map.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResolvedPlaceholders {
    values: BTreeMap<Placeholder, String>,
}

impl ResolvedPlaceholders {
    /// Returns the value captured for the placeholder, if it occurred in
    /// the pattern.
    #[must_use]
    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }

    /// Reports whether the placeholder occurred in the pattern.
    #[must_use]
    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.values.contains_key(&placeholder)
    }

    /// Number of distinct placeholders that resolved.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Reports whether no placeholder resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the resolved `(placeholder, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Placeholder, &str)> {
        self.values
            .iter()
            .map(|(placeholder, value)| (*placeholder, value.as_str()))
    }
}

/// Matches a concrete path against a compiled pattern and folds the
/// synthetic capture groups back into logical placeholder values.
pub(crate) fn resolve(
    compiled: &CompiledPattern,
    pattern: &str,
    path: &str,
) -> Result<ResolvedPlaceholders, ResolveError> {
    let Some(captures) = compiled.matcher.captures(path) else {
        return Err(ResolveError::no_match(pattern, path));
    };

    let mut values = BTreeMap::new();
    for binding in &compiled.bindings {
        let Some(capture) = captures.name(&binding.group) else {
            continue;
        };
        match values.entry(binding.placeholder) {
            Entry::Vacant(slot) => {
                slot.insert(capture.as_str().to_owned());
            }
            Entry::Occupied(slot) => {
                if slot.get() != capture.as_str() {
                    return Err(ResolveError::inconsistent(
                        binding.placeholder,
                        slot.get(),
                        capture.as_str(),
                    ));
                }
            }
        }
    }

    Ok(ResolvedPlaceholders { values })
}

/// Error produced when a concrete path cannot be resolved against a
/// pattern.
#[derive(Debug)]
pub struct ResolveError {
    kind: ResolveErrorKind,
}

impl ResolveError {
    fn no_match(pattern: &str, path: &str) -> Self {
        Self {
            kind: ResolveErrorKind::NoMatch {
                pattern: pattern.to_owned(),
                path: path.to_owned(),
            },
        }
    }

    fn inconsistent(placeholder: Placeholder, first: &str, second: &str) -> Self {
        Self {
            kind: ResolveErrorKind::InconsistentPlaceholder {
                placeholder,
                first: first.to_owned(),
                second: second.to_owned(),
            },
        }
    }

    /// Returns the specific resolution failure.
    #[must_use]
    pub fn kind(&self) -> &ResolveErrorKind {
        &self.kind
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ResolveErrorKind::NoMatch { pattern, path } => {
                write!(f, "path '{path}' does not match pattern '{pattern}'")
            }
            ResolveErrorKind::InconsistentPlaceholder {
                placeholder,
                first,
                second,
            } => {
                write!(
                    f,
                    "placeholder {} is used twice with different values: '{first}' and '{second}'",
                    placeholder.key()
                )
            }
        }
    }
}

impl Error for ResolveError {}

/// Classification of resolution failures.
#[derive(Debug)]
pub enum ResolveErrorKind {
    /// The path did not match the pattern's anchored matcher.
    NoMatch {
        /// The pattern as configured.
        pattern: String,
        /// The path that failed to match.
        path: String,
    },
    /// A repeated placeholder captured two different values.
    InconsistentPlaceholder {
        /// The placeholder that disagreed with itself.
        placeholder: Placeholder,
        /// Value captured by the earlier occurrence.
        first: String,
        /// Value captured by the later occurrence.
        second: String,
    },
}
