use crate::compile::{CompiledPattern, compile};
use crate::error::PatternError;
use crate::resolve::{self, ResolveError, ResolvedPlaceholders};
use crate::segment::{Placeholder, Segment, tokenize};

/// Immutable path template mixing literal text, wildcards, and
/// placeholders.
///
/// A `PathPattern` is built once per configured source or target entry and
/// owns the compiled artifacts derived from it: the anchored matcher with
/// its capture bindings and the globbing form used for enumeration.
#[derive(Clone, Debug)]
pub struct PathPattern {
    raw: String,
    normalized: String,
    segments: Vec<Segment>,
    compiled: CompiledPattern,
}

impl PathPattern {
    /// Parses and compiles a pattern string.
    ///
    /// A leading `./` is stripped before tokenizing so patterns match paths
    /// relative to the configured root. The original spelling is kept for
    /// diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the pattern is empty, uses `**` more
    /// than once, or places wildcards directly next to each other.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if raw.is_empty() {
            return Err(PatternError::empty());
        }
        let normalized = raw.strip_prefix("./").unwrap_or(raw).to_owned();
        let segments = tokenize(&normalized);
        let compiled = compile(raw, &segments)?;
        Ok(Self {
            raw: raw.to_owned(),
            normalized,
            segments,
            compiled,
        })
    }

    /// Returns the pattern exactly as configured.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the pattern with a leading `./` stripped.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Returns the parsed segment sequence.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the globbing form: placeholders erased to `*`, wildcards and
    /// literal text reproduced as written.
    #[must_use]
    pub fn glob(&self) -> &str {
        &self.compiled.glob
    }

    /// Returns the trailing file extension of the final path component.
    ///
    /// The extension may itself be a placeholder token. Patterns whose last
    /// component has no dot yield `None`.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        let component = self.normalized.rsplit('/').next()?;
        let (_, extension) = component.rsplit_once('.')?;
        (!extension.is_empty()).then_some(extension)
    }

    /// Reports whether the placeholder occurs anywhere in the pattern.
    #[must_use]
    pub fn has_placeholder(&self, placeholder: Placeholder) -> bool {
        self.occurrences(placeholder) > 0
    }

    /// Reports whether the pattern carries locale identity through a
    /// `<locale_name>` or `<locale_code>` placeholder.
    #[must_use]
    pub fn has_locale_placeholder(&self) -> bool {
        Placeholder::ALL
            .into_iter()
            .any(|placeholder| placeholder.is_locale() && self.has_placeholder(placeholder))
    }

    /// Counts the occurrences of one placeholder kind.
    #[must_use]
    pub fn occurrences(&self, placeholder: Placeholder) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Placeholder(p) if *p == placeholder))
            .count()
    }

    /// Distinct placeholder kinds present in the pattern, in declaration
    /// order.
    #[must_use]
    pub fn placeholders(&self) -> Vec<Placeholder> {
        Placeholder::ALL
            .into_iter()
            .filter(|placeholder| self.has_placeholder(*placeholder))
            .collect()
    }

    /// Extracts placeholder values from one concrete path.
    ///
    /// The path must match the anchored form in full. A placeholder kind
    /// that occurs several times must capture the same value at every
    /// occurrence. Extraction follows the matcher's greedy preference
    /// order: when adjacent placeholders or wildcards make a path
    /// ambiguous, one capture may absorb characters another could also
    /// claim. That behavior is part of the pattern contract, not
    /// something resolution tries to second-guess.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when the path does not match or a repeated
    /// placeholder disagrees with itself.
    pub fn resolve(&self, path: &str) -> Result<ResolvedPlaceholders, ResolveError> {
        resolve::resolve(&self.compiled, &self.raw, path)
    }

    /// Substitutes concrete values for every placeholder, reproducing all
    /// other characters as written.
    ///
    /// Wildcards are kept untouched; callers generating destination paths
    /// are expected to substitute into wildcard-free patterns.
    pub fn fill<F>(&self, mut value: F) -> String
    where
        F: FnMut(Placeholder) -> String,
    {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::SingleWildcard => out.push('*'),
                Segment::RecursiveWildcard => out.push_str("**"),
                Segment::Placeholder(placeholder) => out.push_str(&value(*placeholder)),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_leading_dot_slash() {
        let pattern = PathPattern::parse("./config/en.yml").expect("compiles");
        assert_eq!(pattern.as_str(), "./config/en.yml");
        assert_eq!(pattern.normalized(), "config/en.yml");
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(PathPattern::parse("").is_err());
    }

    #[test]
    fn extension_of_final_component() {
        let pattern = PathPattern::parse("./config/locales/**/*.en.yml").expect("compiles");
        assert_eq!(pattern.extension(), Some("yml"));

        let bare = PathPattern::parse("no_extension").expect("compiles");
        assert_eq!(bare.extension(), None);
    }

    #[test]
    fn extension_may_be_a_placeholder() {
        let pattern = PathPattern::parse("strings.<tag>").expect("compiles");
        assert_eq!(pattern.extension(), Some("<tag>"));
    }

    #[test]
    fn placeholder_queries() {
        let pattern = PathPattern::parse("<tag>/<locale_code>.yml").expect("compiles");
        assert!(pattern.has_placeholder(Placeholder::Tag));
        assert!(pattern.has_placeholder(Placeholder::LocaleCode));
        assert!(!pattern.has_placeholder(Placeholder::LocaleName));
        assert!(pattern.has_locale_placeholder());
        assert_eq!(
            pattern.placeholders(),
            vec![Placeholder::LocaleCode, Placeholder::Tag]
        );
    }

    #[test]
    fn fill_substitutes_placeholders_only() {
        let pattern = PathPattern::parse("./locales/<locale_code>/app.yml").expect("compiles");
        let filled = pattern.fill(|placeholder| match placeholder {
            Placeholder::LocaleCode => "de".to_owned(),
            other => panic!("unexpected placeholder {other}"),
        });
        assert_eq!(filled, "locales/de/app.yml");
    }
}
