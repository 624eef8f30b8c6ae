use regex::Regex;

use crate::error::PatternError;
use crate::segment::{Placeholder, Segment};

/// Binding from a synthetic capture group name back to the placeholder it
/// captures.
///
/// Regex engines reject duplicate named groups, so a placeholder kind that
/// occurs several times compiles to several groups (`p0`, `p1`, ...). The
/// binding table restores the logical identity after a match.
#[derive(Clone, Debug)]
pub(crate) struct GroupBinding {
    pub(crate) group: String,
    pub(crate) placeholder: Placeholder,
}

/// Cached matching and globbing forms derived from a pattern.
#[derive(Clone, Debug)]
pub(crate) struct CompiledPattern {
    pub(crate) matcher: Regex,
    pub(crate) bindings: Vec<GroupBinding>,
    pub(crate) glob: String,
}

/// Compiles a tokenized pattern into its anchored matcher and glob form.
///
/// `pattern` is the string as configured and only feeds error messages.
pub(crate) fn compile(pattern: &str, segments: &[Segment]) -> Result<CompiledPattern, PatternError> {
    if segments.is_empty() {
        return Err(PatternError::empty());
    }

    let recursive = segments
        .iter()
        .filter(|segment| matches!(segment, Segment::RecursiveWildcard))
        .count();
    if recursive > 1 {
        return Err(PatternError::repeated_recursive_wildcard(pattern));
    }
    if has_adjacent_wildcards(segments) {
        return Err(PatternError::adjacent_wildcards(pattern));
    }

    let mut source = String::from("^");
    let mut bindings = Vec::new();
    let mut index = 0;
    while index < segments.len() {
        match &segments[index] {
            Segment::Literal(text) => source.push_str(&regex::escape(text)),
            Segment::SingleWildcard => source.push_str(".*"),
            Segment::RecursiveWildcard => {
                source.push_str(".*");
                // `**` also covers the separator that follows it, so a
                // pattern like `a/**/b.yml` accepts `a/b.yml`.
                if let Some(Segment::Literal(text)) = segments.get(index + 1) {
                    if let Some(stripped) = text.strip_prefix('/') {
                        source.push_str(&regex::escape(stripped));
                        index += 2;
                        continue;
                    }
                }
            }
            Segment::Placeholder(placeholder) => {
                let group = format!("p{}", bindings.len());
                source.push_str("(?P<");
                source.push_str(&group);
                source.push_str(">[^/]+)");
                bindings.push(GroupBinding {
                    group,
                    placeholder: *placeholder,
                });
            }
        }
        index += 1;
    }
    source.push('$');

    let matcher = Regex::new(&source).map_err(|error| PatternError::matcher(pattern, error))?;

    Ok(CompiledPattern {
        matcher,
        bindings,
        glob: glob_form(segments),
    })
}

/// Builds the globbing form used for filesystem enumeration: placeholders
/// erased to `*`, everything else reproduced as written. The glob never
/// participates in extraction.
fn glob_form(segments: &[Segment]) -> String {
    let mut glob = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => glob.push_str(text),
            Segment::SingleWildcard | Segment::Placeholder(_) => glob.push('*'),
            Segment::RecursiveWildcard => glob.push_str("**"),
        }
    }
    glob
}

fn has_adjacent_wildcards(segments: &[Segment]) -> bool {
    segments
        .windows(2)
        .any(|pair| pair[0].is_wildcard() && pair[1].is_wildcard())
}
