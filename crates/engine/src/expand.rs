use std::path::Path;

use locales::{FileFormat, LocaleFile, RemoteLocale, TagSet};
use patterns::{PathPattern, Placeholder};

/// Generates destination paths for remote locales (the pull direction).
///
/// Placeholders are substituted with concrete values from each remote
/// locale and, when the pattern contains `<tag>`, from every configured
/// tag: one path per `(locale, tag)` combination. Substitution cannot
/// fail; the engine only ever fills in its own values. Parent directories
/// for the produced paths are the download collaborator's concern.
pub struct TargetExpander<'a> {
    pattern: &'a PathPattern,
    root: &'a Path,
    format: Option<&'a FileFormat>,
}

impl<'a> TargetExpander<'a> {
    /// Creates an expander for one configured pattern under a project
    /// root.
    #[must_use]
    pub fn new(pattern: &'a PathPattern, root: &'a Path, format: Option<&'a FileFormat>) -> Self {
        Self {
            pattern,
            root,
            format,
        }
    }

    /// Produces one [`LocaleFile`] per `(locale, tag)` pair.
    ///
    /// Without a `<tag>` placeholder there is a single pass with no tag
    /// substitution, regardless of how many tags are configured.
    #[must_use]
    pub fn expand(&self, locales: &[RemoteLocale], tags: &TagSet) -> Vec<LocaleFile> {
        let tag_passes: Vec<&str> = if self.pattern.has_placeholder(Placeholder::Tag) {
            tags.iter().collect()
        } else {
            vec![""]
        };

        let mut files = Vec::with_capacity(locales.len() * tag_passes.len());
        for locale in locales {
            for tag in &tag_passes {
                files.push(self.locale_file(locale, tag));
            }
        }
        files
    }

    fn locale_file(&self, locale: &RemoteLocale, tag: &str) -> LocaleFile {
        let relative = self.pattern.fill(|placeholder| match placeholder {
            Placeholder::LocaleName => locale.name.clone(),
            Placeholder::LocaleCode => locale.code.clone(),
            Placeholder::Tag => tag.to_owned(),
        });

        let mut file = LocaleFile::new(self.root.join(relative));
        file.locale_name = locale.name.clone();
        file.locale_code = locale.code.clone();
        file.tag = tag.to_owned();
        file.locale_id = Some(locale.id.clone());
        file.remote_exists = true;
        if let Some(format) = self.format {
            file.file_format = format.name.clone();
        }
        file
    }
}
