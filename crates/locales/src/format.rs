use serde::Deserialize;

/// Registry entry describing one supported file format.
///
/// Supplied per declared format by the external format registry.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct FileFormat {
    /// API identifier of the format, e.g. `yml` or `strings`.
    pub name: String,
    /// Default file extension, without the leading dot.
    #[serde(default)]
    pub extension: String,
    /// Whether files of this format embed locale identity in their content
    /// rather than in the path.
    #[serde(default)]
    pub includes_locale_information: bool,
}

impl FileFormat {
    /// Creates a format with the given API name and extension.
    #[must_use]
    pub fn new(name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
            includes_locale_information: false,
        }
    }

    /// Marks the format as embedding locale identity in file content.
    #[must_use]
    pub const fn with_locale_information(mut self, includes: bool) -> Self {
        self.includes_locale_information = includes;
        self
    }
}
