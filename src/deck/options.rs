/// Configuration for building and saving the slide.
use std::path::{Path, PathBuf};

/// File name the slide is saved under unless configured otherwise.
pub const DEFAULT_FILE_NAME: &str = "MobileViT2-Anomaly-Detector-Key-Insights.pptx";

/// Options controlling where the slide is written and how it is labelled.
///
/// # Examples
///
/// ```rust
/// use insight_deck::deck::{BuildOptions, DEFAULT_FILE_NAME};
///
/// // Working directory, fixed file name
/// let options = BuildOptions::default();
/// assert_eq!(options.output_path().to_str(), Some(DEFAULT_FILE_NAME));
///
/// // Or customize
/// let options = BuildOptions::new()
///     .with_output_dir("out")
///     .with_document_title("Quarterly review");
/// assert!(options.output_path().ends_with(DEFAULT_FILE_NAME));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Directory the file is written to; empty means the working directory
    pub output_dir: PathBuf,
    /// Output file name
    pub file_name: String,
    /// Title stored in the document properties
    pub document_title: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::new(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            document_title: "MobileViT2 Anomaly Detector: Key Insights".to_string(),
        }
    }
}

impl BuildOptions {
    /// Create a new `BuildOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory the file is written to.
    #[inline]
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the output file name.
    #[inline]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    #[inline]
    pub fn with_document_title(mut self, title: impl Into<String>) -> Self {
        self.document_title = title.into();
        self
    }

    /// Full path of the output file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_is_bare_file_name() {
        assert_eq!(
            BuildOptions::default().output_path(),
            PathBuf::from("MobileViT2-Anomaly-Detector-Key-Insights.pptx")
        );
    }

    #[test]
    fn test_builder_methods() {
        let options = BuildOptions::new()
            .with_output_dir("/tmp/decks")
            .with_file_name("a.pptx")
            .with_document_title("A");

        assert_eq!(options.output_path(), PathBuf::from("/tmp/decks/a.pptx"));
        assert_eq!(options.document_title, "A");
    }
}
