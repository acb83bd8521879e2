use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid manifest: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Manifest lists no chapters")]
    NoChapters,

    #[error("Chapter number {0} appears more than once")]
    DuplicateNumber(u32),

    #[error("Crate '{0}' appears more than once")]
    DuplicateCrate(String),

    #[error("Chapter directory not found: {}", .0.display())]
    MissingDir(PathBuf),

    #[error("No chapter numbered {0}")]
    UnknownChapter(u32),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChapterEntry {
    pub number: u32,
    pub title: String,
    pub crate_name: String,
    /// Relative to the directory holding the manifest.
    pub dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CourseManifest {
    pub title: String,
    pub chapters: Vec<ChapterEntry>,
}

impl CourseManifest {
    /// Parses and validates manifest text.
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let manifest: CourseManifest = toml::from_str(text)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::parse(&text)?;
        info!(path = %path.display(), chapters = manifest.chapters.len(), "Loaded manifest");
        Ok(manifest)
    }

    /// Rejects an empty chapter list, repeated chapter numbers and repeated
    /// crate names.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.chapters.is_empty() {
            return Err(CatalogError::NoChapters);
        }

        let mut numbers = HashSet::new();
        let mut crates = HashSet::new();
        for chapter in &self.chapters {
            if !numbers.insert(chapter.number) {
                return Err(CatalogError::DuplicateNumber(chapter.number));
            }
            if !crates.insert(chapter.crate_name.as_str()) {
                return Err(CatalogError::DuplicateCrate(chapter.crate_name.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CHAPTERS: &str = r#"
        title = "Demo"

        [[chapters]]
        number = 1
        title = "One"
        crate_name = "one"
        dir = "chapters/one"

        [[chapters]]
        number = 2
        title = "Two"
        crate_name = "two"
        dir = "chapters/two"
    "#;

    #[test]
    fn parses_chapters_in_order() {
        let manifest = CourseManifest::parse(TWO_CHAPTERS).unwrap();
        assert_eq!(manifest.title, "Demo");
        assert_eq!(manifest.chapters.len(), 2);
        assert_eq!(manifest.chapters[1].crate_name, "two");
        assert_eq!(manifest.chapters[1].dir, PathBuf::from("chapters/two"));
    }

    #[test]
    fn rejects_empty_chapter_list() {
        let err = CourseManifest::parse("title = \"Empty\"\nchapters = []\n").unwrap_err();
        assert!(matches!(err, CatalogError::NoChapters));
    }

    #[test]
    fn rejects_duplicate_numbers() {
        let text = TWO_CHAPTERS.replace("number = 2", "number = 1");
        let err = CourseManifest::parse(&text).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateNumber(1)));
    }

    #[test]
    fn rejects_duplicate_crates() {
        let text = TWO_CHAPTERS.replace("crate_name = \"two\"", "crate_name = \"one\"");
        let err = CourseManifest::parse(&text).unwrap_err();
        assert_eq!(err.to_string(), "Crate 'one' appears more than once");
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let err = CourseManifest::parse("title = \"No chapters key\"\n").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn load_reports_the_missing_path() {
        let err = CourseManifest::load("does/not/exist.toml").unwrap_err();
        match err {
            CatalogError::Read { path, .. } => assert_eq!(path, PathBuf::from("does/not/exist.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
