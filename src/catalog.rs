use crate::manifest::{CatalogError, CourseManifest};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// A manifest entry together with the examples found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub number: u32,
    pub title: String,
    pub crate_name: String,
    pub dir: PathBuf,
    /// File stems of `examples/*.rs`, sorted.
    pub examples: Vec<String>,
}

impl Chapter {
    pub fn run_command(&self, example: &str) -> String {
        format!("cargo run -p {} --example {}", self.crate_name, example)
    }
}

/// Resolves every manifest entry against `root` and lists its examples.
///
/// A chapter directory that does not exist is an error. A chapter without an
/// `examples/` directory simply has no examples.
pub fn discover(root: &Path, manifest: &CourseManifest) -> Result<Vec<Chapter>, CatalogError> {
    manifest
        .chapters
        .iter()
        .map(|entry| {
            let dir = root.join(&entry.dir);
            if !dir.is_dir() {
                return Err(CatalogError::MissingDir(dir));
            }
            let examples = example_names(&dir.join("examples"))?;
            debug!(chapter = entry.number, examples = examples.len(), "Scanned chapter");
            Ok(Chapter {
                number: entry.number,
                title: entry.title.clone(),
                crate_name: entry.crate_name.clone(),
                dir,
                examples,
            })
        })
        .collect()
}

fn example_names(dir: &Path) -> Result<Vec<String>, CatalogError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().map_or(false, |ext| ext == "rs") {
            if let Some(stem) = path.file_stem() {
                names.push(stem.to_string_lossy().into_owned());
            }
        }
    }
    names.sort();
    Ok(names)
}

pub fn find(chapters: &[Chapter], number: u32) -> Result<&Chapter, CatalogError> {
    chapters
        .iter()
        .find(|c| c.number == number)
        .ok_or(CatalogError::UnknownChapter(number))
}

pub fn total_examples(chapters: &[Chapter]) -> usize {
    chapters.iter().map(|c| c.examples.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn manifest() -> CourseManifest {
        CourseManifest::parse(
            r#"
            title = "Demo"

            [[chapters]]
            number = 1
            title = "One"
            crate_name = "one"
            dir = "one"

            [[chapters]]
            number = 2
            title = "Two"
            crate_name = "two"
            dir = "two"
            "#,
        )
        .unwrap()
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "fn main() {}\n").unwrap();
    }

    #[test]
    fn lists_sorted_rust_examples_only() {
        let root = TempDir::new().unwrap();
        touch(&root.path().join("one/examples/p2_second.rs"));
        touch(&root.path().join("one/examples/p1_first.rs"));
        touch(&root.path().join("one/examples/notes.md"));
        touch(&root.path().join("one/examples/nested/p9_hidden.rs"));
        fs::create_dir_all(root.path().join("two")).unwrap();

        let chapters = discover(root.path(), &manifest()).unwrap();
        assert_eq!(chapters[0].examples, vec!["p1_first", "p2_second"]);
        assert!(chapters[1].examples.is_empty());
        assert_eq!(total_examples(&chapters), 2);
    }

    #[test]
    fn missing_chapter_dir_names_the_dir() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("one")).unwrap();

        let err = discover(root.path(), &manifest()).unwrap_err();
        match err {
            CatalogError::MissingDir(dir) => assert_eq!(dir, root.path().join("two")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn find_by_number() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("one")).unwrap();
        fs::create_dir_all(root.path().join("two")).unwrap();
        let chapters = discover(root.path(), &manifest()).unwrap();

        assert_eq!(find(&chapters, 2).unwrap().title, "Two");
        assert!(matches!(find(&chapters, 7), Err(CatalogError::UnknownChapter(7))));
        assert_eq!(
            chapters[0].run_command("p1_first"),
            "cargo run -p one --example p1_first"
        );
    }
}
