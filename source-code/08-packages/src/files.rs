//! Creating, reading, listing, and walking files.
//!
//! Every error carries the path it happened on.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("{op} {path}: {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} is not valid UTF-8")]
    NotUtf8 { path: PathBuf },
    #[error("walking directory tree: {0}")]
    Walk(#[from] walkdir::Error),
}

fn io_err<'a>(op: &'static str, path: &'a Path) -> impl FnOnce(io::Error) -> FileError + 'a {
    move |source| FileError::Io {
        op,
        path: path.to_path_buf(),
        source,
    }
}

/// Creates (or truncates) `path` and writes `contents`.
pub fn write_file(path: impl AsRef<Path>, contents: &str) -> Result<(), FileError> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(io_err("create", path))?;
    file.write_all(contents.as_bytes()).map_err(io_err("write", path))?;
    Ok(())
}

pub fn read_file(path: impl AsRef<Path>) -> Result<String, FileError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(io_err("read", path))
}

/// Reads through an open handle, sizing the buffer from the file's metadata.
pub fn read_with_handle(path: impl AsRef<Path>) -> Result<String, FileError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(io_err("open", path))?;
    let len = file.metadata().map_err(io_err("stat", path))?.len() as usize;

    let mut bytes = vec![0u8; len];
    file.read_exact(&mut bytes).map_err(io_err("read", path))?;

    String::from_utf8(bytes).map_err(|_| FileError::NotUtf8 {
        path: path.to_path_buf(),
    })
}

/// Names of the entries directly inside `dir`, sorted.
pub fn list_dir(dir: impl AsRef<Path>) -> Result<Vec<String>, FileError> {
    let dir = dir.as_ref();
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err("read_dir", dir))? {
        let entry = entry.map_err(io_err("read_dir", dir))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Every path under `root` (including `root` itself), depth-first, in name order.
pub fn walk(root: impl AsRef<Path>) -> Result<Vec<PathBuf>, FileError> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        paths.push(entry?.into_path());
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_then_read_both_ways() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.txt");
        write_file(&path, "Nitesh Kumar").unwrap();

        assert_eq!(read_with_handle(&path).unwrap(), "Nitesh Kumar");
        assert_eq!(read_file(&path).unwrap(), "Nitesh Kumar");
    }

    #[test]
    fn write_truncates_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.txt");
        write_file(&path, "a much longer first version").unwrap();
        write_file(&path, "short").unwrap();
        assert_eq!(read_file(&path).unwrap(), "short");
    }

    #[test]
    fn read_missing_file_names_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = read_with_handle(&path).unwrap_err();
        assert!(matches!(err, FileError::Io { op: "open", .. }));
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn write_into_missing_dir_names_op_and_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        let err = write_file(&path, "x").unwrap_err();
        match &err {
            FileError::Io { op, path: failed, .. } => {
                assert_eq!(*op, "create");
                assert_eq!(failed, &path);
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(err.to_string().starts_with("create "));
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bin.dat");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(read_with_handle(&path), Err(FileError::NotUtf8 { .. })));
    }

    #[test]
    fn list_dir_is_sorted() {
        let dir = tempdir().unwrap();
        for name in ["b.txt", "a.txt", "c.txt"] {
            write_file(dir.path().join(name), name).unwrap();
        }
        fs::create_dir(dir.path().join("sub")).unwrap();
        assert_eq!(list_dir(dir.path()).unwrap(), vec!["a.txt", "b.txt", "c.txt", "sub"]);
    }

    #[test]
    fn walk_visits_nested_entries() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("outer/inner")).unwrap();
        write_file(dir.path().join("outer/inner/leaf.txt"), "leaf").unwrap();
        write_file(dir.path().join("top.txt"), "top").unwrap();

        let rel: Vec<PathBuf> = walk(dir.path())
            .unwrap()
            .into_iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            rel,
            vec![
                PathBuf::new(),
                PathBuf::from("outer"),
                PathBuf::from("outer/inner"),
                PathBuf::from("outer/inner/leaf.txt"),
                PathBuf::from("top.txt"),
            ]
        );
    }

    #[test]
    fn walk_missing_root_is_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(walk(dir.path().join("nope")), Err(FileError::Walk(_))));
    }
}
