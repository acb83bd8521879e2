//! Catalog of the course chapters.
//!
//! `course.toml` at the workspace root lists every chapter crate. This crate
//! loads that manifest, checks it, and finds the runnable examples of each
//! chapter on disk. The `course` binary prints the result.

pub mod catalog;
pub mod manifest;

pub use catalog::{discover, find, total_examples, Chapter};
pub use manifest::{CatalogError, ChapterEntry, CourseManifest};
