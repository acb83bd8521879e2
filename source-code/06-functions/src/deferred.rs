//! Deferred work, panics, and recovering from them.
//!
//! `Deferred` runs a closure when it goes out of scope, the way a
//! deferred call runs when a function returns. Guards drop in reverse
//! declaration order, so the last one declared runs first. `recover`
//! turns a panic back into a value with `catch_unwind`; ordinary
//! failures should use `Result` instead.

use std::any::Any;
use std::fs::File;
use std::panic::{self, UnwindSafe};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub struct Deferred<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> Deferred<F> {
    pub fn new(action: F) -> Self {
        Deferred { action: Some(action) }
    }

    /// Drops the guard without running the action.
    pub fn cancel(mut self) {
        self.action = None;
    }
}

impl<F: FnOnce()> Drop for Deferred<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

/// The message carried by a caught panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovered(pub String);

impl std::fmt::Display for Recovered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug)]
pub enum FunctionError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn may_panic() {
    panic!("A panic occurred!");
}

/// Runs `f`, converting a panic into `Err(Recovered)`.
pub fn recover<T, F>(f: F) -> Result<T, Recovered>
where
    F: FnOnce() -> T + UnwindSafe,
{
    panic::catch_unwind(f).map_err(|payload| Recovered(panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Opening a file that may not exist is an expected failure, not a panic.
pub fn open_missing(path: impl AsRef<Path>) -> Result<File, FunctionError> {
    let path = path.as_ref();
    File::open(path).map_err(|source| FunctionError::Open {
        path: path.to_path_buf(),
        source,
    })
}
