//! Startup error module
//!
//! Errors that can only occur during process initialization. Each error
//! captures a backtrace at construction so that a fatal exit can print
//! where the failure originated before any service has started.

use std::backtrace::Backtrace;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal error raised before the server starts serving
#[derive(Debug)]
pub struct StartupError {
    kind: StartupErrorKind,
    backtrace: Backtrace,
}

#[derive(Debug)]
pub enum StartupErrorKind {
    /// The required `-f <file>` argument is missing or empty
    MissingFileArg,
    /// The current working directory could not be determined
    Workdir(io::Error),
    /// The resolved target file does not exist (or cannot be stat'd)
    FileNotFound { path: PathBuf, source: io::Error },
}

impl StartupError {
    pub fn new(kind: StartupErrorKind) -> Self {
        Self {
            kind,
            backtrace: Backtrace::force_capture(),
        }
    }

    pub const fn kind(&self) -> &StartupErrorKind {
        &self.kind
    }

    pub const fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StartupErrorKind::MissingFileArg => write!(f, "f option is empty"),
            StartupErrorKind::Workdir(e) => {
                write!(f, "could not determine working directory: {e}")
            }
            StartupErrorKind::FileNotFound { path, source } => {
                write!(f, "file({}) does not exist: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            StartupErrorKind::MissingFileArg => None,
            StartupErrorKind::Workdir(e) | StartupErrorKind::FileNotFound { source: e, .. } => {
                Some(e)
            }
        }
    }
}

impl From<StartupErrorKind> for StartupError {
    fn from(kind: StartupErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Print a startup error with its backtrace and terminate the process.
///
/// Used only during initialization; once the server loop is running no
/// path leads here.
pub fn fatal(err: &StartupError) -> ! {
    eprintln!("[FATAL] {err}");
    eprintln!("{}", err.backtrace());
    std::process::exit(1);
}
