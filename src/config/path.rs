// Watched file path module
// Resolves and validates the target file path at startup

use std::path::{Path, PathBuf};

use crate::error::{StartupError, StartupErrorKind};

/// The file this server polls, resolved to an absolute path at startup.
///
/// Validation happens exactly once, before the server binds; after that the
/// path is immutable for the life of the process. The file may still
/// disappear or become unreadable later, which the refresher handles.
#[derive(Debug, Clone)]
pub struct WatchedFile {
    path: PathBuf,
}

impl WatchedFile {
    /// Resolve the `-f` argument from the process command line.
    pub fn from_args() -> Result<Self, StartupError> {
        let arg = parse_file_arg(std::env::args().skip(1));
        Self::resolve(arg.as_deref())
    }

    /// Resolve a path-like argument against the current working directory
    /// and verify the file exists.
    pub fn resolve(arg: Option<&str>) -> Result<Self, StartupError> {
        let name = match arg {
            Some(s) if !s.is_empty() => s,
            _ => return Err(StartupErrorKind::MissingFileArg.into()),
        };

        let cwd = std::env::current_dir().map_err(StartupErrorKind::Workdir)?;
        let path = cwd.join(name);

        if let Err(source) = std::fs::metadata(&path) {
            return Err(StartupErrorKind::FileNotFound { path, source }.into());
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Wrap an already-known path, skipping validation (tests only)
    #[cfg(test)]
    pub(crate) const fn from_path(path: PathBuf) -> Self {
        Self { path }
    }
}

/// Extract the value of `-f <path>` (or `-f=<path>`) from an argument list
fn parse_file_arg(mut args: impl Iterator<Item = String>) -> Option<String> {
    while let Some(arg) = args.next() {
        if arg == "-f" {
            return args.next();
        }
        if let Some(value) = arg.strip_prefix("-f=") {
            return Some(value.to_string());
        }
    }
    None
}
