// File reader module
// Single full-file read, no retry policy

use std::io;
use std::path::Path;

use tokio::fs;

/// Read the whole file as text.
///
/// Any failure (missing file, permission change, invalid UTF-8) surfaces as
/// `io::Error`; retry policy belongs to the caller.
pub async fn read_file(path: &Path) -> io::Result<String> {
    fs::read_to_string(path).await
}
