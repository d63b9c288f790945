//! Utility functions for openapi-to-json-schema

use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }

    if !path.exists() {
        fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", path.display()),
        ));
    }
    Ok(())
}

/// Whether stdin is redirected from a pipe or file rather than a terminal
pub fn stdin_is_piped() -> bool {
    !io::stdin().is_terminal()
}

/// Read all of stdin
pub async fn read_stdin() -> io::Result<Vec<u8>> {
    let mut content = Vec::new();
    tokio::io::stdin().read_to_end(&mut content).await?;
    Ok(content)
}
