// crates/infra/src/filesystem.rs
use std::fs;
use std::path::Path;

use zipf_shared_kernel::{InfraResult, InfrastructureError};

/// Load a plain-text file as a list of lines.
///
/// Line endings are normalized away (`\n` and `\r\n` both terminate a
/// line); the trailing newline does not produce an empty final line.
pub fn load_text(path: &Path) -> InfraResult<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents.lines().map(str::to_owned).collect())
}
