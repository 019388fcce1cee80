use std::{fs, path::Path};

use crate::error::{Result, ShaderError};

/// Read a whole shader source file.
///
/// An unreadable or empty file is an error: there is nothing a driver could
/// compile from it.
pub fn read_source(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| ShaderError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    if text.is_empty() {
        return Err(ShaderError::EmptySource {
            path: path.to_path_buf(),
        });
    }
    Ok(text)
}
