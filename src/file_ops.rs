// src/file_ops.rs
//! File-level input loading

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::consts::STDIN_PATH;
use crate::core::Result;
use crate::error::ConversionError;

/// Read a whole file as text
///
/// Failures name the file and keep the underlying I/O error as the source.
pub fn load_data<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|source| ConversionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "loaded input file");
    Ok(data)
}

/// Pick the input for one conversion
///
/// An inline value wins over a file; with neither, the whole of `fallback`
/// (stdin for the CLI) is read.
pub fn read_input<R: Read>(
    inline: Option<String>,
    file: Option<&Path>,
    mut fallback: R,
) -> Result<String> {
    match (inline, file) {
        (Some(value), _) => Ok(value),
        (None, Some(path)) => load_data(path),
        (None, None) => {
            let mut data = String::new();
            fallback.read_to_string(&mut data).map_err(|source| ConversionError::Io {
                path: STDIN_PATH.into(),
                source,
            })?;
            Ok(data)
        }
    }
}
