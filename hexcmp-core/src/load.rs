use crate::error::{HexcmpError, Result};
use crate::hex;

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Read a whole file into memory.
pub fn load(path: &Path) -> Result<Vec<u8>> {
    let read_err = |e: std::io::Error| match e.kind() {
        ErrorKind::NotFound => HexcmpError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => HexcmpError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    };
    let mut f = File::open(path).map_err(read_err)?;
    let mut bytes = Vec::new();
    f.read_to_end(&mut bytes).map_err(read_err)?;
    debug!(path = %path.display(), bytes = bytes.len(), "loaded input");
    Ok(bytes)
}

pub fn load_and_encode(path: &Path) -> Result<String> {
    Ok(hex::encode(&load(path)?))
}
