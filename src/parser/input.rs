//! Read a raw dump and split it into blocks.

use crate::utils::config::STDIN_PATH;
use crate::utils::error::InputError;
use log::{debug, warn};
use std::io::Read;
use std::path::Path;

/// Read the whole dump from a file, or stdin when `path` is `None` or `-`
///
/// Invalid UTF-8 is replaced with U+FFFD rather than failing the read, so
/// a corrupt block only fails its own grammar match.
pub fn read_input(path: Option<&Path>) -> Result<String, InputError> {
    let bytes = match path {
        Some(p) if p != Path::new(STDIN_PATH) => {
            debug!("Reading dump from {}", p.display());
            std::fs::read(p).map_err(|source| InputError::ReadFailed {
                path: p.display().to_string(),
                source,
            })?
        }
        _ => {
            debug!("Reading dump from stdin");
            let mut bytes = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .map_err(|source| InputError::ReadFailed {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            bytes
        }
    };

    debug!("Read {} bytes", bytes.len());
    Ok(decode_lossy(bytes))
}

fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("Dump is not valid UTF-8; replacing invalid bytes");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Split dump text into blocks of trimmed, non-empty lines
///
/// One or more blank lines end a block. Content after the last blank
/// line forms a final block.
pub fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(line);
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}
