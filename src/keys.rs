//! Key-source tokenization
//!
//! The filter core consumes already-split key strings; this module is the
//! external collaborator that produces them. Keys are whitespace-delimited
//! tokens of arbitrary length; the source's format does not matter beyond
//! that.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

/// Read whitespace-delimited keys from any byte source
pub fn read_keys<R: Read>(source: R) -> io::Result<Vec<String>> {
    let mut keys = Vec::new();
    for line in BufReader::new(source).lines() {
        let line = line?;
        keys.extend(line.split_whitespace().map(str::to_owned));
    }
    Ok(keys)
}

/// Read whitespace-delimited keys from a file
pub fn read_keys_from_path<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let keys = read_keys(File::open(path)?)?;
    debug!(path = %path.display(), count = keys.len(), "tokenized key source");
    Ok(keys)
}
