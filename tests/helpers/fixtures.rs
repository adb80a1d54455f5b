//! On-disk workspace fixtures.
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

/// Write one module file under `root`, creating parent directories.
pub fn write_module(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, text).unwrap();
}
