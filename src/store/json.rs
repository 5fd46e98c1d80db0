//! Category index JSON serialization
//!
//! The on-disk format mirrors the in-memory shape: a mapping from category
//! label to a list of book objects with four fields each. Unknown fields
//! are stored as `null`. Output is pretty-printed with 4-space indentation
//! and leaves non-ASCII text unescaped, so titles and descriptions survive
//! a round trip byte-for-byte.

use crate::model::CategoryIndex;
use crate::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Writes the category index as pretty-printed UTF-8 JSON.
///
/// Creates parent directories as needed and unconditionally overwrites any
/// existing file. The file is written in a single whole-document write at
/// the end of collection.
pub fn write_category_index(index: &CategoryIndex, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    index.serialize(&mut serializer)?;

    fs::write(path, buf)?;
    Ok(())
}

/// Loads a category index from disk.
///
/// A missing or malformed file is a fatal error; there is no partial
/// recovery.
pub fn load_category_index(path: &Path) -> Result<CategoryIndex> {
    let content = fs::read_to_string(path)?;
    let index: CategoryIndex = serde_json::from_str(&content)?;
    Ok(index)
}
