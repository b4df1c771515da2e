//! `package.json` name injection
//!
//! Key order is preserved (serde_json `preserve_order`), so a rewritten
//! manifest differs from the template's only in its `name` and formatting.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, SeedlingError};

/// Set the `name` field of a JSON manifest
///
/// Returns the manifest pretty-printed with 2-space indentation and a
/// trailing newline. A missing `name` key is appended.
///
/// # Errors
///
/// Returns an error if `source` is not valid JSON or not a JSON object.
/// `path` is only used for error reporting.
pub fn patch_name(source: &[u8], name: &str, path: &Path) -> Result<String> {
    let invalid = |err| SeedlingError::Manifest {
        path: path.to_path_buf(),
        source: err,
    };

    let mut manifest: Value = serde_json::from_slice(source).map_err(invalid)?;

    let Some(fields) = manifest.as_object_mut() else {
        return Err(SeedlingError::ManifestNotObject {
            path: path.to_path_buf(),
        });
    };
    fields.insert("name".to_string(), Value::String(name.to_string()));

    let mut rendered = serde_json::to_string_pretty(&manifest).map_err(invalid)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Read the manifest at `src`, set its name, and write it to `dest`
///
/// # Errors
///
/// Returns an error if `src` cannot be read or parsed, or `dest` cannot be
/// written.
pub fn write_manifest(src: &Path, dest: &Path, name: &str) -> Result<()> {
    let source = fs::read(src).map_err(|e| SeedlingError::io("failed to read", src, e))?;
    let rendered = patch_name(&source, name, src)?;

    fs::write(dest, rendered).map_err(|e| SeedlingError::io("failed to write", dest, e))?;
    tracing::debug!(path = %dest.display(), name, "wrote manifest");
    Ok(())
}
