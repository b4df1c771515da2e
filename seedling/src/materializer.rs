//! File-system side of scaffolding
//!
//! All operations write to disk immediately. There is no dry-run mode and no
//! rollback: a failure halfway leaves a partially copied or partially emptied
//! tree behind. Traversals use walkdir's explicit work-list so deep template
//! trees never grow the call stack.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, SeedlingError};
use crate::manifest;

/// Manifest file handled by [`MaterializeRules`] instead of being copied
pub const MANIFEST_FILE: &str = "package.json";

/// Copy `src` to `dest`
///
/// Directories are copied recursively via [`copy_dir`]; anything else has its
/// bytes copied. Permissions may carry over, other metadata does not.
///
/// # Errors
///
/// Returns an error if `src` cannot be read or `dest` cannot be written.
pub fn copy(src: &Path, dest: &Path) -> Result<()> {
    let metadata =
        fs::metadata(src).map_err(|e| SeedlingError::io("failed to read", src, e))?;

    if metadata.is_dir() {
        copy_dir(src, dest)
    } else {
        copy_file(src, dest)
    }
}

/// Copy the contents of `src` into `dest`, creating `dest` if needed
///
/// Symlinks are followed, so the destination holds real files.
///
/// # Errors
///
/// Returns an error on the first entry that cannot be read or written.
pub fn copy_dir(src: &Path, dest: &Path) -> Result<()> {
    create_dir_all(dest)?;

    for entry in WalkDir::new(src).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| walk_error(src, e))?;
        let relative = entry.path().strip_prefix(src).map_err(|e| {
            SeedlingError::io("failed to copy", entry.path(), std::io::Error::other(e))
        })?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            create_dir_all(&target)?;
        } else {
            copy_file(entry.path(), &target)?;
        }
    }

    Ok(())
}

/// Remove everything inside `dir`, keeping `dir` itself
///
/// Does nothing if `dir` does not exist.
///
/// # Errors
///
/// Returns an error on the first entry that cannot be removed.
pub fn empty_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    // Children are yielded before their parent, so directories are empty by
    // the time they are removed.
    for entry in WalkDir::new(dir).min_depth(1).contents_first(true) {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            fs::remove_dir(path).map_err(|e| SeedlingError::io("failed to remove", path, e))?;
        } else {
            fs::remove_file(path).map_err(|e| SeedlingError::io("failed to remove", path, e))?;
        }
        tracing::trace!(path = %path.display(), "removed");
    }

    Ok(())
}

/// Whether `dir` exists and has no entries
///
/// # Errors
///
/// Returns an error if `dir` exists but cannot be listed.
pub fn is_empty_dir(dir: &Path) -> Result<bool> {
    let mut entries =
        fs::read_dir(dir).map_err(|e| SeedlingError::io("failed to read", dir, e))?;
    Ok(entries.next().is_none())
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| SeedlingError::io("failed to create directory", path, e))
}

fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest).map_err(|e| SeedlingError::io("failed to copy", src, e))?;
    tracing::debug!(from = %src.display(), to = %dest.display(), "copied");
    Ok(())
}

fn walk_error(root: &Path, err: walkdir::Error) -> SeedlingError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
    SeedlingError::io("failed to walk", path, source)
}

/// Per-entry rules applied while materializing a template root
///
/// Consulted during a single pass over the template's top-level entries:
/// the manifest is rewritten with the project's name, renamed entries land
/// under their real name, and everything else is copied verbatim.
#[derive(Debug, Clone)]
pub struct MaterializeRules {
    renames: HashMap<OsString, OsString>,
    manifest: Option<OsString>,
}

impl Default for MaterializeRules {
    fn default() -> Self {
        Self::new()
            .rename("_gitignore", ".gitignore")
            .manifest(MANIFEST_FILE)
    }
}

impl MaterializeRules {
    /// Rules with no renames and no manifest handling
    #[must_use]
    pub fn new() -> Self {
        Self {
            renames: HashMap::new(),
            manifest: None,
        }
    }

    /// Write the template entry `from` as `to`
    #[must_use]
    pub fn rename(mut self, from: impl Into<OsString>, to: impl Into<OsString>) -> Self {
        self.renames.insert(from.into(), to.into());
        self
    }

    /// Treat the top-level entry `file_name` as the package manifest
    #[must_use]
    pub fn manifest(mut self, file_name: impl Into<OsString>) -> Self {
        self.manifest = Some(file_name.into());
        self
    }

    /// Output name for a template entry
    ///
    /// Names without a rename come back untouched, byte for byte.
    #[must_use]
    pub fn output_name<'a>(&'a self, file_name: &'a OsStr) -> &'a OsStr {
        self.renames.get(file_name).map_or(file_name, OsString::as_os_str)
    }

    /// Whether `file_name` is the manifest
    #[must_use]
    pub fn is_manifest(&self, file_name: &OsStr) -> bool {
        self.manifest.as_deref() == Some(file_name)
    }
}

/// Write the template at `template_root` into `dest`
///
/// `dest` must already exist. Top-level entries are renamed per `rules`; the
/// manifest, if present, gets its `name` set to `package_name`.
///
/// # Errors
///
/// Returns an error if the template cannot be read, the manifest is not a
/// JSON object, or any output cannot be written.
pub fn materialize(
    template_root: &Path,
    dest: &Path,
    rules: &MaterializeRules,
    package_name: &str,
) -> Result<()> {
    let entries = fs::read_dir(template_root)
        .map_err(|e| SeedlingError::io("failed to read template", template_root, e))?;

    for entry in entries {
        let entry =
            entry.map_err(|e| SeedlingError::io("failed to read template", template_root, e))?;
        let file_name = entry.file_name();
        let src = entry.path();

        if rules.is_manifest(&file_name) {
            manifest::write_manifest(&src, &dest.join(&file_name), package_name)?;
            continue;
        }

        copy(&src, &dest.join(rules.output_name(&file_name)))?;
    }

    Ok(())
}
