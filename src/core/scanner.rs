//! Directory scanner module.
//!
//! Lists the top level of a show directory and keeps the files whose
//! extension is in the configured allow-list. Subdirectories are never
//! descended into.

use crate::models::episode::FileEntry;
use crate::utils::fs::ensure_directory;
use crate::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Extension of a file name including the leading dot.
///
/// Follows the usual path rules: `"a.mp4"` gives `".mp4"`, `".hidden"` and
/// `"README"` give `None`.
pub fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}

/// Check if an extension is in the allow-list. Comparison is exact and
/// case-sensitive; a missing allow-list admits nothing.
pub fn is_valid_extension(ext: &str, allowed: Option<&[String]>) -> bool {
    allowed
        .map(|list| list.iter().any(|a| a == ext))
        .unwrap_or(false)
}

/// List the direct children of a directory.
pub fn list_directory(path: &Path) -> Result<Vec<FileEntry>> {
    ensure_directory(path)?;

    let mut entries = Vec::new();
    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Failed to read entry in {}: {}", path.display(), e);
                continue;
            }
        };

        entries.push(FileEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            is_file: entry.file_type().is_file(),
        });
    }

    Ok(entries)
}

/// Names of the regular files whose extension is allowed.
pub fn filter_file_types(entries: &[FileEntry], allowed: Option<&[String]>) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| entry.is_file)
        .filter(|entry| {
            extension_of(&entry.name)
                .map(|ext| is_valid_extension(&ext, allowed))
                .unwrap_or(false)
        })
        .map(|entry| entry.name.clone())
        .collect()
}

/// List a directory and keep the allowed files.
pub fn scan_directory(path: &Path, allowed: Option<&[String]>) -> Result<Vec<String>> {
    let entries = list_directory(path)?;
    let files = filter_file_types(&entries, allowed);

    tracing::info!(
        "Scanned {} entries in {}: {} eligible files",
        entries.len(),
        path.display(),
        files.len()
    );

    Ok(files)
}
