use std::path::{Path, PathBuf};

use crate::error::KtxifyResult;

/// Resolves `relative` against the directory containing `base_file`.
///
/// glTF uris are relative to the document that references them, so both the
/// input lookup and the output placement go through this.
pub fn sibling_path(base_file: &Path, relative: &str) -> PathBuf {
    base_file
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(relative)
}

/// Drops the final `.ext` suffix of a uri and appends `.new_ext`.
/// A uri without an extension gets `.new_ext` appended.
pub fn replace_extension(uri: &str, new_ext: &str) -> String {
    match uri.rsplit_once('.') {
        Some((stem, _)) => format!("{stem}.{new_ext}"),
        None => format!("{uri}.{new_ext}"),
    }
}

pub fn ensure_parent_dir(path: &Path) -> KtxifyResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}
