use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub const PARSER_SOURCE_TOKEN: &str = "@@PARSER_SOURCE@@";
pub const PARSER_HEADER_TOKEN: &str = "@@PARSER_HEADER@@";
pub const PARSER_CALL_TOKEN: &str = "@@PARSER_CALL@@";

/// Replace every occurrence of each placeholder token in `target` with its
/// value, rewriting the file all-or-nothing.
///
/// Substitution is literal, so path separators and other regex-significant
/// characters in the replacement pass through untouched. A token that no
/// longer occurs is a no-op, which makes a re-run over an already-patched
/// file harmless. The new content lands in a temp file in the same
/// directory and is renamed over the original, so a failed write never
/// leaves the target half-rewritten.
pub fn patch_file(target: &Path, replacements: &[(&str, &str)]) -> Result<()> {
    let content = fs::read_to_string(target)
        .context(format!("failed to read template `{}`", target.display()))?;

    let mut patched = content;
    for (token, value) in replacements {
        patched = patched.replace(token, value);
    }

    let dir = target.parent().ok_or_else(|| {
        anyhow::anyhow!("template `{}` has no parent directory", target.display())
    })?;

    let mut temp = NamedTempFile::new_in(dir)
        .context(format!("failed to stage rewrite of `{}`", target.display()))?;
    temp.write_all(patched.as_bytes())
        .context(format!("failed to stage rewrite of `{}`", target.display()))?;
    temp.persist(target)
        .map_err(|e| e.error)
        .context(format!("failed to replace `{}`", target.display()))?;

    Ok(())
}
