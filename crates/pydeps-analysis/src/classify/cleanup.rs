//! String normalization for import specifiers.

use std::sync::LazyLock;

use pydeps_core::errors::ClassifyError;
use regex::Regex;

static RENAME_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+as\s.*").expect("rename clause pattern is valid"));

/// Words dropped by [`remove_keywords`], compared case-insensitively.
const KEYWORDS: &[&str] = &["as", "from", "import"];

/// Remove a rename clause: `import pandas as pd` becomes `import pandas`.
pub fn remove_renamed_imports(statement: &str) -> Result<String, ClassifyError> {
    if statement.trim().is_empty() {
        return Err(ClassifyError::empty_statement());
    }
    Ok(RENAME_CLAUSE.replace(statement, "").into_owned())
}

/// Remove the rename clause and the `from` / `import` keywords, leaving the
/// bare module path(s). `from os import path` becomes `os path`.
pub fn remove_keywords(statement: &str) -> Result<String, ClassifyError> {
    let statement = remove_renamed_imports(statement)?;
    let kept: Vec<&str> = statement
        .split(' ')
        .filter(|word| !word.is_empty())
        .filter(|word| !KEYWORDS.contains(&word.to_ascii_lowercase().as_str()))
        .collect();
    Ok(kept.join(" "))
}

/// Reduce a relative module path to its first segment after the dots:
/// `..pkg.mod` and `.pkg.mod` both become `pkg`. Absolute paths are unchanged.
pub fn module_name_cleanup(module_name: &str) -> String {
    let mut name = module_name.to_string();
    if let Some(rest) = name.strip_prefix("..") {
        name = first_segment(rest).to_string();
    }
    if let Some(rest) = name.strip_prefix('.') {
        name = first_segment(rest).to_string();
    }
    name
}

fn first_segment(path: &str) -> &str {
    path.split('.').next().unwrap_or_default()
}

/// Display form of a root specifier, used as the aggregation key.
///
/// Drops `from `, all spaces and every `..`, trims, then drops one leading `.`:
/// `from ..abstract_models.graph ` becomes `abstract_models.graph`.
pub fn root_cleanup(root: &str) -> String {
    let root = root.replace("from ", "").replace(' ', "").replace("..", "");
    let root = root.trim();
    root.strip_prefix('.').unwrap_or(root).to_string()
}
