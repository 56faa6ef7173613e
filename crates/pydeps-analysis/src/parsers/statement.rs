//! Splitting import statements into root specifier and imported names.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::recognizer::is_import_statement;

/// Rename clause separator. Everything from the first occurrence on is dropped.
const RENAME_SEPARATOR: &str = " as ";

/// One recognized import statement, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStatement {
    pub raw_text: String,
    /// Module path before the imported names; keeps leading relative dots and,
    /// for `from` forms, the `from` keyword (cleaned by the classifier).
    pub root_specifier: String,
    /// Names after `import` in a `from` form. Empty for plain `import x`.
    pub imported_names: SmallVec<[String; 4]>,
    pub is_from_form: bool,
}

impl ImportStatement {
    pub fn parse(statement: &str) -> Self {
        let is_from_form = is_from_form(statement);
        let (root_specifier, names) = split_root_and_names(statement);
        let imported_names = if is_from_form {
            names.into_iter().collect()
        } else {
            SmallVec::new()
        };
        Self {
            raw_text: statement.to_string(),
            root_specifier,
            imported_names,
            is_from_form,
        }
    }
}

/// Cut `line` at the first ` as `, keeping the left part.
pub fn strip_rename(line: &str) -> &str {
    match line.find(RENAME_SEPARATOR) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Whether the statement is a `from ... import ...` form.
pub fn is_from_form(statement: &str) -> bool {
    statement
        .trim_start()
        .strip_prefix("from")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_whitespace() || c == '.')
}

/// Split a statement into `(root_specifier, imported_names)`.
///
/// - `from X import a, b` gives `("from X ", ["a", "b"])`.
/// - `import X, Y` gives `("X, Y", ["X, Y"])`: plain imports have no separate
///   name list, so the root is repeated.
///
/// The split happens at the last `import `. When the text before it is blank
/// the root falls back to the text after it.
pub fn split_root_and_names(statement: &str) -> (String, Vec<String>) {
    let statement = strip_rename(statement.trim());
    let Some((left, right)) = statement.rsplit_once("import ") else {
        return (statement.to_string(), Vec::new());
    };

    let root = if left.trim().is_empty() { right } else { left };

    if is_from_form(statement) {
        let names = right
            .split(',')
            .map(clean_name)
            .filter(|name| !name.is_empty())
            .collect();
        (root.to_string(), names)
    } else {
        let root = root.trim().to_string();
        let names = vec![root.clone()];
        (root, names)
    }
}

/// Trim an imported name, dropping grouping parentheses and inner spaces.
pub(crate) fn clean_name(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '(' || c == ')')
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Extract the import statements of a file, in source order.
///
/// Each recognized line is trimmed and cut at its trailing comment and
/// rename clause.
pub fn extract_imports(file_content: &str) -> Vec<String> {
    file_content
        .lines()
        .map(str::trim)
        .filter(|line| is_import_statement(line))
        .map(|line| strip_rename(strip_comment(line)).trim().to_string())
        .collect()
}

/// Import statements hold no string literals, so `#` always opens a comment.
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_imports_in_order() {
        let source = "\
import os
import numpy as np

def main():
    from collections import OrderedDict as OD
    x = 1

from .local import helper  # sibling
print('import nothing')
";
        assert_eq!(
            extract_imports(source),
            vec![
                "import os",
                "import numpy",
                "from collections import OrderedDict",
                "from .local import helper",
            ]
        );
    }

    #[test]
    fn test_extract_imports_crlf() {
        assert_eq!(extract_imports("import os\r\nimport sys\r\n"), vec!["import os", "import sys"]);
    }

    #[test]
    fn test_extract_imports_empty() {
        assert!(extract_imports("").is_empty());
    }

    #[test]
    fn test_split_from_form() {
        let (root, names) = split_root_and_names("from my.pkg import Thing, Other");
        assert_eq!(root, "from my.pkg ");
        assert_eq!(names, vec!["Thing", "Other"]);
    }

    #[test]
    fn test_split_from_form_rename() {
        let (root, names) = split_root_and_names("from pydantic import nothing as nn");
        assert_eq!(root, "from pydantic ");
        assert_eq!(names, vec!["nothing"]);
    }

    #[test]
    fn test_split_parenthesized_names() {
        let (_, names) = split_root_and_names("from typing import (List, Dict)");
        assert_eq!(names, vec!["List", "Dict"]);
    }

    #[test]
    fn test_split_plain_form_repeats_root() {
        assert_eq!(
            split_root_and_names("import os"),
            ("os".to_string(), vec!["os".to_string()])
        );
        assert_eq!(
            split_root_and_names("import os, sys"),
            ("os, sys".to_string(), vec!["os, sys".to_string()])
        );
    }

    #[test]
    fn test_split_plain_module_containing_keyword() {
        let (root, _) = split_root_and_names("import importlib");
        assert_eq!(root, "importlib");
    }

    #[test]
    fn test_parse_statement() {
        let stmt = ImportStatement::parse("from ..pkg.mod import x");
        assert!(stmt.is_from_form);
        assert_eq!(stmt.root_specifier, "from ..pkg.mod ");
        assert_eq!(stmt.imported_names.as_slice(), ["x".to_string()]);

        let plain = ImportStatement::parse("import a.b.c");
        assert!(!plain.is_from_form);
        assert_eq!(plain.root_specifier, "a.b.c");
        assert!(plain.imported_names.is_empty());
    }

    #[test]
    fn test_is_from_form() {
        assert!(is_from_form("from os import path"));
        assert!(is_from_form("from.pkg import x"));
        assert!(!is_from_form("import fromage"));
        assert!(!is_from_form("import os"));
    }

    #[test]
    fn test_strip_rename() {
        assert_eq!(strip_rename("import data as ddd"), "import data");
        assert_eq!(strip_rename("import ast"), "import ast");
        assert_eq!(strip_rename("from a import b as c, d as e"), "from a import b");
    }
}
