//! Single-line import recognition with the tree-sitter Python grammar.
//!
//! A line counts as an import only if it parses cleanly into exactly one
//! statement of an import kind. Anything else (syntax errors, `a; b`
//! compound lines, partial multi-line imports) is not an import.

use std::cell::RefCell;

use pydeps_core::errors::ParseError;
use tree_sitter::Parser;

/// Statement kinds produced by the Python grammar for import forms.
const IMPORT_KINDS: &[&str] = &[
    "import_statement",
    "import_from_statement",
    "future_import_statement",
];

thread_local! {
    // tree-sitter parsers are Send but not Sync: one per worker thread.
    static PARSER: RefCell<Option<Parser>> = const { RefCell::new(None) };
}

/// Create a parser configured for Python.
pub fn python_parser() -> Result<Parser, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| ParseError::GrammarNotFound {
            language: "Python".to_string(),
            message: e.to_string(),
        })?;
    Ok(parser)
}

/// Whether `line` is exactly one `import` / `from ... import` statement.
///
/// Never fails: a missing grammar or a broken line both answer `false`.
pub fn is_import_statement(line: &str) -> bool {
    let line = line.trim();
    // Every import form contains the keyword; skip the parse otherwise.
    if !line.contains("import") {
        return false;
    }

    PARSER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            match python_parser() {
                Ok(parser) => *slot = Some(parser),
                Err(e) => {
                    tracing::warn!(error = %e, "python grammar unavailable");
                    return false;
                }
            }
        }
        match slot.as_mut() {
            Some(parser) => parse_is_import(parser, line),
            None => false,
        }
    })
}

fn parse_is_import(parser: &mut Parser, line: &str) -> bool {
    let Some(tree) = parser.parse(line, None) else {
        return false;
    };
    let root = tree.root_node();
    if root.has_error() {
        return false;
    }

    let mut cursor = root.walk();
    let mut statements = root
        .named_children(&mut cursor)
        .filter(|node| node.kind() != "comment");
    match (statements.next(), statements.next()) {
        (Some(node), None) => IMPORT_KINDS.contains(&node.kind()),
        _ => false,
    }
}
