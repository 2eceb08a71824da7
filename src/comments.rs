// Comment stripper - removes block and line comments from C-family source
//
// No awareness of string literals: a `//` or `/*` inside a string is treated
// as a comment start.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BLOCK_COMMENT: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();
    static ref LINE_COMMENT: Regex = Regex::new(r"//[^\r\n]*").unwrap();
}

/// Remove every `/* ... */` span, then every `//` to end of line.
pub fn strip_comments(text: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(text, "");
    LINE_COMMENT.replace_all(&without_blocks, "").into_owned()
}
