// Shared token-level patterns for loop headers and literal masking
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Whole single- or double-quoted literal, escapes respected
    static ref QUOTED_LITERAL: Regex =
        Regex::new(r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#).unwrap();

    pub(crate) static ref FOR_HEADER: Regex = Regex::new(r"\bfor\s*\(").unwrap();
    pub(crate) static ref WHILE_HEADER: Regex = Regex::new(r"\bwhile\s*\(").unwrap();
    pub(crate) static ref DO_HEADER: Regex = Regex::new(r"\bdo\s*\{").unwrap();
}

/// Remove every string and character literal so keywords inside string
/// data are not counted.
pub fn mask_literals(text: &str) -> String {
    QUOTED_LITERAL.replace_all(text, "").into_owned()
}

/// True if the text contains a `for(`, `while(` or `do{` header
pub fn is_loop_header(line: &str) -> bool {
    FOR_HEADER.is_match(line) || WHILE_HEADER.is_match(line) || DO_HEADER.is_match(line)
}
