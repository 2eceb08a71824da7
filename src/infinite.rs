// Infinite loop detector - literal always-true loop headers
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which always-true shape was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfiniteLoopKind {
    /// `while(1)` or `while(true)`
    WhileTrue,
    /// `for(;;)`
    EmptyFor,
    /// `do { ... } while(1);`
    DoWhileTrue,
}

impl InfiniteLoopKind {
    pub fn describe(&self) -> &'static str {
        match self {
            InfiniteLoopKind::WhileTrue => "while(1)",
            InfiniteLoopKind::EmptyFor => "for(;;)",
            InfiniteLoopKind::DoWhileTrue => "do-while(1)",
        }
    }
}

lazy_static! {
    static ref INFINITE_PATTERNS: Vec<(Regex, InfiniteLoopKind)> = vec![
        (
            Regex::new(r"\bwhile\s*\(\s*(?:1|true)\s*\)").unwrap(),
            InfiniteLoopKind::WhileTrue,
        ),
        (
            Regex::new(r"\bfor\s*\(\s*;\s*;\s*\)").unwrap(),
            InfiniteLoopKind::EmptyFor,
        ),
        (
            Regex::new(r"(?s)do\s*\{.*?\}\s*while\s*\(\s*(?:1|true)\s*\)").unwrap(),
            InfiniteLoopKind::DoWhileTrue,
        ),
    ];
}

/// First always-true shape found, checked in while / for / do-while order
pub fn find_infinite_loop(cleaned: &str) -> Option<InfiniteLoopKind> {
    INFINITE_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(cleaned))
        .map(|(_, kind)| *kind)
}

pub fn has_infinite_loop(cleaned: &str) -> bool {
    find_infinite_loop(cleaned).is_some()
}
