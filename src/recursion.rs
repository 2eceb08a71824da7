// Recursion detector - finds definition-shaped headers and counts call sites
//
// Heuristic: a candidate whose name appears as `name(` more than once
// anywhere in the text is flagged. The extra occurrence is not required to
// sit inside the function's own body, so a call from a sibling function
// also counts.
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

lazy_static! {
    /// `name ( params ) {` where params contain no `;` or `{`
    static ref DEFINITION_HEADER: Regex = Regex::new(r"(\w+)\s*\([^;{]*\)\s*\{").unwrap();
    static ref CALL_SITE: Regex = Regex::new(r"\b(\w+)\s*\(").unwrap();
}

/// Control-flow keywords that share the definition shape
const CONTROL_KEYWORDS: [&str; 5] = ["if", "for", "while", "switch", "else"];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecursionInfo {
    pub has_recursion: bool,
    /// Distinct candidate names in first-seen order
    pub functions: Vec<String>,
    pub recursive_fns: Vec<String>,
}

pub fn detect_recursion(cleaned: &str) -> RecursionInfo {
    let functions = candidate_functions(cleaned);
    let sites = call_site_counts(cleaned);

    let recursive_fns: Vec<String> = functions
        .iter()
        .filter(|name| sites.get(name.as_str()).copied().unwrap_or(0) > 1)
        .cloned()
        .collect();

    debug!(
        "Recursion scan: {} candidate(s), {} recursive",
        functions.len(),
        recursive_fns.len()
    );

    RecursionInfo {
        has_recursion: !recursive_fns.is_empty(),
        functions,
        recursive_fns,
    }
}

fn candidate_functions(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for caps in DEFINITION_HEADER.captures_iter(text) {
        let name = &caps[1];
        if CONTROL_KEYWORDS.contains(&name) {
            continue;
        }
        if !names.iter().any(|seen| seen == name) {
            names.push(name.to_string());
        }
    }

    names
}

/// Occurrences of every `name(` in one pass, definition headers included
fn call_site_counts(text: &str) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for caps in CALL_SITE.captures_iter(text) {
        if let Some(name) = caps.get(1) {
            *counts.entry(name.as_str()).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_recursive_function() {
        let info = detect_recursion("int f(int n){ if(n==0) return 0; return f(n-1); }");
        assert_eq!(info.functions, vec!["f"]);
        assert_eq!(info.recursive_fns, vec!["f"]);
        assert!(info.has_recursion);
    }

    #[test]
    fn test_single_occurrence_is_not_recursive() {
        let info = detect_recursion("int sum(int a, int b) {\n  return a + b;\n}");
        assert_eq!(info.functions, vec!["sum"]);
        assert!(info.recursive_fns.is_empty());
        assert!(!info.has_recursion);
    }

    #[test]
    fn test_control_keywords_are_excluded() {
        let src = "void run(int n) {\n  if (n > 0) {\n    while (n) { n--; }\n    for (;;) { break; }\n    switch (n) { default: break; }\n  }\n}";
        let info = detect_recursion(src);
        assert_eq!(info.functions, vec!["run"]);
        assert!(!info.has_recursion);
    }

    #[test]
    fn test_sibling_call_counts_as_recursive() {
        let src = "int helper(int x) { return x * 2; }\nint main() { return helper(3); }";
        let info = detect_recursion(src);
        assert_eq!(info.functions, vec!["helper", "main"]);
        assert_eq!(info.recursive_fns, vec!["helper"]);
        assert!(info.has_recursion);
    }

    #[test]
    fn test_functions_deduplicated_in_first_seen_order() {
        let src = "int b(int x) { return x; }\nint a(int y) { return y; }\nint b(double x) { return 0; }";
        let info = detect_recursion(src);
        assert_eq!(info.functions, vec!["b", "a"]);
        assert_eq!(info.recursive_fns, vec!["b"]);
    }

    #[test]
    fn test_call_count_uses_word_boundary() {
        let src = "int fact(int n) { return n <= 1 ? 1 : n * subfact(n - 1); }";
        let info = detect_recursion(src);
        assert_eq!(info.functions, vec!["fact"]);
        assert!(!info.has_recursion);
    }

    #[test]
    fn test_multiline_parameter_list() {
        let src = "long power(long base,\n           int exp)\n{\n  if (exp == 0) return 1;\n  return base * power(base, exp - 1);\n}";
        let info = detect_recursion(src);
        assert_eq!(info.functions, vec!["power"]);
        assert!(info.has_recursion);
    }

    #[test]
    fn test_no_definitions() {
        let info = detect_recursion("x = y + 1;");
        assert_eq!(info, RecursionInfo::default());
    }

    #[test]
    fn test_call_sites_counted_per_whole_word() {
        let counts = call_site_counts("fact(n); subfact (n); fact(1); if (x) g();");
        assert_eq!(counts.get("fact"), Some(&2));
        assert_eq!(counts.get("subfact"), Some(&1));
        assert_eq!(counts.get("if"), Some(&1));
        assert_eq!(counts.get("g"), Some(&1));
        assert_eq!(counts.get("x"), None);
    }

    #[test]
    fn test_many_candidates_each_checked() {
        let src: String = (0..200)
            .map(|i| format!("int f{i}(int n) {{ return n; }}\n"))
            .chain(std::iter::once("int main() { return f7(1) + f42(2); }".to_string()))
            .collect();
        let info = detect_recursion(&src);
        assert_eq!(info.functions.len(), 201);
        assert_eq!(info.recursive_fns, vec!["f7", "f42"]);
    }
}
