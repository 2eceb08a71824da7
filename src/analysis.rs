// Analysis pipeline - strip comments, classify, detect loops / nesting /
// recursion / infinite loops, then estimate complexity
use crate::comments::strip_comments;
use crate::complexity::{estimate, ComplexityEstimate};
use crate::infinite::{find_infinite_loop, InfiniteLoopKind};
use crate::language::{classify, LanguageGuess};
use crate::loops::{detect_loops, LoopCounts};
use crate::nesting::estimate_nest_depth;
use crate::recursion::{detect_recursion, RecursionInfo};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of one `analyze` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Analysis {
    /// Blank or whitespace-only input; callers reset any prior display
    Empty,
    Report(AnalysisResult),
}

impl Analysis {
    pub fn is_empty(&self) -> bool {
        matches!(self, Analysis::Empty)
    }

    pub fn report(&self) -> Option<&AnalysisResult> {
        match self {
            Analysis::Empty => None,
            Analysis::Report(result) => Some(result),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub language: LanguageGuess,
    pub loops: LoopCounts,
    pub nest_depth: usize,
    pub recursion: RecursionInfo,
    pub infinite_loop_detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infinite_loop: Option<InfiniteLoopKind>,
    /// Absent when an infinite loop was detected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<ComplexityEstimate>,
}

/// Run the full pipeline over one snippet. Pure: same input, same result.
pub fn analyze(source: &str) -> Analysis {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        debug!("Blank input, returning empty state");
        return Analysis::Empty;
    }

    let cleaned = strip_comments(trimmed);
    let language = classify(&cleaned);
    debug!(
        "Language guess: {} (C {}, Java {})",
        language.label, language.score_c, language.score_java
    );

    let infinite_loop = find_infinite_loop(&cleaned);
    let loops = detect_loops(&cleaned);
    let nest_depth = estimate_nest_depth(&cleaned);
    let recursion = detect_recursion(&cleaned);
    debug!(
        "Loops: for={} while={} do-while={}, nest depth {}",
        loops.for_count, loops.while_count, loops.do_while_count, nest_depth
    );

    let complexity = match infinite_loop {
        Some(kind) => {
            debug!("Infinite loop pattern {}, skipping complexity", kind.describe());
            None
        }
        None => Some(estimate(&loops, &recursion, nest_depth)),
    };

    Analysis::Report(AnalysisResult {
        language,
        loops,
        nest_depth,
        recursion,
        infinite_loop_detected: infinite_loop.is_some(),
        infinite_loop,
        complexity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageLabel;

    fn report(src: &str) -> AnalysisResult {
        match analyze(src) {
            Analysis::Report(result) => result,
            Analysis::Empty => panic!("expected a report for: {}", src),
        }
    }

    #[test]
    fn test_single_loop_scenario() {
        let result = report("for(int i=0;i<n;i++){ total+=i; }");
        assert_eq!(result.loops.for_count, 1);
        assert_eq!(result.loops.while_count, 0);
        assert_eq!(result.loops.do_while_count, 0);
        assert_eq!(result.nest_depth, 1);
        assert!(!result.recursion.has_recursion);
        assert!(!result.infinite_loop_detected);
        assert_eq!(result.complexity.unwrap().label, "O(n)");
    }

    #[test]
    fn test_nested_loop_scenario() {
        let result = report("for(int i=0;i<n;i++){ for(int j=0;j<n;j++){ x++; } }");
        assert_eq!(result.nest_depth, 2);
        assert_eq!(result.complexity.unwrap().label, "O(n²)");
    }

    #[test]
    fn test_infinite_loop_scenario_skips_complexity() {
        let result = report("while(1){ x++; }");
        assert!(result.infinite_loop_detected);
        assert_eq!(result.infinite_loop, Some(InfiniteLoopKind::WhileTrue));
        assert!(result.complexity.is_none());
        assert_eq!(result.loops.while_count, 1);
    }

    #[test]
    fn test_recursion_scenario() {
        let result = report("int f(int n){ if(n==0) return 0; return f(n-1); }");
        assert_eq!(result.recursion.functions, vec!["f"]);
        assert_eq!(result.recursion.recursive_fns, vec!["f"]);
        assert!(result.recursion.has_recursion);
        assert!(result.complexity.unwrap().label.contains("(with recursion)"));
    }

    #[test]
    fn test_bubble_sort_body_is_quadratic() {
        let src = "for (int i = 0; i < n; i++) {\n  for (int j = 0; j < n - 1; j++) {\n    if (a[j] > a[j + 1]) { swap(a, j); }\n  }\n}";
        let result = report(src);
        assert_eq!(result.nest_depth, 2);
        assert_eq!(result.complexity.unwrap().label, "O(n²)");
    }

    #[test]
    fn test_blank_input_is_empty_state() {
        assert!(analyze("").is_empty());
        assert!(analyze("   \n\t  \r\n").is_empty());
        assert!(analyze(" ").report().is_none());
    }

    #[test]
    fn test_java_scenario() {
        let src = "public class Main {\n  public static void main(String[] args) {\n    System.out.println(\"hello\");\n  }\n}";
        let result = report(src);
        assert!(result.language.score_java > result.language.score_c);
        assert_eq!(result.language.label, LanguageLabel::Java);
    }

    #[test]
    fn test_no_loops_no_recursion_is_constant() {
        let result = report("int add(int a, int b) { return a + b; }");
        assert_eq!(result.loops.total(), 0);
        let complexity = result.complexity.unwrap();
        assert_eq!(complexity.level, 0);
        assert_eq!(complexity.label, "O(1)");
    }

    #[test]
    fn test_commented_out_loops_are_ignored() {
        let src = "int x = 0; // for (;;) {}\n/* while (1) { x++; } */\nx++;";
        let result = report(src);
        assert_eq!(result.loops.total(), 0);
        assert!(!result.infinite_loop_detected);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let src = "int g(int n) {\n  while (n > 0) {\n    n--;\n  }\n  return g(0);\n}";
        assert_eq!(analyze(src), analyze(src));
    }

    #[test]
    fn test_empty_state_serializes_with_tag() {
        let json = serde_json::to_string(&Analysis::Empty).unwrap();
        assert_eq!(json, r#"{"state":"empty"}"#);
    }

    #[test]
    fn test_report_serializes_without_complexity_when_infinite() {
        let json = serde_json::to_value(analyze("for(;;){}")).unwrap();
        assert_eq!(json["state"], "report");
        assert_eq!(json["infinite_loop_detected"], true);
        assert_eq!(json["infinite_loop"], "empty_for");
        assert!(json.get("complexity").is_none());
    }
}
