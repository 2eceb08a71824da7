// Complexity estimator - maps loop counts, nesting and recursion to a Big-O class
use crate::loops::LoopCounts;
use crate::recursion::RecursionInfo;
use serde::{Deserialize, Serialize};

/// Highest complexity level
pub const MAX_LEVEL: u8 = 3;

const CONSTANT_MESSAGE: &str =
    "No loops detected. Runtime does not grow significantly with input size (constant time).";
const LINEAR_MESSAGE: &str =
    "Single-layer loops detected. Runtime typically grows roughly linearly with input size.";
const QUADRATIC_MESSAGE: &str =
    "Nested loops detected. Runtime likely grows quadratically with input size.";
const CUBIC_MESSAGE: &str = "Deep nesting of loops suggests cubic or higher time complexity.";
const RECURSION_CAVEAT: &str = " Recursion is present. Exact complexity depends on the recurrence relation (e.g., T(n)=T(n-1)+O(1) → O(n), T(n)=2T(n-1)+O(1) → O(2ⁿ)).";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityEstimate {
    /// "O(1)" through "O(n³) or higher", optionally with " (with recursion)"
    pub label: String,
    pub message: String,
    pub total_loops: usize,
    /// 0..=3
    pub level: u8,
}

/// Rules apply in order; each later match overrides the earlier one.
pub fn estimate(loops: &LoopCounts, recursion: &RecursionInfo, nest_depth: usize) -> ComplexityEstimate {
    let total_loops = loops.total();

    let mut level = 0;
    let mut label = String::from("O(1)");
    let mut message = String::from(CONSTANT_MESSAGE);

    if total_loops > 0 && nest_depth <= 1 {
        level = 1;
        label = String::from("O(n)");
        message = String::from(LINEAR_MESSAGE);
    }

    if nest_depth >= 2 {
        level = 2;
        label = String::from("O(n²)");
        message = String::from(QUADRATIC_MESSAGE);
    }

    if nest_depth >= 3 {
        level = MAX_LEVEL;
        label = String::from("O(n³) or higher");
        message = String::from(CUBIC_MESSAGE);
    }

    if recursion.has_recursion {
        label.push_str(" (with recursion)");
        message.push_str(RECURSION_CAVEAT);
    }

    ComplexityEstimate {
        label,
        message,
        total_loops,
        level,
    }
}
