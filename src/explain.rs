// Explanation synthesizer - renders analysis results as prose, badges and a
// proportional complexity indicator
use crate::analysis::{Analysis, AnalysisResult};
use crate::complexity::{ComplexityEstimate, MAX_LEVEL};
use crate::loops::LoopCounts;
use crate::recursion::RecursionInfo;
use serde::{Deserialize, Serialize};

const PLACEHOLDER: &str = "–";
const EMPTY_DETAILS: &str = "Run analysis to view how loops and recursion influence the runtime.";
const EMPTY_PROSE: &str = "Paste some code and run the analyzer to see a natural language explanation of the detected patterns and approximate time complexity.";
const NO_FUNCTIONS_HINT: &str =
    "Paste a full function definition to inspect recursion (e.g., int f(int n) { ... }).";
const INFINITE_HEADLINE: &str = "Non-terminating (infinite loop)";
const INFINITE_DETAILS: &str = "An always-true loop condition (e.g., while(1), for(;;), or do-while(1)) was detected. The program does not terminate, so time complexity is unbounded rather than O(n), O(n²), etc.";

/// Visual weight of a headline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Main,
    Neutral,
    Good,
    Warn,
    Bad,
}

impl Badge {
    pub fn for_level(level: u8) -> Self {
        match level {
            0 => Badge::Main,
            1 => Badge::Good,
            2 => Badge::Warn,
            _ => Badge::Bad,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub text: String,
    pub badge: Badge,
}

impl Headline {
    fn new(text: impl Into<String>, badge: Badge) -> Self {
        Self {
            text: text.into(),
            badge,
        }
    }
}

/// Everything the presentation layer shows for one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub detected_language: String,
    /// (C score, Java score); absent in the empty state
    pub language_scores: Option<(u32, u32)>,
    pub loops: LoopCounts,
    pub nest_depth: usize,
    pub functions: Vec<String>,
    pub complexity: Headline,
    pub complexity_level: Option<u8>,
    pub complexity_details: String,
    pub recursion: Headline,
    pub recursion_details: String,
    pub prose: String,
    /// Width of the complexity gauge, 0..=100
    pub indicator_percent: u32,
}

impl Explanation {
    /// Initial display state, also used to reset after blank input
    pub fn empty() -> Self {
        Self {
            detected_language: PLACEHOLDER.to_string(),
            language_scores: None,
            loops: LoopCounts::default(),
            nest_depth: 0,
            functions: Vec::new(),
            complexity: Headline::new(PLACEHOLDER, Badge::Main),
            complexity_level: None,
            complexity_details: EMPTY_DETAILS.to_string(),
            recursion: Headline::new("Not analyzed yet", Badge::Neutral),
            recursion_details: String::new(),
            prose: EMPTY_PROSE.to_string(),
            indicator_percent: 0,
        }
    }

    /// Text handed to the clipboard
    pub fn copy_text(&self) -> &str {
        self.prose.trim()
    }

    /// Plain-text rendering carrying every count, score and name list
    pub fn render_text(&self) -> String {
        let mut lines = Vec::new();

        match self.language_scores {
            Some((score_c, score_java)) => lines.push(format!(
                "Detected language: {} (C score: {}, Java score: {})",
                self.detected_language, score_c, score_java
            )),
            None => lines.push(format!("Detected language: {}", self.detected_language)),
        }

        lines.push(format!(
            "Loops: for {}, while {}, do-while {} (total {})",
            self.loops.for_count,
            self.loops.while_count,
            self.loops.do_while_count,
            self.loops.total()
        ));
        lines.push(format!("Nesting depth: {}", self.nest_depth));

        match self.complexity_level {
            Some(level) => lines.push(format!(
                "Complexity: {} [level {}]",
                self.complexity.text, level
            )),
            None => lines.push(format!("Complexity: {}", self.complexity.text)),
        }
        lines.push(self.complexity_details.clone());

        lines.push(format!("Recursion: {}", self.recursion.text));
        if !self.recursion_details.is_empty() {
            lines.push(self.recursion_details.clone());
        }

        lines.push(String::new());
        lines.push(self.prose.clone());

        lines.join("\n")
    }
}

/// Build the explanation for any pipeline outcome
pub fn explain(analysis: &Analysis) -> Explanation {
    match analysis {
        Analysis::Empty => Explanation::empty(),
        Analysis::Report(result) => explain_report(result),
    }
}

fn explain_report(result: &AnalysisResult) -> Explanation {
    let (recursion, recursion_details) = recursion_summary(&result.recursion);

    let (complexity, complexity_level, complexity_details, prose, indicator_percent) =
        match &result.complexity {
            Some(estimate) if !result.infinite_loop_detected => (
                Headline::new(estimate.label.clone(), Badge::for_level(estimate.level)),
                Some(estimate.level),
                estimate.message.clone(),
                bounded_prose(estimate, result),
                indicator_percent(estimate.level),
            ),
            _ => (
                Headline::new(INFINITE_HEADLINE, Badge::Bad),
                None,
                INFINITE_DETAILS.to_string(),
                infinite_prose(result),
                100,
            ),
        };

    Explanation {
        detected_language: result.language.label.to_string(),
        language_scores: Some((result.language.score_c, result.language.score_java)),
        loops: result.loops,
        nest_depth: result.nest_depth,
        functions: result.recursion.functions.clone(),
        complexity,
        complexity_level,
        complexity_details,
        recursion,
        recursion_details,
        prose,
        indicator_percent,
    }
}

/// Gauge width for a complexity level: 25, 50, 75 or 100
pub fn indicator_percent(level: u8) -> u32 {
    let clamped = u32::from(level.min(MAX_LEVEL));
    (clamped + 1) * 100 / (u32::from(MAX_LEVEL) + 1)
}

fn recursion_summary(recursion: &RecursionInfo) -> (Headline, String) {
    if recursion.functions.is_empty() {
        return (
            Headline::new("No functions detected", Badge::Neutral),
            NO_FUNCTIONS_HINT.to_string(),
        );
    }

    let detected = format!("Functions detected: {}", recursion.functions.join(", "));
    if recursion.has_recursion {
        (
            Headline::new("Recursion detected", Badge::Bad),
            format!(
                "Recursive functions: {}. {}",
                recursion.recursive_fns.join(", "),
                detected
            ),
        )
    } else {
        (Headline::new("No recursion found", Badge::Good), detected)
    }
}

fn loop_breakdown(loops: &LoopCounts) -> String {
    format!(
        "for: {}, while: {}, do-while: {}",
        loops.for_count, loops.while_count, loops.do_while_count
    )
}

fn bounded_prose(estimate: &ComplexityEstimate, result: &AnalysisResult) -> String {
    let recursion = &result.recursion;
    if estimate.total_loops == 0 && !recursion.has_recursion {
        return "No loops or recursion were detected, so the runtime appears constant with respect to input size. Any extra cost is from simple statements only.".to_string();
    }

    let mut parts = vec![format!(
        "The analyzer found {} loop(s) ({}).",
        estimate.total_loops,
        loop_breakdown(&result.loops)
    )];

    if result.nest_depth > 1 {
        parts.push(format!(
            "A nesting depth of about {} suggests that some loops run inside others, which increases how fast runtime grows with input size.",
            result.nest_depth
        ));
    } else if result.nest_depth == 1 {
        parts.push(
            "The loops appear mostly single-layer, which usually yields linear growth with input size."
                .to_string(),
        );
    }

    if recursion.has_recursion {
        parts.push(format!(
            "Recursion was detected in: {}. The exact complexity depends on how many recursive calls are made and how the arguments shrink at each step.",
            recursion.recursive_fns.join(", ")
        ));
    }

    parts.join(" ")
}

fn infinite_prose(result: &AnalysisResult) -> String {
    let shape = result
        .infinite_loop
        .map(|kind| format!(" ({})", kind.describe()))
        .unwrap_or_default();
    let mut parts = vec![format!("The analyzer found an infinite loop pattern{}.", shape)];

    if result.loops.total() > 0 {
        parts.push(format!(
            "Loop count summary: {}.",
            loop_breakdown(&result.loops)
        ));
    }

    if result.recursion.has_recursion {
        parts.push(format!(
            "Recursion is also present in function(s): {}.",
            result.recursion.recursive_fns.join(", ")
        ));
    }

    parts.push(
        "Since the loop condition never becomes false, the code keeps running indefinitely."
            .to_string(),
    );

    parts.join(" ")
}
