// Presentation state - dialect selection and the last rendered explanation
use crate::analysis::{analyze, Analysis};
use crate::clipboard::{copy_to_clipboard, CopyOutcome};
use crate::explain::{explain, Explanation};
use crate::language::Dialect;
use crate::samples;
use tracing::{debug, info};

/// Result of one run through the session
#[derive(Debug, Clone)]
pub struct Outcome {
    pub analysis: Analysis,
    pub explanation: Explanation,
}

pub struct Session {
    dialect: Dialect,
    last: Explanation,
}

impl Session {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            last: Explanation::empty(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn last_explanation(&self) -> &Explanation {
        &self.last
    }

    /// Analyze `code`, steer the dialect selector and remember the explanation.
    /// Blank input resets to the initial display state.
    pub fn run(&mut self, code: &str) -> Outcome {
        let analysis = analyze(code);

        if let Some(result) = analysis.report() {
            if let Some(dialect) = result.language.label.steered_dialect() {
                if dialect != self.dialect {
                    info!("Dialect selector switched to {}", dialect);
                }
                self.dialect = dialect;
            }
        } else {
            debug!("Empty input, display reset");
        }

        let explanation = explain(&analysis);
        self.last = explanation.clone();

        Outcome {
            analysis,
            explanation,
        }
    }

    /// Load the preset for the selected dialect and analyze it
    pub fn run_sample(&mut self) -> (&'static str, Outcome) {
        let sample = samples::preset(self.dialect);
        (sample, self.run(sample))
    }

    pub fn copy_explanation(&self) -> CopyOutcome {
        copy_to_clipboard(self.last.copy_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_label_steers_selector() {
        let mut session = Session::new(Dialect::C);
        session.run("public class A { public static void main(String[] a) { System.out.println(1); } }");
        assert_eq!(session.dialect(), Dialect::Java);
    }

    #[test]
    fn test_generic_label_steers_back_to_c() {
        let mut session = Session::new(Dialect::Java);
        session.run("int x = 1;");
        assert_eq!(session.dialect(), Dialect::C);
    }

    #[test]
    fn test_mixed_and_pseudo_leave_selector() {
        let mut session = Session::new(Dialect::Java);
        session.run("#include <stdio.h>\npublic class A {}");
        assert_eq!(session.dialect(), Dialect::Java);
        session.run("repeat forever");
        assert_eq!(session.dialect(), Dialect::Java);
    }

    #[test]
    fn test_blank_input_resets_display() {
        let mut session = Session::new(Dialect::C);
        session.run("for(int i=0;i<n;i++){ total+=i; }");
        assert_eq!(session.last_explanation().loops.for_count, 1);

        let outcome = session.run("   ");
        assert!(outcome.analysis.is_empty());
        assert_eq!(session.last_explanation(), &Explanation::empty());
        assert_eq!(session.dialect(), Dialect::C);
    }

    #[test]
    fn test_sample_follows_selected_dialect() {
        let mut session = Session::new(Dialect::Java);
        let (sample, outcome) = session.run_sample();
        assert!(sample.contains("sumPairs"));
        assert!(outcome.explanation.recursion_details.contains("sumPairs"));
    }
}
