// Mode-aware report output: human (colour), plain, or JSON
use crate::config::OutputFormat;
use crate::explain::{Badge, Explanation, Headline};
use crate::session::Outcome;
use colored::{ColoredString, Colorize};
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::Table;
use serde::Serialize;
use std::io::{self, IsTerminal};

impl OutputFormat {
    /// Detect from the environment when no format was configured
    pub fn auto() -> Self {
        if std::env::var("LOOPSIGHT_JSON").is_ok() {
            Self::Json
        } else if !io::stdout().is_terminal() {
            Self::Plain
        } else {
            Self::Human
        }
    }
}

/// JSON document for one run
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    analysis: &'a crate::analysis::Analysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<&'a Explanation>,
    dialect: String,
}

pub struct OutputWriter {
    format: OutputFormat,
    indicator_width: usize,
}

impl OutputWriter {
    pub fn new(format: OutputFormat, indicator_width: usize) -> Self {
        Self {
            format,
            indicator_width,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_human(&self) -> bool {
        matches!(self.format, OutputFormat::Human)
    }

    /// Print a section header
    pub fn section(&self, title: &str) {
        match self.format {
            OutputFormat::Human => {
                println!();
                println!("{}", title.cyan().bold());
                println!("{}", "═".repeat(title.chars().count()).cyan());
            }
            OutputFormat::Plain => {
                println!();
                println!("{}", title);
                println!("{}", "=".repeat(title.chars().count()));
            }
            OutputFormat::Json => {}
        }
    }

    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("  {} {}", "✓".green(), message),
            OutputFormat::Plain => println!("  [OK] {}", message),
            OutputFormat::Json => {}
        }
    }

    /// Non-fatal notice; goes to stderr so JSON stays clean
    pub fn warning(&self, message: &str) {
        match self.format {
            OutputFormat::Human => eprintln!("  {} {}", "⚠".yellow(), message),
            _ => eprintln!("  [WARN] {}", message),
        }
    }

    pub fn info(&self, message: &str) {
        if !matches!(self.format, OutputFormat::Json) {
            println!("  {}", message);
        }
    }

    /// Print a key-value table
    pub fn table(&self, rows: &[(&str, String)]) {
        let max_key_len = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        match self.format {
            OutputFormat::Human => {
                for (key, value) in rows {
                    println!("  {:width$} │ {}", key.yellow(), value, width = max_key_len);
                }
            }
            OutputFormat::Plain => {
                for (key, value) in rows {
                    println!("  {:width$} : {}", key, value, width = max_key_len);
                }
            }
            OutputFormat::Json => {}
        }
    }

    /// Print the source listing of a preset
    pub fn source(&self, code: &str) {
        if matches!(self.format, OutputFormat::Json) {
            return;
        }
        self.section("Sample");
        for line in code.lines() {
            match self.format {
                OutputFormat::Human => println!("  {}", line.dimmed()),
                _ => println!("  {}", line),
            }
        }
    }

    /// Print a full report for one session run
    pub fn report(&self, outcome: &Outcome, dialect: &str) -> serde_json::Result<()> {
        if matches!(self.format, OutputFormat::Json) {
            let doc = JsonReport {
                analysis: &outcome.analysis,
                explanation: outcome
                    .analysis
                    .report()
                    .map(|_| &outcome.explanation),
                dialect: dialect.to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&doc)?);
            return Ok(());
        }

        let expl = &outcome.explanation;

        if outcome.analysis.is_empty() {
            self.section("Nothing to analyze");
            self.info(&expl.prose);
            return Ok(());
        }

        self.section("Language");
        let scores = expl
            .language_scores
            .map(|(c, java)| format!("C {} / Java {}", c, java))
            .unwrap_or_default();
        self.table(&[
            ("Detected", expl.detected_language.clone()),
            ("Scores", scores),
            ("Dialect", dialect.to_string()),
        ]);

        self.section("Loops");
        println!("{}", self.loop_table(expl));

        self.section("Recursion");
        println!("  {}", self.badge(&expl.recursion));
        if !expl.recursion_details.is_empty() {
            self.info(&expl.recursion_details);
        }

        self.section("Time Complexity");
        println!("  {}", self.badge(&expl.complexity));
        self.info(&expl.complexity_details);
        println!("  {}", self.gauge(expl.indicator_percent));

        self.section("Explanation");
        self.info(&expl.prose);

        Ok(())
    }

    fn loop_table(&self, expl: &Explanation) -> Table {
        let mut table = Table::new();
        let preset = if self.is_human() { UTF8_FULL } else { ASCII_FULL };
        table
            .load_preset(preset)
            .set_header(vec!["for", "while", "do-while", "total", "nest depth"]);
        table.add_row(vec![
            expl.loops.for_count.to_string(),
            expl.loops.while_count.to_string(),
            expl.loops.do_while_count.to_string(),
            expl.loops.total().to_string(),
            expl.nest_depth.to_string(),
        ]);
        table
    }

    fn badge(&self, headline: &Headline) -> ColoredString {
        let text = format!("[{}]", headline.text);
        if !self.is_human() {
            return text.normal();
        }
        match headline.badge {
            Badge::Main => text.cyan().bold(),
            Badge::Neutral => text.dimmed(),
            Badge::Good => text.green(),
            Badge::Warn => text.yellow(),
            Badge::Bad => text.red().bold(),
        }
    }

    /// Horizontal gauge filled to `percent` of the configured width
    pub fn gauge(&self, percent: u32) -> String {
        let width = self.indicator_width;
        let filled = (percent.min(100) as usize * width) / 100;
        let bar = if self.is_human() {
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
            match percent {
                0..=25 => bar.cyan().to_string(),
                26..=50 => bar.green().to_string(),
                51..=75 => bar.yellow().to_string(),
                _ => bar.red().to_string(),
            }
        } else {
            format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
        };
        format!("│{}│ {}%", bar, percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_gauge_is_proportional() {
        let writer = OutputWriter::new(OutputFormat::Plain, 20);
        assert_eq!(writer.gauge(0), format!("│{}│ 0%", "-".repeat(20)));
        assert_eq!(
            writer.gauge(50),
            format!("│{}{}│ 50%", "#".repeat(10), "-".repeat(10))
        );
        assert_eq!(writer.gauge(100), format!("│{}│ 100%", "#".repeat(20)));
    }

    #[test]
    fn test_gauge_clamps_over_full() {
        let writer = OutputWriter::new(OutputFormat::Plain, 8);
        assert_eq!(writer.gauge(250), format!("│{}│ 250%", "#".repeat(8)));
    }

    #[test]
    fn test_loop_table_lists_counts() {
        let writer = OutputWriter::new(OutputFormat::Plain, 10);
        let mut session = crate::session::Session::new(crate::language::Dialect::C);
        let outcome = session.run("for (;;) {}\nwhile (x) {}\ndo { } while (y);");
        let rendered = writer.loop_table(&outcome.explanation).to_string();
        assert!(rendered.contains("do-while"));
        assert!(rendered.contains("nest depth"));
        assert!(rendered.contains('3'));
    }

    #[test]
    fn test_json_report_flattens_analysis() {
        let mut session = crate::session::Session::new(crate::language::Dialect::C);
        let outcome = session.run("for(int i=0;i<n;i++){ total+=i; }");
        let doc = JsonReport {
            analysis: &outcome.analysis,
            explanation: Some(&outcome.explanation),
            dialect: "c".to_string(),
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["state"], "report");
        assert_eq!(value["loops"]["for_count"], 1);
        assert_eq!(value["complexity"]["label"], "O(n)");
        assert_eq!(value["explanation"]["indicator_percent"], 50);
    }

    #[test]
    fn test_json_report_for_empty_state() {
        let mut session = crate::session::Session::new(crate::language::Dialect::C);
        let outcome = session.run("");
        let doc = JsonReport {
            analysis: &outcome.analysis,
            explanation: None,
            dialect: "c".to_string(),
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["state"], "empty");
        assert!(value.get("explanation").is_none());
    }
}
