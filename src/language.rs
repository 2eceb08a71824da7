// Language classifier - scores cleaned source against C-family and Java idioms
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dialect selector values offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    C,
    Java,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::C => "c",
            Dialect::Java => "java",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LanguageLabel {
    #[serde(rename = "Java")]
    Java,
    #[serde(rename = "C / C++")]
    CCpp,
    #[serde(rename = "C / Java style (generic)")]
    GenericStyle,
    #[serde(rename = "C / Java style (mixed)")]
    MixedStyle,
    #[serde(rename = "Unknown / Pseudo")]
    UnknownPseudo,
    /// Label shown before any classification has run
    #[default]
    #[serde(rename = "Unknown / Generic C-like")]
    UnknownGenericCLike,
}

impl LanguageLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageLabel::Java => "Java",
            LanguageLabel::CCpp => "C / C++",
            LanguageLabel::GenericStyle => "C / Java style (generic)",
            LanguageLabel::MixedStyle => "C / Java style (mixed)",
            LanguageLabel::UnknownPseudo => "Unknown / Pseudo",
            LanguageLabel::UnknownGenericCLike => "Unknown / Generic C-like",
        }
    }

    /// Dialect the selector should switch to, if this label implies one
    pub fn steered_dialect(&self) -> Option<Dialect> {
        match self {
            LanguageLabel::Java => Some(Dialect::Java),
            LanguageLabel::CCpp | LanguageLabel::GenericStyle => Some(Dialect::C),
            _ => None,
        }
    }
}

impl fmt::Display for LanguageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguageGuess {
    pub label: LanguageLabel,
    pub score_c: u32,
    pub score_java: u32,
}

lazy_static! {
    static ref C_SIGNALS: Vec<(Regex, u32)> = vec![
        (Regex::new(r"#include\s*<").unwrap(), 3),
        (Regex::new(r"\bscanf\s*\(").unwrap(), 2),
        (Regex::new(r"\bprintf\s*\(").unwrap(), 1),
        (Regex::new(r"\bstd::").unwrap(), 2),
        (Regex::new(r"\busing\s+namespace\s+std\b").unwrap(), 2),
    ];

    static ref JAVA_SIGNALS: Vec<(Regex, u32)> = vec![
        (Regex::new(r"\bSystem\.out\.println\s*\(").unwrap(), 3),
        (Regex::new(r"\bpublic\s+class\b").unwrap(), 3),
        (Regex::new(r"\bpublic\s+static\s+void\s+main\b").unwrap(), 3),
        (Regex::new(r"\bimport\s+java\.|\bpackage\s+[\w.]+;").unwrap(), 2),
    ];
}

/// Each signal contributes its weight once, however often it occurs
fn score(text: &str, signals: &[(Regex, u32)]) -> u32 {
    signals
        .iter()
        .filter(|(pattern, _)| pattern.is_match(text))
        .map(|(_, weight)| weight)
        .sum()
}

pub fn classify(cleaned: &str) -> LanguageGuess {
    let score_c = score(cleaned, &C_SIGNALS);
    let score_java = score(cleaned, &JAVA_SIGNALS);

    let label = if score_c == 0 && score_java == 0 {
        if cleaned.contains(';') || cleaned.contains('{') {
            LanguageLabel::GenericStyle
        } else {
            LanguageLabel::UnknownPseudo
        }
    } else if score_java > score_c {
        LanguageLabel::Java
    } else if score_c > score_java {
        LanguageLabel::CCpp
    } else {
        LanguageLabel::MixedStyle
    };

    LanguageGuess {
        label,
        score_c,
        score_java,
    }
}
