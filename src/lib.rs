//! Heuristic inspector for C-like source snippets.
//!
//! Estimates loop counts, nesting depth, recursion, always-true loops and a
//! rough Big-O class by pattern matching over comment-stripped text, then
//! renders a plain-language explanation. There is no parser: every stage is
//! a token-level scan, so the results are fast and explainable rather than
//! sound.

pub mod analysis;
pub mod cli_output;
pub mod clipboard;
pub mod comments;
pub mod complexity;
pub mod config;
pub mod error;
pub mod explain;
pub mod infinite;
pub mod language;
pub mod loops;
pub mod nesting;
pub mod patterns;
pub mod recursion;
pub mod samples;
pub mod session;

pub use analysis::{analyze, Analysis, AnalysisResult};
