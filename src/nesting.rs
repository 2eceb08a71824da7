// Nesting estimator - line-oriented brace-balance walk
use crate::patterns::{is_loop_header, mask_literals};

/// Estimate the maximum simultaneous loop/brace nesting.
///
/// A loop header on a line without any `{` counts as one level on its own,
/// since its body opens on a following line. On loop-header lines braces are
/// applied in the order they appear, so `for(...){ for(...){ } }` on a single
/// line still reaches depth 2. Every other line only contributes its
/// end-of-line depth. The running depth never drops below zero.
pub fn estimate_nest_depth(cleaned: &str) -> usize {
    let text = mask_literals(cleaned);
    let mut depth = 0usize;
    let mut max_depth = 0usize;

    for line in text.split('\n') {
        if is_loop_header(line) {
            if line.contains('{') {
                max_depth = max_depth.max(inline_peak(depth, line));
            } else {
                depth += 1;
                max_depth = max_depth.max(depth);
            }
        }

        let opens = line.matches('{').count();
        let closes = line.matches('}').count();
        depth = (depth + opens).saturating_sub(closes);
        max_depth = max_depth.max(depth);
    }

    max_depth
}

/// Deepest level reached while walking the braces of one line in order
fn inline_peak(start: usize, line: &str) -> usize {
    let mut running = start;
    let mut peak = start;
    for ch in line.chars() {
        match ch {
            '{' => {
                running += 1;
                peak = peak.max(running);
            }
            '}' => running = running.saturating_sub(1),
            _ => {}
        }
    }
    peak
}
