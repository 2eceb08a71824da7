// Loop detector - counts for / while / do-while headers outside literals
use crate::patterns::{mask_literals, DO_HEADER, FOR_HEADER, WHILE_HEADER};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoopCounts {
    pub for_count: usize,
    /// Excludes the trailing `while(` of do-while constructs
    pub while_count: usize,
    pub do_while_count: usize,
}

impl LoopCounts {
    pub fn total(&self) -> usize {
        self.for_count + self.while_count + self.do_while_count
    }
}

pub fn detect_loops(cleaned: &str) -> LoopCounts {
    let text = mask_literals(cleaned);

    let for_count = FOR_HEADER.find_iter(&text).count();
    let raw_while_count = WHILE_HEADER.find_iter(&text).count();
    let do_while_count = DO_HEADER.find_iter(&text).count();

    // Every do { ... } while (...) also matched the while pattern once.
    let while_count = if raw_while_count >= do_while_count {
        raw_while_count - do_while_count
    } else {
        raw_while_count
    };

    LoopCounts {
        for_count,
        while_count,
        do_while_count,
    }
}
