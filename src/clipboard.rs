// Best-effort clipboard access for copying explanations
//
// Never fails: an unavailable clipboard (SSH, headless) is reported back as
// a notice for the user.
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Nothing to copy
    Skipped,
    Failed(String),
}

impl CopyOutcome {
    pub fn notice(&self) -> String {
        match self {
            CopyOutcome::Copied => "Copied explanation to clipboard".to_string(),
            CopyOutcome::Skipped => "Nothing to copy".to_string(),
            CopyOutcome::Failed(reason) => {
                format!("Copy failed ({}). You can copy manually.", reason)
            }
        }
    }
}

pub fn copy_to_clipboard(text: &str) -> CopyOutcome {
    use arboard::Clipboard;

    if text.trim().is_empty() {
        return CopyOutcome::Skipped;
    }

    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => CopyOutcome::Copied,
            Err(e) => {
                debug!("Clipboard write failed: {}", e);
                CopyOutcome::Failed(e.to_string())
            }
        },
        Err(e) => {
            debug!("Clipboard unavailable: {}", e);
            CopyOutcome::Failed(format!("clipboard not available: {}", e))
        }
    }
}
