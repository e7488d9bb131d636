//! Non-fatal extraction warnings.

use serde::{Deserialize, Serialize};

/// How serious a recoverable problem was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A recoverable problem encountered during extraction.
///
/// Warnings accumulate across the whole run and are surfaced to the caller;
/// they are never thrown from the extraction entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionWarning {
    pub file: String,
    pub message: String,
    pub severity: Severity,
}

impl ExtractionWarning {
    pub fn warn(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn error(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

impl std::fmt::Display for ExtractionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.file, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_severity() {
        let w = ExtractionWarning::warn("a.tsx", "unparsable member");
        assert_eq!(w.severity, Severity::Warning);

        let e = ExtractionWarning::error("b.tsx", "unreadable file");
        assert_eq!(e.severity, Severity::Error);
    }

    #[test]
    fn displays_file_and_message() {
        let w = ExtractionWarning::warn("src/components/button.tsx", "no props type");
        assert_eq!(
            w.to_string(),
            "src/components/button.tsx: no props type"
        );
    }
}
