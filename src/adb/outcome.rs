// Explicit response-pattern tables for adb's human-readable output.
//
// adb's exit code alone is not trustworthy (`adb connect` exits zero on many
// failures), so success is decided from an allow-list of known phrases and
// anything unrecognized is Unknown, which callers treat as failure.
use super::exec::ToolOutput;

/// What a tool's output tells us about the operation it ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
    /// Output matched no known phrase. Treated as failure everywhere.
    Unknown,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

// First match wins; failure phrases come first so that e.g. a line quoting a
// previously-connected address can't be misread as success.
const CONNECT_PATTERNS: &[(&str, Outcome)] = &[
    ("failed to connect", Outcome::Failure),
    ("cannot connect", Outcome::Failure),
    ("connection refused", Outcome::Failure),
    ("unable to connect", Outcome::Failure),
    ("failed to authenticate", Outcome::Failure),
    ("already connected to", Outcome::Success),
    ("connected to", Outcome::Success),
];

const PAIR_PATTERNS: &[(&str, Outcome)] = &[
    ("wrong password", Outcome::Failure),
    ("protocol fault", Outcome::Failure),
    ("failed", Outcome::Failure),
    ("unable", Outcome::Failure),
    ("successfully paired", Outcome::Success),
];

fn classify(patterns: &[(&str, Outcome)], text: &str) -> Outcome {
    for (pattern, outcome) in patterns {
        if text.contains(pattern) {
            return *outcome;
        }
    }
    Outcome::Unknown
}

/// Classifies `adb connect` output. A non-zero exit forces failure no matter
/// what the text says.
pub fn classify_connect(out: &ToolOutput) -> Outcome {
    if !out.success {
        return Outcome::Failure;
    }
    classify(CONNECT_PATTERNS, &out.combined_lower())
}

/// Classifies `adb pair` output, same exit-code rule as connect.
pub fn classify_pair(out: &ToolOutput) -> Outcome {
    if !out.success {
        return Outcome::Failure;
    }
    classify(PAIR_PATTERNS, &out.combined_lower())
}
