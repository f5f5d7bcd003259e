use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// A symptom pattern paired with the advice shown when it is seen.
#[derive(Debug, Clone)]
pub struct SuggestionRule {
    pub pattern: Regex,
    pub suggestion: &'static str,
}

fn ci(pattern: &str) -> Regex {
    // Table entries are literals; a bad one is a build-time mistake.
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

pub const ERROR_PATTERN_SOURCES: &[&str] = &[
    r"error:",
    r"failed",
    r"No rule to make target",
    r"Module\.symvers",
    r"modpost:.*Undefined",
    r"KERNEL_SOURCE_DIR",
    r"PWD: not found",
];

pub const WARN_PATTERN_SOURCES: &[&str] = &[
    r"warn(ing)?:",
    r"deprecated",
    r"will be ignored",
];

pub const SUGGESTION_SOURCES: &[(&str, &str)] = &[
    (
        r"Module\.symvers",
        "Copy Module.symvers from kernel source or run: make modules_prepare in kernel tree.",
    ),
    (
        r"modpost.*Undefined",
        "Re-run kernel prepare and ensure correct KERNEL_SRC. Try: make modules_prepare; then DKMS build again.",
    ),
    (
        r"KERNEL_SOURCE_DIR|PWD",
        "Rewrite dkms.conf to avoid add-time variable expansion issues.",
    ),
    (
        r"No rule to make target",
        "Ensure kernel headers/source present. Set KERNEL_SRC properly and run modules_prepare.",
    ),
];

pub static ERROR_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| ERROR_PATTERN_SOURCES.iter().map(|p| ci(p)).collect());

pub static WARN_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| WARN_PATTERN_SOURCES.iter().map(|p| ci(p)).collect());

pub static SUGGESTION_RULES: Lazy<Vec<SuggestionRule>> = Lazy::new(|| {
    SUGGESTION_SOURCES
        .iter()
        .map(|&(pattern, suggestion)| SuggestionRule { pattern: ci(pattern), suggestion })
        .collect()
});
