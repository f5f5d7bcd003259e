use crate::config::SummarizeConfig;
use crate::{dkms, extract, patches, reader, rules};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const NO_MAKE_LOG_NOTE: &str = "No DKMS make.log found.";

/// Everything learned about one install log. Field order is the JSON order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub timestamp: String,
    pub logfile: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub notes: Vec<String>,
    pub suggested_fixes: Vec<String>,
    pub dkms_make_log_tail: String,
    pub applied_patches: Vec<String>,
}

impl SummaryRecord {
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Summarize lines already in memory. The log path is only echoed.
pub fn summarize_lines<S: AsRef<str>>(logfile: &str, lines: &[S], cfg: &SummarizeConfig) -> SummaryRecord {
    let mut out = SummaryRecord {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        logfile: logfile.to_string(),
        ..Default::default()
    };

    out.errors = extract::extract_matches(lines, &rules::ERROR_PATTERNS);
    out.warnings = extract::extract_matches(lines, &rules::WARN_PATTERNS);
    out.suggested_fixes = extract::suggest_fixes(lines, &rules::SUGGESTION_RULES);
    tracing::info!(
        errors = out.errors.len(),
        warnings = out.warnings.len(),
        suggestions = out.suggested_fixes.len(),
        "scanned log"
    );

    let make_log = dkms::find_make_log(&cfg.dkms_base);
    attach_make_log(&mut out, make_log.as_deref(), cfg.tail_lines);

    out.applied_patches = patches::load_applied_patches(&cfg.target_dir);
    out
}

/// Fill `dkms_make_log_tail` from a located build log, or note why it stays empty.
pub fn attach_make_log(out: &mut SummaryRecord, make_log: Option<&Path>, tail_lines: usize) {
    match make_log {
        Some(path) => match reader::read_tail(path, tail_lines) {
            Ok(tail) => out.dkms_make_log_tail = tail,
            Err(e) => {
                tracing::warn!(error = %e, "dkms make.log unreadable");
                out.notes.push(format!("Could not read DKMS make.log: {e}"));
            }
        },
        None => out.notes.push(NO_MAKE_LOG_NOTE.to_string()),
    }
}

/// Read `logfile` and summarize it. Never fails: an unreadable log becomes a
/// note and an empty scan.
pub fn summarize_log(logfile: &str, cfg: &SummarizeConfig) -> SummaryRecord {
    let (lines, read_note) = match reader::read_lines_lossy(Path::new(logfile)) {
        Ok(lines) => (lines, None),
        Err(e) => {
            tracing::warn!(error = %e, "log file unreadable");
            (Vec::new(), Some(format!("Could not read logfile: {e}")))
        }
    };
    tracing::debug!(path = logfile, lines = lines.len(), "read log file");

    let mut out = summarize_lines(logfile, &lines, cfg);
    if let Some(note) = read_note {
        out.notes.insert(0, note);
    }
    out
}
