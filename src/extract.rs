use crate::rules::SuggestionRule;
use regex::Regex;
use std::collections::HashSet;

/// Drop repeated entries, keeping the first occurrence of each.
pub fn dedupe_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}

/// Trimmed lines that match any of `patterns`, once each, in input order.
///
/// Patterns are tried in order and the first hit decides; a line matching
/// several patterns is still reported once.
pub fn extract_matches<S: AsRef<str>>(lines: &[S], patterns: &[Regex]) -> Vec<String> {
    let hits = lines.iter().filter_map(|ln| {
        let l = ln.as_ref().trim();
        patterns.iter().find(|re| re.is_match(l)).map(|_| l.to_string())
    });
    dedupe_preserving_order(hits)
}

/// Advice for every rule any line matches, once each, in first-seen order.
///
/// Unlike [`extract_matches`], a single line may trigger several rules.
pub fn suggest_fixes<S: AsRef<str>>(lines: &[S], rules: &[SuggestionRule]) -> Vec<String> {
    let mut sugg = Vec::new();
    for ln in lines {
        for rule in rules {
            if rule.pattern.is_match(ln.as_ref()) {
                sugg.push(rule.suggestion.to_string());
            }
        }
    }
    dedupe_preserving_order(sugg)
}
