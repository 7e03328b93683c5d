//! Line transformation from v2fly data format to Clash classical rules.

use std::fmt;

/// Substring that disqualifies a line or include target (case-insensitive).
/// Matching entries are published as a separate list.
pub const EXCLUDED_KEYWORD: &str = "ehentai";

/// Clash classical rule kinds produced by the transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Exact domain match
    Domain,
    /// Domain and all of its subdomains
    DomainSuffix,
    /// Substring match anywhere in the domain
    DomainKeyword,
}

impl RuleKind {
    /// Get the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Domain => "DOMAIN",
            RuleKind::DomainSuffix => "DOMAIN-SUFFIX",
            RuleKind::DomainKeyword => "DOMAIN-KEYWORD",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transform one raw data-file line into a Clash classical rule.
///
/// Returns `None` for lines that produce no rule: blanks, comments,
/// `include:` directives (the resolver handles those), unsupported
/// `regexp:` rules, and lines containing the excluded keyword.
///
/// `full:` entries become exact `DOMAIN` rules, plain entries become
/// `DOMAIN-SUFFIX`; values without a dot become `DOMAIN-KEYWORD` in either
/// shape. Prefix keywords are matched case-sensitively, the excluded
/// keyword is not.
pub fn transform(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    if line.starts_with("include:") || line.starts_with("regexp:") {
        return None;
    }
    if line.to_lowercase().contains(EXCLUDED_KEYWORD) {
        return None;
    }

    if let Some(rest) = line.strip_prefix("full:") {
        let value = rest.trim();
        let kind = if value.contains('.') {
            RuleKind::Domain
        } else {
            RuleKind::DomainKeyword
        };
        return Some(format!("{},{}", kind, value));
    }

    let kind = if line.contains('.') {
        RuleKind::DomainSuffix
    } else {
        RuleKind::DomainKeyword
    };
    Some(format!("{},{}", kind, line))
}
