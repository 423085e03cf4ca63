//! Effective DNS search list.

use crate::fallback::FallbackDomainProvider;
use crate::parser::{self, Limits};

/// Derives the search list from `content`, first match wins:
///
/// 1. the first `search` line (up to six domains),
/// 2. the first `domain` line,
/// 3. the platform fallback domain,
/// 4. nothing.
#[must_use]
pub fn search_list(content: &str, fallback: &dyn FallbackDomainProvider) -> Vec<String> {
    let search = parser::resolvconf_with(content, parser::SEARCH, Limits::SEARCH);
    if !search.is_empty() {
        return search;
    }

    let domain = parser::resolvconf_with(content, parser::DOMAIN, Limits::DOMAIN);
    if !domain.is_empty() {
        return domain;
    }

    match fallback.fallback_domain() {
        Some(domain) if !domain.is_empty() => vec![domain],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::{NoFallback, StaticDomain};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn search_wins_over_domain() {
        let conf = "domain c.com\nsearch a.com b.com\n";
        assert_eq!(
            search_list(conf, &StaticDomain::new("corp.example")),
            ["a.com", "b.com"]
        );
    }

    #[test]
    fn domain_when_no_search() {
        assert_eq!(search_list("domain c.com d.com\n", &NoFallback), ["c.com"]);
    }

    #[test]
    fn fallback_when_silent() {
        assert_eq!(
            search_list("nameserver 192.0.2.1\n", &StaticDomain::new("corp.example")),
            ["corp.example"]
        );
        assert_eq!(search_list("", &StaticDomain::new("corp.example")), ["corp.example"]);
    }

    #[test]
    fn empty_fallback_is_ignored() {
        assert!(search_list("", &StaticDomain::new("")).is_empty());
        assert!(search_list("", &NoFallback).is_empty());
    }

    #[test]
    fn empty_search_line_falls_through_to_domain() {
        assert_eq!(search_list("search # none\ndomain c.com\n", &NoFallback), ["c.com"]);
    }

    #[test]
    fn fallback_not_consulted_when_configured() {
        let calls = AtomicUsize::new(0);
        let counting = || {
            calls.fetch_add(1, Ordering::SeqCst);
            Some("corp.example".to_string())
        };
        assert_eq!(search_list("domain c.com\n", &counting), ["c.com"]);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
