//! Keyword extraction from `resolv.conf`-style text.
//!
//! The format is line oriented: `<keyword><space|tab><value> <value> ...`.
//! Lines end at `\n`, `\r` or `\r\n`. Lines starting with `#` or `;` are
//! comments, and a value starting with either character ends the line.

/// `nameserver <addr>`
pub const NAMESERVER: &str = "nameserver";

/// `search <domain> <domain> ...`
pub const SEARCH: &str = "search";

/// `domain <domain>`
pub const DOMAIN: &str = "domain";

/// `options <opt> <opt> ...`
pub const OPTIONS: &str = "options";

/// Per-keyword bounds applied by [`resolvconf`].
///
/// A bound of `0` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Values taken from a single matching line.
    pub per_line: usize,
    /// Matching lines processed before the scan stops.
    pub lines: usize,
}

impl Limits {
    /// Creates a new bound pair.
    #[must_use]
    pub const fn new(per_line: usize, lines: usize) -> Self {
        Self { per_line, lines }
    }

    /// No bound on either axis.
    pub const UNBOUNDED: Self = Self::new(0, 0);

    /// One address per line, at most five `nameserver` lines.
    pub const NAMESERVER: Self = Self::new(1, 5);

    /// Up to six domains from the first `search` line.
    pub const SEARCH: Self = Self::new(6, 1);

    /// A single domain from the first `domain` line.
    pub const DOMAIN: Self = Self::new(1, 1);
}

/// Collects the values following `keyword` in `content`, in file order.
///
/// See [`resolvconf_with`] for the matching rules.
///
/// ```
/// use resolvconf_cache::parser::{resolvconf, NAMESERVER};
///
/// let conf = "nameserver 10.0.0.1\nnameserver 2001:db8::1\n";
/// assert_eq!(resolvconf(conf, NAMESERVER, 1, 5), ["10.0.0.1", "[2001:db8::1]"]);
/// ```
#[must_use]
pub fn resolvconf(
    content: &str,
    keyword: &str,
    max_per_keyword: usize,
    max_keywords: usize,
) -> Vec<String> {
    resolvconf_with(content, keyword, Limits::new(max_per_keyword, max_keywords))
}

/// Collects the values following `keyword` in `content`, bounded by `limits`.
///
/// - A line matches only when `keyword` is followed by a space or tab, so
///   `searches` never matches `search`.
/// - A matching line counts against `limits.lines` even when it yields no
///   values (e.g. `search # nothing`).
/// - Bare IPv6 literals under `nameserver` are bracketed.
#[must_use]
pub fn resolvconf_with(content: &str, keyword: &str, limits: Limits) -> Vec<String> {
    let mut values = Vec::new();
    let mut lines_left = limits.lines;

    for line in content.split(['\n', '\r']) {
        let Some(rest) = keyword_rest(line, keyword) else {
            continue;
        };

        let mut values_left = limits.per_line;
        for token in rest.split([' ', '\t']).filter(|t| !t.is_empty()) {
            if is_comment(token) {
                break;
            }
            if keyword == NAMESERVER && is_bare_ipv6(token) {
                values.push(format!("[{token}]"));
            } else {
                values.push(token.to_string());
            }
            if countdown(&mut values_left) {
                break;
            }
        }

        if countdown(&mut lines_left) {
            break;
        }
    }

    values
}

/// Returns the text after `keyword` if `line` is a `keyword` line.
fn keyword_rest<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    if line.is_empty() || is_comment(line) {
        return None;
    }
    let rest = line.strip_prefix(keyword)?;
    rest.starts_with([' ', '\t']).then_some(rest)
}

fn is_comment(s: &str) -> bool {
    s.starts_with(['#', ';'])
}

/// `2001:db8::1` but not `[2001:db8::1]`, `::ffff:1.2.3.4` or `10.0.0.1`.
fn is_bare_ipv6(token: &str) -> bool {
    token.contains(':') && !token.contains(['.', '[', ']'])
}

/// Decrements a bound, returning `true` once it is exhausted. Zero never runs out.
fn countdown(left: &mut usize) -> bool {
    match *left {
        0 => false,
        1 => true,
        _ => {
            *left -= 1;
            false
        }
    }
}
