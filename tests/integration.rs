//! Integration tests for `resolvconf-cache`.
//!
//! Tests marked `#[ignore]` read the host's `/etc/resolv.conf`:
//!
//! ```bash
//! cargo test -- --ignored
//! ```

use resolvconf_cache::parser::NAMESERVER;
use resolvconf_cache::{
    FileSource, NoFallback, ResolverConfiguration, ResolverSettings, StaticDomain, resolvconf,
    source,
};
use std::path::Path;
use std::time::Duration;

fn write_conf(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("resolv.conf");
    std::fs::write(&path, content).unwrap();
    path
}

// ---------------------------------------------------------------------------
// Tempdir tests
// ---------------------------------------------------------------------------

#[test]
fn typical_resolv_conf() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_conf(
        dir.path(),
        "# Generated by NetworkManager\n\
         search a.com b.com\n\
         domain c.com\n\
         nameserver 192.0.2.1\n\
         nameserver 2001:db8::1 ; v6\n\
         nameserverX 1.2.3.4\n\
         options ndots:2 timeout:1\n",
    );

    let r = ResolverConfiguration::from_settings(&ResolverSettings::new().with_path(&path))
        .with_fallback(StaticDomain::new("corp.example"));

    assert_eq!(r.nameservers(), ["192.0.2.1", "[2001:db8::1]"]);
    assert_eq!(r.searchlist(), ["a.com", "b.com"]);
    assert_eq!(r.options().ndots(), Some(2));
    assert_eq!(r.options().retrans(), Some(1));
}

#[test]
fn nameserver_lines_are_capped_in_order() {
    let content = (1..=6)
        .map(|i| format!("nameserver 10.0.0.{i}\n"))
        .collect::<String>();
    let all = resolvconf(&content, NAMESERVER, 1, 5);
    assert_eq!(all.len(), 5);
    assert_eq!(all.first().map(String::as_str), Some("10.0.0.1"));
    assert_eq!(all.last().map(String::as_str), Some("10.0.0.5"));
}

#[test]
fn domain_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_conf(dir.path(), "domain c.com\nnameserver 192.0.2.1\n");

    let r = ResolverConfiguration::new()
        .with_source(FileSource::new(&path))
        .with_fallback(StaticDomain::new("corp.example"));
    assert_eq!(r.searchlist(), ["c.com"]);
}

#[test]
fn missing_file_uses_fallback_domain() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.conf");

    let r = ResolverConfiguration::new()
        .with_source(FileSource::new(&path))
        .with_fallback(StaticDomain::new("corp.example"));

    assert!(r.nameservers().is_empty());
    assert_eq!(r.searchlist(), ["corp.example"]);
    assert!(source::load(&FileSource::new(&path)).unwrap_err().is_not_found());
}

#[test]
fn latin1_comment_keeps_following_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resolv.conf");
    std::fs::write(
        &path,
        b"# G\xe9n\xe9r\xe9 par NetworkManager\nnameserver 192.0.2.1\nsearch a.com\n",
    )
    .unwrap();

    let r = ResolverConfiguration::new()
        .with_source(FileSource::new(&path))
        .with_fallback(NoFallback);
    assert_eq!(r.nameservers(), ["192.0.2.1"]);
    assert_eq!(r.searchlist(), ["a.com"]);
}

#[test]
fn invalid_utf8_only_affects_its_token() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resolv.conf");
    std::fs::write(&path, b"search caf\xe9.example b.com\nnameserver 192.0.2.1\n").unwrap();

    let r = ResolverConfiguration::new()
        .with_source(FileSource::new(&path))
        .with_fallback(NoFallback);
    assert_eq!(r.searchlist(), ["caf\u{fffd}.example", "b.com"]);
    assert_eq!(r.nameservers(), ["192.0.2.1"]);
}

#[test]
fn empty_file_without_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_conf(dir.path(), "");

    let r = ResolverConfiguration::new()
        .with_source(FileSource::new(&path))
        .with_fallback(NoFallback);
    assert!(r.nameservers().is_empty());
    assert!(r.searchlist().is_empty());
}

#[test]
fn file_changes_are_picked_up_once_stale() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_conf(dir.path(), "nameserver 192.0.2.1\n");

    let fresh = ResolverConfiguration::new().with_source(FileSource::new(&path));
    let stale = ResolverConfiguration::new()
        .with_source(FileSource::new(&path))
        .with_ttl(Duration::ZERO);

    assert_eq!(fresh.nameservers(), ["192.0.2.1"]);
    assert_eq!(stale.nameservers(), ["192.0.2.1"]);

    std::fs::write(&path, "nameserver 198.51.100.2\n").unwrap();

    // Default TTL: still served from cache.
    assert_eq!(fresh.nameservers(), ["192.0.2.1"]);
    // Zero TTL: every access reloads.
    assert_eq!(stale.nameservers(), ["198.51.100.2"]);
}

#[test]
fn file_removed_after_load_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_conf(dir.path(), "nameserver 192.0.2.1\nsearch a.com\n");

    let r = ResolverConfiguration::new()
        .with_source(FileSource::new(&path))
        .with_fallback(NoFallback)
        .with_ttl(Duration::ZERO);
    assert_eq!(r.searchlist(), ["a.com"]);

    std::fs::remove_file(&path).unwrap();
    assert!(r.nameservers().is_empty());
    assert!(r.searchlist().is_empty());
}

// ---------------------------------------------------------------------------
// Host tests
// ---------------------------------------------------------------------------

#[test]
#[ignore = "depends on the host's /etc/resolv.conf"]
fn real_resolv_conf() {
    let r = ResolverConfiguration::new();
    let nameservers = r.nameservers();
    assert!(nameservers.len() <= 5);
    assert!(r.searchlist().len() <= 6);
}
