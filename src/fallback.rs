//! Platform fallback for the search list.
//!
//! When `resolv.conf` names neither a `search` list nor a `domain`, the
//! search list falls back to a domain reported by the operating system.

use std::ffi::{CStr, CString};

/// Supplies the domain used when the configuration names none.
pub trait FallbackDomainProvider: Send + Sync {
    /// Returns the fallback domain, or `None` if the platform has none.
    fn fallback_domain(&self) -> Option<String>;
}

impl<F> FallbackDomainProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn fallback_domain(&self) -> Option<String> {
        self()
    }
}

/// Domain part of the host name: everything after the first `.`.
///
/// A short host name (`box`) is first canonicalised with `getaddrinfo(3)`
/// and `AI_CANONNAME`, so `/etc/hosts` or DNS can still supply the domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostnameDomain;

impl FallbackDomainProvider for HostnameDomain {
    fn fallback_domain(&self) -> Option<String> {
        let host = hostname()?;
        domain_from_host(&host).or_else(|| {
            let canonical = canonical_name(&host)?;
            tracing::trace!(host = %host, canonical = %canonical, "Canonicalised host name");
            domain_from_host(&canonical)
        })
    }
}

/// NIS/YP domain reported by `getdomainname(2)`.
///
/// Always `None` outside Linux.
#[derive(Debug, Clone, Copy, Default)]
pub struct NisDomain;

impl FallbackDomainProvider for NisDomain {
    fn fallback_domain(&self) -> Option<String> {
        nis_domain().filter(|d| !d.is_empty() && d != "(none)")
    }
}

/// Never supplies a domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFallback;

impl FallbackDomainProvider for NoFallback {
    fn fallback_domain(&self) -> Option<String> {
        None
    }
}

/// A fixed answer, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticDomain(pub Option<String>);

impl StaticDomain {
    /// Always answers `domain`.
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        Self(Some(domain.into()))
    }
}

impl FallbackDomainProvider for StaticDomain {
    fn fallback_domain(&self) -> Option<String> {
        self.0.clone()
    }
}

/// `host.corp.example` -> `corp.example`.
fn domain_from_host(host: &str) -> Option<String> {
    let (_, domain) = host.split_once('.')?;
    (!domain.is_empty()).then(|| domain.to_string())
}

/// Converts a NUL-terminated buffer filled by libc.
fn c_buf_to_string(buf: &[u8]) -> Option<String> {
    let end = buf.iter().position(|&b| b == 0)?;
    std::str::from_utf8(&buf[..end]).ok().map(str::to_string)
}

fn hostname() -> Option<String> {
    let mut buf = [0u8; 1024];
    // SAFETY: the buffer is valid for `buf.len()` bytes and gethostname
    // writes at most that many.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len()) };
    if rc != 0 {
        tracing::trace!(error = %std::io::Error::last_os_error(), "gethostname failed");
        return None;
    }
    c_buf_to_string(&buf)
}

/// Canonical name of `host` as reported by `getaddrinfo(3)`.
fn canonical_name(host: &str) -> Option<String> {
    let c_host = CString::new(host).ok()?;

    // SAFETY: `addrinfo` is plain data; all-zero is the "no constraints" hints value.
    let mut hints: libc::addrinfo = unsafe { std::mem::zeroed() };
    hints.ai_family = libc::AF_UNSPEC;
    hints.ai_flags = libc::AI_CANONNAME;

    let mut res: *mut libc::addrinfo = std::ptr::null_mut();
    // SAFETY: `c_host` is NUL-terminated, `hints` and `res` are valid for the call.
    let rc = unsafe { libc::getaddrinfo(c_host.as_ptr(), std::ptr::null(), &hints, &mut res) };
    if rc != 0 || res.is_null() {
        tracing::trace!(host = %host, rc, "getaddrinfo failed");
        return None;
    }

    // SAFETY: `res` is a non-null list returned by getaddrinfo. The name is
    // copied out before the list is released exactly once.
    unsafe {
        let canon = (*res).ai_canonname;
        let name = (!canon.is_null()).then(|| CStr::from_ptr(canon).to_string_lossy().into_owned());
        libc::freeaddrinfo(res);
        name.filter(|n| !n.is_empty())
    }
}

#[cfg(target_os = "linux")]
fn nis_domain() -> Option<String> {
    let mut buf = [0u8; 256];
    // SAFETY: the buffer is valid for `buf.len()` bytes and getdomainname
    // writes at most that many.
    let rc = unsafe { libc::getdomainname(buf.as_mut_ptr().cast(), buf.len()) };
    if rc != 0 {
        tracing::trace!(error = %std::io::Error::last_os_error(), "getdomainname failed");
        return None;
    }
    c_buf_to_string(&buf)
}

#[cfg(not(target_os = "linux"))]
const fn nis_domain() -> Option<String> {
    None
}
