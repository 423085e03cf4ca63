//! # resolvconf-cache
//!
//! Read DNS name servers, search domains and options from a UNIX
//! `resolv.conf`, cached for a fixed TTL.
//!
//! [`ResolverConfiguration`] is an explicit cache object: create one at
//! startup, share it, and call its accessors whenever a lookup needs the
//! current configuration. The file is parsed on first access and again on
//! the first access after the TTL (five minutes by default) has elapsed.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use resolvconf_cache::{ResolverConfiguration, ResolverSettings};
//!
//! let settings = ResolverSettings::from_env()?;
//! let resolver = Arc::new(ResolverConfiguration::from_settings(&settings));
//!
//! for ns in resolver.nameservers() {
//!     println!("nameserver {ns}");
//! }
//! println!("search {}", resolver.searchlist().join(" "));
//! # Ok::<(), resolvconf_cache::ResolverError>(())
//! ```
//!
//! ## Search list
//!
//! The search list is the first `search` line, else the first `domain`
//! line, else a domain reported by the platform (see [`fallback`]).
//!
//! ## Failure policy
//!
//! A missing or unreadable file is an empty configuration, not an error.
//! Use [`source::load`] to tell the two apart.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod fallback;
pub mod options;
pub mod parser;
pub mod resolver;
pub mod search;
pub mod source;

pub use config::ResolverSettings;
pub use error::{ResolverError, Result};
pub use fallback::{FallbackDomainProvider, HostnameDomain, NisDomain, NoFallback, StaticDomain};
pub use options::ResolverOptions;
pub use parser::resolvconf;
pub use resolver::{Clock, ResolverConfiguration, SystemClock};
pub use search::search_list;
pub use source::{ConfSource, FileSource, StaticSource};
