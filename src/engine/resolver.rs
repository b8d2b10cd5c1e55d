//! Host Resolver: matches operator queries to a host in a snapshot.

use super::error::{Error, Result};
use super::types::Host;

pub struct HostResolver<'a> {
    hosts: &'a [Host],
    strict: bool,
}

impl<'a> HostResolver<'a> {
    #[must_use]
    pub fn new(hosts: &'a [Host]) -> Self {
        Self {
            hosts,
            strict: false,
        }
    }

    /// Creates a resolver that only accepts an exact uuid or hostname.
    #[must_use]
    pub fn strict(hosts: &'a [Host]) -> Self {
        Self {
            hosts,
            strict: true,
        }
    }

    /// Resolves a uuid, hostname or unique prefix of either.
    ///
    /// # Errors
    /// Returns `Error::HostNotFound` if nothing matches and
    /// `Error::AmbiguousHost` if a prefix matches several hosts.
    pub fn resolve(&self, query: &str) -> Result<&'a Host> {
        if let Some(host) = self.hosts.iter().find(|h| h.uuid == query) {
            return Ok(host);
        }

        let exact = self.hosts.iter().find(|h| {
            h.hostname
                .as_deref()
                .is_some_and(|name| name.eq_ignore_ascii_case(query))
        });
        if let Some(host) = exact {
            return Ok(host);
        }

        if self.strict {
            return Err(Error::HostNotFound(query.to_string()));
        }
        self.prefix_resolve(query)
    }

    fn prefix_resolve(&self, query: &str) -> Result<&'a Host> {
        let query_lower = query.to_lowercase();
        if query_lower.is_empty() {
            return Err(Error::HostNotFound(query.to_string()));
        }

        let matches: Vec<&'a Host> = self
            .hosts
            .iter()
            .filter(|h| is_prefix_match(h, &query_lower))
            .collect();

        tracing::debug!(query, candidates = matches.len(), "prefix lookup");

        match matches.as_slice() {
            [] => Err(Error::HostNotFound(query.to_string())),
            [host] => Ok(*host),
            many => Err(Error::AmbiguousHost {
                query: query.to_string(),
                candidates: many.iter().map(|h| h.name().to_string()).collect(),
            }),
        }
    }
}

fn is_prefix_match(host: &Host, query_lower: &str) -> bool {
    host.uuid.to_lowercase().starts_with(query_lower)
        || host
            .hostname
            .as_deref()
            .is_some_and(|name| name.to_lowercase().starts_with(query_lower))
}
