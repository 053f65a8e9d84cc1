use compact_str::{CompactString, ToCompactString};
use zonedns_domain::DnsQuery;

/// Canonical `name<TAB>CLASS<TAB>TYPE` form of a question.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey(CompactString);

impl CacheKey {
    #[inline]
    pub fn from_query(query: &DnsQuery) -> Self {
        Self(query.to_compact_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
