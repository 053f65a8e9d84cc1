use super::Zone;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::debug;
use zonedns_application::ports::Resolver;
use zonedns_domain::dns_name::is_in_zone;
use zonedns_domain::{DnsClass, DnsQuery, RecordSet, RecordType};

/// Names already answered during one top-level resolution.
type Resolved = FxHashSet<Arc<str>>;

/// Answers questions from a [`Zone`]: exact match, then CNAME, then wildcard
/// match, then wildcard CNAME. CNAME targets are chased for the original
/// type; a name is never resolved twice within one question, so CNAME loops
/// end instead of recursing forever.
pub struct ZoneResolver {
    zone: Arc<Zone>,
}

impl ZoneResolver {
    pub fn new(zone: Arc<Zone>) -> Self {
        Self { zone }
    }

    fn resolve_name(
        &self,
        name: &Arc<str>,
        record_type: RecordType,
        resolved: &mut Resolved,
    ) -> RecordSet {
        if resolved.contains(name) {
            return Vec::new();
        }

        let exact = self.zone.lookup_exact(name, record_type);
        if !exact.is_empty() {
            resolved.insert(Arc::clone(name));
            return exact;
        }

        let cnames = self.zone.lookup_exact(name, RecordType::CNAME);
        if !cnames.is_empty() {
            resolved.insert(Arc::clone(name));
            return self.chase(cnames, record_type, resolved);
        }

        let wildcard = self.zone.lookup_wildcard(name, record_type);
        if !wildcard.is_empty() {
            resolved.insert(Arc::clone(name));
            return wildcard;
        }

        let wildcard_cnames = self.zone.lookup_wildcard(name, RecordType::CNAME);
        if !wildcard_cnames.is_empty() {
            resolved.insert(Arc::clone(name));
            return self.chase(wildcard_cnames, record_type, resolved);
        }

        Vec::new()
    }

    /// Appends the answers for each CNAME target, depth-first, after the
    /// CNAME records themselves.
    fn chase(
        &self,
        cnames: RecordSet,
        record_type: RecordType,
        resolved: &mut Resolved,
    ) -> RecordSet {
        let targets: Vec<Arc<str>> = cnames
            .iter()
            .filter_map(|record| record.cname_target().cloned())
            .collect();

        let mut answer = cnames;
        for target in &targets {
            if resolved.contains(target) {
                continue;
            }
            answer.extend(self.resolve_name(target, record_type, resolved));
        }
        answer
    }
}

impl Resolver for ZoneResolver {
    fn resolve(&self, query: &DnsQuery) -> RecordSet {
        if query.class != DnsClass::IN || !is_in_zone(&query.name, self.zone.origin()) {
            return Vec::new();
        }

        let mut resolved = Resolved::default();
        let answer = self.resolve_name(&query.name, query.record_type, &mut resolved);

        debug!(
            zone = self.zone.origin(),
            query = %query,
            answers = answer.len(),
            names_visited = resolved.len(),
            "Zone resolution finished"
        );

        answer
    }
}
