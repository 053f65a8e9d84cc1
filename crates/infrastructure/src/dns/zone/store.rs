use super::wildcard::wildcard_candidates;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::sync::Arc;
use zonedns_domain::{RecordSet, RecordType, ResourceRecord};

/// RRsets of one owner name, in the order their types were first seen.
type NodeSets = SmallVec<[(RecordType, RecordSet); 2]>;

/// In-memory authoritative record store for one origin.
///
/// Filled once while the zone is loaded, then shared read-only behind an
/// `Arc`. Owner names are matched byte-for-byte.
#[derive(Debug)]
pub struct Zone {
    origin: Arc<str>,
    nodes: FxHashMap<Arc<str>, NodeSets>,
    record_count: usize,
}

impl Zone {
    pub fn new(origin: impl Into<Arc<str>>) -> Self {
        Self {
            origin: origin.into(),
            nodes: FxHashMap::default(),
            record_count: 0,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Appends `record` to the RRset for its owner name and type. Owner
    /// names outside the origin are accepted as-is.
    pub fn add_record(&mut self, record: ResourceRecord) {
        let record_type = record.record_type();
        let sets = self.nodes.entry(Arc::clone(&record.name)).or_default();

        match sets.iter_mut().find(|(t, _)| *t == record_type) {
            Some((_, set)) => set.push(record),
            None => sets.push((record_type, vec![record])),
        }
        self.record_count += 1;
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = ResourceRecord>) {
        for record in records {
            self.add_record(record);
        }
    }

    /// The RRset stored at exactly `name` for `record_type`. `ANY` returns
    /// every RRset at `name`, concatenated.
    pub fn lookup_exact(&self, name: &str, record_type: RecordType) -> RecordSet {
        if record_type == RecordType::ANY {
            return self
                .nodes
                .get(name)
                .map(|sets| sets.iter().flat_map(|(_, set)| set.iter().cloned()).collect())
                .unwrap_or_default();
        }

        self.rrset(name, record_type).cloned().unwrap_or_default()
    }

    /// First non-empty wildcard RRset enclosing `name`, with every owner
    /// rewritten to `name`. Types match literally, so `ANY` never expands a
    /// wildcard.
    pub fn lookup_wildcard(&self, name: &Arc<str>, record_type: RecordType) -> RecordSet {
        wildcard_candidates(name, &self.origin)
            .iter()
            .find_map(|candidate| self.rrset(candidate, record_type))
            .map(|set| {
                set.iter()
                    .map(|record| record.with_name(Arc::clone(name)))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn rrset(&self, name: &str, record_type: RecordType) -> Option<&RecordSet> {
        self.nodes
            .get(name)?
            .iter()
            .find(|(t, set)| *t == record_type && !set.is_empty())
            .map(|(_, set)| set)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|name| name.as_ref())
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.record_count
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}
