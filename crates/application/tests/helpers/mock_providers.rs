#![allow(dead_code)]
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use zonedns_application::ports::{DnsAnswer, DnsProvider, Resolver};
use zonedns_domain::{DnsQuery, DnsRequest, RecordData, RecordSet, ResourceRecord};

pub fn a_record(name: &str, ip: [u8; 4]) -> ResourceRecord {
    ResourceRecord::new(
        name,
        3600,
        RecordData::A(Ipv4Addr::new(ip[0], ip[1], ip[2], ip[3])),
    )
}

/// Provider returning a fixed answer and counting how often it was asked.
pub struct StaticProvider {
    name: String,
    answer: DnsAnswer,
    calls: AtomicU64,
}

impl StaticProvider {
    pub fn answering(name: &str, records: RecordSet) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            answer: DnsAnswer::new(records),
            calls: AtomicU64::new(0),
        })
    }

    pub fn empty(name: &str) -> Arc<Self> {
        Self::answering(name, Vec::new())
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

impl DnsProvider for StaticProvider {
    fn serve(&self, _request: &DnsRequest) -> DnsAnswer {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.answer.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Resolver backed by a map from canonical question to records.
#[derive(Default)]
pub struct MockResolver {
    answers: HashMap<String, RecordSet>,
    calls: AtomicU64,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, query: &DnsQuery, records: RecordSet) -> Self {
        self.answers.insert(query.to_string(), records);
        self
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Resolver for MockResolver {
    fn resolve(&self, query: &DnsQuery) -> RecordSet {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.answers
            .get(&query.to_string())
            .cloned()
            .unwrap_or_default()
    }
}
