#![allow(dead_code)]
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use zonedns_application::ports::Resolver;
use zonedns_domain::{DnsQuery, RecordData, RecordSet, ResourceRecord};
use zonedns_infrastructure::dns::{Zone, ZoneResolver};

pub fn a(name: &str, ttl: u32, ip: [u8; 4]) -> ResourceRecord {
    ResourceRecord::new(name, ttl, RecordData::A(Ipv4Addr::from(ip)))
}

pub fn aaaa(name: &str, ttl: u32, ip: Ipv6Addr) -> ResourceRecord {
    ResourceRecord::new(name, ttl, RecordData::AAAA(ip))
}

pub fn cname(name: &str, ttl: u32, target: &str) -> ResourceRecord {
    ResourceRecord::new(name, ttl, RecordData::CNAME(Arc::from(target)))
}

pub fn txt(name: &str, ttl: u32, text: &str) -> ResourceRecord {
    ResourceRecord::new(name, ttl, RecordData::TXT(vec![text.to_string()]))
}

pub struct ZoneBuilder {
    zone: Zone,
}

impl ZoneBuilder {
    pub fn new(origin: &str) -> Self {
        Self {
            zone: Zone::new(origin),
        }
    }

    pub fn record(mut self, record: ResourceRecord) -> Self {
        self.zone.add_record(record);
        self
    }

    pub fn build(self) -> Zone {
        self.zone
    }

    pub fn resolver(self) -> ZoneResolver {
        ZoneResolver::new(Arc::new(self.zone))
    }
}

/// Resolver wrapper counting how often the inner resolver was reached.
pub struct CountingResolver {
    inner: Arc<dyn Resolver>,
    calls: AtomicU64,
}

impl CountingResolver {
    pub fn new(inner: Arc<dyn Resolver>) -> Self {
        Self {
            inner,
            calls: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Resolver for CountingResolver {
    fn resolve(&self, query: &DnsQuery) -> RecordSet {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.resolve(query)
    }
}
