#![allow(dead_code)]
use zonedns_domain::{ZoneConfig, ZoneRecordConfig};

pub struct ZoneConfigBuilder {
    zone: ZoneConfig,
}

impl ZoneConfigBuilder {
    pub fn new(origin: &str) -> Self {
        Self {
            zone: ZoneConfig::new(origin),
        }
    }

    pub fn pattern(mut self, pattern: &str) -> Self {
        self.zone.pattern = Some(pattern.to_string());
        self
    }

    pub fn uncached(mut self) -> Self {
        self.zone.cached = false;
        self
    }

    pub fn record(mut self, name: &str, record_type: &str, value: &str) -> Self {
        self.zone.records.push(ZoneRecordConfig {
            name: name.to_string(),
            record_type: record_type.to_string(),
            ttl: None,
            value: value.to_string(),
        });
        self
    }

    pub fn record_with_ttl(mut self, name: &str, record_type: &str, ttl: u32, value: &str) -> Self {
        self.zone.records.push(ZoneRecordConfig {
            name: name.to_string(),
            record_type: record_type.to_string(),
            ttl: Some(ttl),
            value: value.to_string(),
        });
        self
    }

    pub fn build(self) -> ZoneConfig {
        self.zone
    }
}
