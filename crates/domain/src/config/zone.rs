use crate::dns_name::{fqdn, to_absolute};
use crate::{DomainError, RecordData, RecordType, ResourceRecord};
use serde::{Deserialize, Serialize};

/// One record of a zone, in zone-file vocabulary.
///
/// ```toml
/// [[zones.records]]
/// name = "www"
/// type = "CNAME"
/// ttl = 300
/// value = "@"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneRecordConfig {
    /// `@`, a name relative to the origin, or an absolute name ending in `.`
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: String,

    #[serde(default)]
    pub ttl: Option<u32>,

    pub value: String,
}

impl ZoneRecordConfig {
    pub fn fqdn(&self, origin: &str) -> String {
        to_absolute(&self.name, origin).to_lowercase()
    }

    pub fn ttl_or_default(&self) -> u32 {
        self.ttl.unwrap_or(3600)
    }

    pub fn to_record(&self, origin: &str) -> Result<ResourceRecord, DomainError> {
        let record_type: RecordType = self
            .record_type
            .parse()
            .map_err(DomainError::InvalidRecord)?;
        if !record_type.is_data_type() {
            return Err(DomainError::UnsupportedRecordType(self.record_type.clone()));
        }

        let data = RecordData::parse(record_type, &self.value, origin)?.to_lowercase_names();

        Ok(ResourceRecord::new(
            self.fqdn(origin),
            self.ttl_or_default(),
            data,
        ))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    pub origin: String,

    /// Router pattern the zone is registered under; defaults to the origin.
    #[serde(default)]
    pub pattern: Option<String>,

    /// Serve the zone through an answer cache.
    #[serde(default = "default_true")]
    pub cached: bool,

    #[serde(default)]
    pub records: Vec<ZoneRecordConfig>,
}

impl ZoneConfig {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            pattern: None,
            cached: true,
            records: Vec::new(),
        }
    }

    /// Lower-case, trailing-dot origin.
    pub fn normalized_origin(&self) -> String {
        fqdn(&self.origin).to_lowercase()
    }

    pub fn pattern(&self) -> String {
        match &self.pattern {
            Some(pattern) => fqdn(pattern).to_lowercase(),
            None => self.normalized_origin(),
        }
    }

    pub fn to_records(&self) -> Result<Vec<ResourceRecord>, DomainError> {
        let origin = self.normalized_origin();
        self.records
            .iter()
            .map(|record| record.to_record(&origin))
            .collect()
    }
}

fn default_true() -> bool {
    true
}
