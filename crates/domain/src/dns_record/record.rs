use super::{DnsClass, RecordData, RecordType};
use std::fmt;
use std::sync::Arc;

/// Records sharing an owner name and type, in insertion order.
pub type RecordSet = Vec<ResourceRecord>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Arc<str>,
    pub class: DnsClass,
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<Arc<str>>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            class: DnsClass::IN,
            ttl,
            data,
        }
    }

    pub fn with_class(mut self, class: DnsClass) -> Self {
        self.class = class;
        self
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    pub fn cname_target(&self) -> Option<&Arc<str>> {
        match &self.data {
            RecordData::CNAME(target) => Some(target),
            _ => None,
        }
    }

    /// Copy of this record owned by `name`; used to expand wildcard matches.
    pub fn with_name(&self, name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            class: self.class,
            ttl: self.ttl,
            data: self.data.clone(),
        }
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name,
            self.ttl,
            self.class,
            self.record_type(),
            self.data
        )
    }
}
