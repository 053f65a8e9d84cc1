use super::{DnsClass, RecordType};
use std::fmt;
use std::sync::Arc;

/// One question: owner name, type and class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub class: DnsClass,
}

impl DnsQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
            class: DnsClass::IN,
        }
    }

    pub fn with_class(mut self, class: DnsClass) -> Self {
        self.class = class;
        self
    }
}

/// Canonical form `name<TAB>CLASS<TAB>TYPE`, used as the answer cache key.
impl fmt::Display for DnsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.name, self.class, self.record_type)
    }
}
