use zonedns_domain::{DnsRequest, RecordSet};

/// Records a provider produced for a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsAnswer {
    pub records: RecordSet,
}

impl DnsAnswer {
    pub fn new(records: RecordSet) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_answered(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A link in a provider chain.
pub trait DnsProvider: Send + Sync {
    /// Answers every question of `request` it can. An unanswered result
    /// tells the chain to try the next provider.
    fn serve(&self, request: &DnsRequest) -> DnsAnswer;

    /// Short label used in logs.
    fn name(&self) -> &str;
}
