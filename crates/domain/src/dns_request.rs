use super::DnsQuery;
use std::net::{IpAddr, Ipv4Addr};

/// All questions carried by one inbound message.
#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub queries: Vec<DnsQuery>,
    pub client_ip: IpAddr,
}

impl DnsRequest {
    pub fn new(queries: Vec<DnsQuery>, client_ip: IpAddr) -> Self {
        Self { queries, client_ip }
    }

    pub fn single(query: DnsQuery, client_ip: IpAddr) -> Self {
        Self::new(vec![query], client_ip)
    }

    /// A request built inside the process (tests, warm-up) rather than from the wire.
    pub fn internal(queries: Vec<DnsQuery>) -> Self {
        Self::new(queries, IpAddr::V4(Ipv4Addr::LOCALHOST))
    }

    /// Name used to pick a zone for the whole request.
    pub fn primary_name(&self) -> Option<&str> {
        self.queries.first().map(|q| q.name.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}
