mod helpers;

use helpers::{a_record, StaticProvider};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use zonedns_application::ports::DnsAnswer;
use zonedns_application::use_cases::{HandleDnsQueryUseCase, QueryOutcome, ZoneRouter};
use zonedns_domain::{DnsQuery, DnsRequest, RecordType};

const CLIENT_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 100));

fn make_use_case(router: ZoneRouter) -> HandleDnsQueryUseCase {
    HandleDnsQueryUseCase::new(Arc::new(router))
}

fn request(name: &str) -> DnsRequest {
    DnsRequest::single(DnsQuery::new(name, RecordType::A), CLIENT_IP)
}

#[test]
fn test_answer_from_matching_zone() {
    let mut router = ZoneRouter::new();
    router.add_provider(
        "example.com.",
        StaticProvider::answering("zone", vec![a_record("example.com.", [127, 0, 0, 1])]),
    );

    let outcome = make_use_case(router).execute(&request("example.com."));

    assert_eq!(
        outcome,
        QueryOutcome::Answer(DnsAnswer::new(vec![a_record("example.com.", [127, 0, 0, 1])]))
    );
}

#[test]
fn test_empty_answer_inside_zone_is_still_authoritative() {
    let mut router = ZoneRouter::new();
    router.add_provider("example.com.", StaticProvider::empty("zone"));

    let outcome = make_use_case(router).execute(&request("missing.example.com."));

    assert_eq!(outcome, QueryOutcome::Answer(DnsAnswer::empty()));
}

#[test]
fn test_name_outside_every_zone_is_not_authoritative() {
    let mut router = ZoneRouter::new();
    router.add_provider("example.com.", StaticProvider::empty("zone"));

    let outcome = make_use_case(router).execute(&request("example.org."));

    assert_eq!(outcome, QueryOutcome::NotAuthoritative);
}

#[test]
fn test_request_without_questions_is_not_authoritative() {
    let mut router = ZoneRouter::new();
    router.add_provider(".", StaticProvider::empty("zone"));

    let outcome = make_use_case(router).execute(&DnsRequest::new(Vec::new(), CLIENT_IP));

    assert_eq!(outcome, QueryOutcome::NotAuthoritative);
}
