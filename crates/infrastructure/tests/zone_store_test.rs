mod helpers;

use helpers::{a, cname, txt, ZoneBuilder};
use std::sync::Arc;
use zonedns_domain::RecordType;
use zonedns_infrastructure::dns::Zone;

#[test]
fn test_lookup_exact_preserves_insertion_order() {
    let zone = ZoneBuilder::new("example.com.")
        .record(a("example.com.", 60, [10, 0, 0, 2]))
        .record(a("example.com.", 60, [10, 0, 0, 1]))
        .record(a("example.com.", 60, [10, 0, 0, 3]))
        .build();

    let set = zone.lookup_exact("example.com.", RecordType::A);

    assert_eq!(
        set,
        vec![
            a("example.com.", 60, [10, 0, 0, 2]),
            a("example.com.", 60, [10, 0, 0, 1]),
            a("example.com.", 60, [10, 0, 0, 3]),
        ]
    );
    assert_eq!(zone.len(), 3);
}

#[test]
fn test_lookup_exact_misses_are_empty() {
    let zone = ZoneBuilder::new("example.com.")
        .record(a("example.com.", 60, [10, 0, 0, 1]))
        .build();

    assert!(zone.lookup_exact("example.com.", RecordType::AAAA).is_empty());
    assert!(zone.lookup_exact("www.example.com.", RecordType::A).is_empty());
}

#[test]
fn test_lookup_exact_is_case_sensitive() {
    let zone = ZoneBuilder::new("example.com.")
        .record(a("www.example.com.", 60, [10, 0, 0, 1]))
        .build();

    assert!(zone.lookup_exact("WWW.example.com.", RecordType::A).is_empty());
}

#[test]
fn test_lookup_any_returns_every_set() {
    let zone = ZoneBuilder::new("example.com.")
        .record(a("example.com.", 60, [10, 0, 0, 1]))
        .record(txt("example.com.", 60, "hello"))
        .record(a("example.com.", 60, [10, 0, 0, 2]))
        .build();

    let all = zone.lookup_exact("example.com.", RecordType::ANY);

    assert_eq!(all.len(), 3);
    assert!(all.contains(&txt("example.com.", 60, "hello")));
    assert!(all.contains(&a("example.com.", 60, [10, 0, 0, 2])));
}

#[test]
fn test_out_of_zone_owner_is_accepted() {
    let mut zone = Zone::new("example.com.");
    zone.add_record(a("other.org.", 60, [10, 0, 0, 1]));

    assert!(zone.contains_name("other.org."));
    assert_eq!(zone.lookup_exact("other.org.", RecordType::A).len(), 1);
}

#[test]
fn test_lookup_wildcard_rewrites_owner() {
    let zone = ZoneBuilder::new("example.com.")
        .record(a("*.example.com.", 300, [10, 0, 0, 9]))
        .build();

    let set = zone.lookup_wildcard(&Arc::from("x.example.com."), RecordType::A);

    assert_eq!(set, vec![a("x.example.com.", 300, [10, 0, 0, 9])]);
}

#[test]
fn test_lookup_wildcard_prefers_closest_enclosing() {
    let zone = ZoneBuilder::new("example.com.")
        .record(a("*.*.example.com.", 300, [10, 0, 0, 1]))
        .record(a("*.b.example.com.", 300, [10, 0, 0, 2]))
        .build();

    let deep = zone.lookup_wildcard(&Arc::from("a.b.example.com."), RecordType::A);
    assert_eq!(deep, vec![a("a.b.example.com.", 300, [10, 0, 0, 2])]);

    let other = zone.lookup_wildcard(&Arc::from("a.c.example.com."), RecordType::A);
    assert_eq!(other, vec![a("a.c.example.com.", 300, [10, 0, 0, 1])]);
}

#[test]
fn test_single_star_covers_only_one_label() {
    let zone = ZoneBuilder::new("example.com.")
        .record(a("*.example.com.", 3600, [127, 0, 0, 1]))
        .build();

    assert_eq!(
        zone.lookup_wildcard(&Arc::from("x.example.com."), RecordType::A),
        vec![a("x.example.com.", 3600, [127, 0, 0, 1])]
    );
    assert!(zone
        .lookup_wildcard(&Arc::from("x.y.example.com."), RecordType::A)
        .is_empty());
}

#[test]
fn test_lookup_wildcard_skips_candidates_without_the_type() {
    let zone = ZoneBuilder::new("example.com.")
        .record(txt("*.b.example.com.", 300, "closest"))
        .record(a("*.*.example.com.", 300, [10, 0, 0, 1]))
        .build();

    let set = zone.lookup_wildcard(&Arc::from("a.b.example.com."), RecordType::A);

    assert_eq!(set, vec![a("a.b.example.com.", 300, [10, 0, 0, 1])]);
}

#[test]
fn test_lookup_wildcard_any_matches_nothing() {
    let zone = ZoneBuilder::new("example.com.")
        .record(a("*.example.com.", 300, [10, 0, 0, 1]))
        .record(txt("*.example.com.", 300, "wild"))
        .build();

    assert!(zone
        .lookup_wildcard(&Arc::from("x.example.com."), RecordType::ANY)
        .is_empty());
    assert_eq!(zone.lookup_exact("*.example.com.", RecordType::ANY).len(), 2);
}

#[test]
fn test_lookup_wildcard_never_matches_apex() {
    let zone = ZoneBuilder::new("example.com.")
        .record(cname("*.example.com.", 300, "target.example.com."))
        .build();

    assert!(zone
        .lookup_wildcard(&Arc::from("example.com."), RecordType::CNAME)
        .is_empty());
}
