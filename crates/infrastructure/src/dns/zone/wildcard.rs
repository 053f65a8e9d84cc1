use zonedns_domain::dns_name::{join, relative_part};

/// Wildcard owner names that could match `name` inside `origin`.
///
/// Each replaced label becomes its own `*`, starting from the left: for
/// `a.b.c.example.com.` in `example.com.` this yields `*.b.c.example.com.`,
/// `*.*.c.example.com.` and `*.*.*.example.com.`. A lone `*.example.com.`
/// therefore only covers names one label below the origin.
/// The apex and names outside the zone have no candidates.
pub fn wildcard_candidates(name: &str, origin: &str) -> Vec<String> {
    let Some(relative) = relative_part(name, origin) else {
        return Vec::new();
    };

    let labels: Vec<&str> = relative.split('.').filter(|l| !l.is_empty()).collect();

    (1..=labels.len())
        .map(|replaced| {
            let wildcard: Vec<&str> = std::iter::repeat("*")
                .take(replaced)
                .chain(labels[replaced..].iter().copied())
                .collect();
            join(&wildcard.join("."), origin)
        })
        .collect()
}
