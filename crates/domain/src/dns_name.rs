//! Helpers for fully-qualified, trailing-dot domain names.
//!
//! Comparisons are byte-for-byte; callers decide whether names are
//! normalized to lower case before they reach the store.

pub const ROOT: &str = ".";

pub fn is_fqdn(name: &str) -> bool {
    name.ends_with('.')
}

/// True when `name` equals `origin` or sits below it on a label boundary.
pub fn is_in_zone(name: &str, origin: &str) -> bool {
    if origin == ROOT {
        return is_fqdn(name);
    }
    if name == origin {
        return true;
    }
    name.len() > origin.len()
        && name.ends_with(origin)
        && name.as_bytes()[name.len() - origin.len() - 1] == b'.'
}

/// The labels of `name` below `origin`, without the separating dot.
/// Returns `None` when `name` is outside the zone and `Some("")` for the apex.
pub fn relative_part<'a>(name: &'a str, origin: &str) -> Option<&'a str> {
    if !is_in_zone(name, origin) {
        return None;
    }
    if origin == ROOT {
        return Some(name.trim_end_matches('.'));
    }
    if name == origin {
        return Some("");
    }
    Some(&name[..name.len() - origin.len() - 1])
}

/// Joins relative labels back onto `origin`.
pub fn join(relative: &str, origin: &str) -> String {
    if relative.is_empty() {
        origin.to_string()
    } else if origin == ROOT {
        format!("{}.", relative)
    } else {
        format!("{}.{}", relative, origin)
    }
}

/// Completes a zone-file style name: `@` is the origin, names ending in a
/// dot are already absolute, anything else is relative to `origin`.
pub fn to_absolute(name: &str, origin: &str) -> String {
    let name = name.trim();
    if name == "@" || name.is_empty() {
        origin.to_string()
    } else if is_fqdn(name) {
        name.to_string()
    } else {
        join(name, origin)
    }
}

/// Ensures a trailing dot: `example.com` becomes `example.com.`.
pub fn fqdn(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        ROOT.to_string()
    } else if is_fqdn(name) {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
