use super::RecordType;
use crate::dns_name::to_absolute;
use crate::errors::DomainError;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData {
    pub mname: Arc<str>,
    pub rname: Arc<str>,
    pub serial: u32,
    pub refresh: i32,
    pub retry: i32,
    pub expire: i32,
    pub minimum: u32,
}

/// Type-specific payload of a resource record.
///
/// The resolution engine never looks inside this value except to follow
/// `CNAME` targets. Name-valued fields are stored fully-qualified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(Arc<str>),
    NS(Arc<str>),
    PTR(Arc<str>),
    MX {
        preference: u16,
        exchange: Arc<str>,
    },
    TXT(Vec<String>),
    SOA(SoaData),
    SRV {
        priority: u16,
        weight: u16,
        port: u16,
        target: Arc<str>,
    },
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::CNAME(_) => RecordType::CNAME,
            RecordData::NS(_) => RecordType::NS,
            RecordData::PTR(_) => RecordType::PTR,
            RecordData::MX { .. } => RecordType::MX,
            RecordData::TXT(_) => RecordType::TXT,
            RecordData::SOA(_) => RecordType::SOA,
            RecordData::SRV { .. } => RecordType::SRV,
        }
    }

    /// Parses presentation-format rdata (the part of a zone-file line after
    /// the type). Relative names are completed with `origin`.
    pub fn parse(record_type: RecordType, value: &str, origin: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| {
            DomainError::InvalidRecord(format!("{} '{}': {}", record_type, value, reason))
        };
        let fields: Vec<&str> = value
            .split_whitespace()
            .filter(|f| *f != "(" && *f != ")")
            .collect();
        let name = |raw: &str| -> Arc<str> { Arc::from(to_absolute(raw, origin)) };

        match record_type {
            RecordType::A => value
                .trim()
                .parse::<Ipv4Addr>()
                .map(RecordData::A)
                .map_err(|e| invalid(&e.to_string())),
            RecordType::AAAA => value
                .trim()
                .parse::<Ipv6Addr>()
                .map(RecordData::AAAA)
                .map_err(|e| invalid(&e.to_string())),
            RecordType::CNAME | RecordType::NS | RecordType::PTR => {
                let &[target] = fields.as_slice() else {
                    return Err(invalid("expected a single domain name"));
                };
                let target = name(target);
                Ok(match record_type {
                    RecordType::CNAME => RecordData::CNAME(target),
                    RecordType::NS => RecordData::NS(target),
                    _ => RecordData::PTR(target),
                })
            }
            RecordType::MX => {
                let &[preference, exchange] = fields.as_slice() else {
                    return Err(invalid("expected '<preference> <exchange>'"));
                };
                Ok(RecordData::MX {
                    preference: preference.parse().map_err(|_| invalid("bad preference"))?,
                    exchange: name(exchange),
                })
            }
            RecordType::TXT => {
                let strings = parse_character_strings(value);
                if strings.is_empty() {
                    return Err(invalid("expected at least one character string"));
                }
                Ok(RecordData::TXT(strings))
            }
            RecordType::SOA => {
                let &[mname, rname, serial, refresh, retry, expire, minimum] = fields.as_slice() else {
                    return Err(invalid(
                        "expected '<mname> <rname> <serial> <refresh> <retry> <expire> <minimum>'",
                    ));
                };
                Ok(RecordData::SOA(SoaData {
                    mname: name(mname),
                    rname: name(rname),
                    serial: serial.parse().map_err(|_| invalid("bad serial"))?,
                    refresh: refresh.parse().map_err(|_| invalid("bad refresh"))?,
                    retry: retry.parse().map_err(|_| invalid("bad retry"))?,
                    expire: expire.parse().map_err(|_| invalid("bad expire"))?,
                    minimum: minimum.parse().map_err(|_| invalid("bad minimum"))?,
                }))
            }
            RecordType::SRV => {
                let &[priority, weight, port, target] = fields.as_slice() else {
                    return Err(invalid("expected '<priority> <weight> <port> <target>'"));
                };
                Ok(RecordData::SRV {
                    priority: priority.parse().map_err(|_| invalid("bad priority"))?,
                    weight: weight.parse().map_err(|_| invalid("bad weight"))?,
                    port: port.parse().map_err(|_| invalid("bad port"))?,
                    target: name(target),
                })
            }
            RecordType::ANY | RecordType::Unknown(_) => {
                Err(DomainError::UnsupportedRecordType(record_type.to_string()))
            }
        }
    }

    /// Lower-cases every name-valued field. Addresses and text are untouched.
    pub fn to_lowercase_names(&self) -> Self {
        let lower = |n: &Arc<str>| -> Arc<str> { Arc::from(n.to_lowercase()) };
        match self {
            RecordData::CNAME(n) => RecordData::CNAME(lower(n)),
            RecordData::NS(n) => RecordData::NS(lower(n)),
            RecordData::PTR(n) => RecordData::PTR(lower(n)),
            RecordData::MX {
                preference,
                exchange,
            } => RecordData::MX {
                preference: *preference,
                exchange: lower(exchange),
            },
            RecordData::SOA(soa) => RecordData::SOA(SoaData {
                mname: lower(&soa.mname),
                rname: lower(&soa.rname),
                ..soa.clone()
            }),
            RecordData::SRV {
                priority,
                weight,
                port,
                target,
            } => RecordData::SRV {
                priority: *priority,
                weight: *weight,
                port: *port,
                target: lower(target),
            },
            other => other.clone(),
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::AAAA(addr) => write!(f, "{}", addr),
            RecordData::CNAME(n) | RecordData::NS(n) | RecordData::PTR(n) => f.write_str(n),
            RecordData::MX {
                preference,
                exchange,
            } => write!(f, "{} {}", preference, exchange),
            RecordData::TXT(strings) => {
                let quoted: Vec<String> = strings
                    .iter()
                    .map(|s| format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")))
                    .collect();
                f.write_str(&quoted.join(" "))
            }
            RecordData::SOA(soa) => write!(
                f,
                "{} {} {} {} {} {} {}",
                soa.mname, soa.rname, soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum
            ),
            RecordData::SRV {
                priority,
                weight,
                port,
                target,
            } => write!(f, "{} {} {} {}", priority, weight, port, target),
        }
    }
}

/// Splits TXT rdata into character strings. Quoted strings may contain
/// spaces and `\"` escapes; unquoted words are taken one per string.
fn parse_character_strings(value: &str) -> Vec<String> {
    let mut strings = Vec::new();
    let mut chars = value.trim().chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let mut current = String::new();
        if c == '"' {
            chars.next();
            while let Some(c) = chars.next() {
                match c {
                    '\\' => {
                        if let Some(escaped) = chars.next() {
                            current.push(escaped);
                        }
                    }
                    '"' => break,
                    other => current.push(other),
                }
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                current.push(c);
                chars.next();
            }
        }
        strings.push(current);
    }

    strings
}
