mod resolver;
mod store;
mod wildcard;

pub use resolver::ZoneResolver;
pub use store::Zone;
pub use wildcard::wildcard_candidates;
