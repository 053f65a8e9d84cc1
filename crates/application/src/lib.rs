//! zonedns application layer: ports and the request-routing use cases.
pub mod ports;
pub mod services;
pub mod use_cases;
