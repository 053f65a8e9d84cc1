//! Translation between zonedns record types and hickory wire types.

pub mod record_builder;
pub mod record_type_map;

pub use record_builder::RecordBuilder;
pub use record_type_map::RecordTypeMapper;
