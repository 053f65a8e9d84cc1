pub mod cache_layer;

pub use cache_layer::CachedResolver;
