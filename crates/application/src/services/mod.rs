mod resolver_provider;

pub use resolver_provider::ResolverProvider;
