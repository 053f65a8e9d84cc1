use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use zonedns_application::ports::{CacheMaintenancePort, Resolver};
use zonedns_application::services::ResolverProvider;
use zonedns_application::use_cases::{HandleDnsQueryUseCase, ZoneRouter};
use zonedns_domain::{Config, ZoneConfig};
use zonedns_infrastructure::dns::{
    AnswerCache, AnswerCacheConfig, AnswerCacheMaintenance, CachedResolver, Zone, ZoneResolver,
};

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
    /// One sweep target per cached zone, labelled by origin.
    pub cache_maintenance: Vec<(String, Arc<dyn CacheMaintenancePort>)>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        info!(zones = config.zones.len(), "Initializing DNS services");

        let mut router = ZoneRouter::new();
        let mut cache_maintenance = Vec::new();

        for zone_config in &config.zones {
            let zone = Self::build_zone(zone_config)?;
            let origin = zone.origin().to_owned();
            info!(origin = %origin, records = zone.len(), "Zone loaded");

            let mut resolver: Arc<dyn Resolver> = Arc::new(ZoneResolver::new(Arc::new(zone)));

            if config.cache.enabled && zone_config.cached {
                let cache = Arc::new(Self::build_cache(config));
                resolver = Arc::new(CachedResolver::new(resolver, Arc::clone(&cache)));
                cache_maintenance.push((
                    origin.clone(),
                    Arc::new(AnswerCacheMaintenance::new(cache)) as Arc<dyn CacheMaintenancePort>,
                ));
            }

            router.add_provider(
                &zone_config.pattern(),
                Arc::new(ResolverProvider::new(origin, resolver)),
            );
        }

        if router.is_empty() {
            warn!("No zones configured; every query will be refused");
        }

        Ok(Self {
            handler_use_case: Arc::new(HandleDnsQueryUseCase::new(Arc::new(router))),
            cache_maintenance,
        })
    }

    fn build_zone(zone_config: &ZoneConfig) -> anyhow::Result<Zone> {
        let records = zone_config
            .to_records()
            .with_context(|| format!("invalid records in zone {}", zone_config.origin))?;

        let mut zone = Zone::new(zone_config.normalized_origin());
        zone.extend(records);
        Ok(zone)
    }

    fn build_cache(config: &Config) -> AnswerCache {
        AnswerCache::new(AnswerCacheConfig {
            default_ttl: Duration::from_secs(config.cache.default_ttl_secs),
            ttl_policy: config.cache.ttl_policy,
            ..Default::default()
        })
    }
}
