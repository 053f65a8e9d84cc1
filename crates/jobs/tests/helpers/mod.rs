mod mock_maintenance;

pub use mock_maintenance::MockCacheMaintenancePort;
