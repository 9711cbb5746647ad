pub mod edit_service;
pub mod export_service;
pub mod import_service;
pub mod insight_service;
pub mod metrics_service;
pub mod query_service;
pub mod validate_service;
