// Declare submodules
pub mod alert_models;
pub mod alert_dto;
pub mod alert_repository;
pub mod alert_service;
pub mod alert_handlers;

// Re-export public items
pub use alert_models::{Alert, AlertSeverity};
pub use alert_repository::AlertRepository;
pub use alert_service::AlertService;
