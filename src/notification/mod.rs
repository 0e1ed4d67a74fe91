// Declare submodules
pub mod notification_models;
pub mod notification_dto;
pub mod notification_repository;
pub mod notification_service;
pub mod notification_handlers;
pub mod rescan_service;

// Re-export public items
pub use notification_models::{Notification, NotificationWithAlert};
pub use notification_repository::NotificationRepository;
pub use notification_service::NotificationService;
pub use rescan_service::start_rescan_service;
