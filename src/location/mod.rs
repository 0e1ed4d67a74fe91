// Declare submodules
pub mod location_models;
pub mod location_dto;
pub mod location_repository;
pub mod location_service;
pub mod location_handlers;

// Re-export public items
pub use location_models::UserLocation;
pub use location_repository::LocationRepository;
pub use location_service::LocationService;
