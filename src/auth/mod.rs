// Declare submodules
pub mod jwt;

// Re-export public items
pub use jwt::verify_jwt;
