pub mod open_er;

// Re-export the provider contract next to its implementation
pub use crate::core::rates::RateProvider;
