//! Products

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::ProductsServiceError;
pub use service::*;
