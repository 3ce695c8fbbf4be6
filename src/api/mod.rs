//! Backend API module - typed endpoint client and graceful-fallback access

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiError, DataOrigin, HealthDataSource};
