//! Shared types, errors, and configuration for Warikan.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes and per-currency amounts
//! - Typed IDs for participants and expenses
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
