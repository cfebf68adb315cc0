//! # packhub-core
//!
//! Core crate for PackHub. Contains configuration schemas, the resolved
//! per-session configuration, shared runtime handles (package data cache,
//! dependency optimizer registry), and the unified error system.
//!
//! This crate has **no** internal dependencies on other PackHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use config::{AppConfig, Command, ResolvedConfig};
pub use error::AppError;
pub use result::AppResult;
