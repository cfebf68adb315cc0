//! Core type definitions used across the PackHub workspace.

pub mod package;

pub use package::{PackageCache, PackageData};
