//! theblockchainkiller - launch utilities for the miner
//!
//! # Architecture
//!
//! The crate backs two small binaries:
//!
//! - `get_app_version` prints the version string used to tag container builds
//! - `run_miner` loads the miner's key pair from flags or the environment
//!
//! ## Credentials
//! - [`credentials`] - Key pair loading with environment fallback
//! - [`crypto`] - Base64 decoding of SSH key files
//!
//! ## Versioning
//! - [`version`] - Tag or timestamp version strings
//!
//! ## Configuration & Utilities
//! - [`config`] - Environment variable names and lookup
//! - [`cli`] - Argument parsing and logging setup for the binaries
//! - [`error`] - Error types

#![forbid(unsafe_code)]

// ============================================================================
// Credentials
// ============================================================================
pub mod credentials;
pub mod crypto;

// ============================================================================
// Versioning
// ============================================================================
pub mod version;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod cli;
pub mod config;
pub mod error;
