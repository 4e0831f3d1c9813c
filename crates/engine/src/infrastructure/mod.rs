//! Infrastructure layer - external dependency implementations.
//!
//! - `ports` - Trait definitions for external dependencies
//! - `storage` - Collection store adapters (JSON files, in-memory) and seed data
//! - `clock` - System clock and random sources
//! - `config` - Environment configuration

pub mod clock;
pub mod config;
pub mod ports;
pub mod storage;
