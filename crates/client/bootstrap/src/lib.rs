//! Shared bootstrap utilities for cooking skill front-ends.
//!
//! Provides configuration loading, oracle assembly, and skill registration that
//! can be reused by the CLI or a host integration.
pub mod builder;
pub mod config;
pub mod oracles;

pub use builder::{SkillBuilder, SkillSetup};
pub use config::BootstrapConfig;
pub use oracles::{ContentOracleFactory, OracleBundle, OracleFactory};
