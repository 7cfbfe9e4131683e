//! Configuration loading and management for the attrition engine.
//!
//! This module provides the engine's policy flags (timeline denominator,
//! department breakdown mode, table limits) and the ingestion settings,
//! loaded from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use attrition_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine.yaml").unwrap().into_config();
//! println!("Department breakdown: {:?}", config.department_breakdown_mode);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ADMIN_AND_EXECUTIVE_OFFICES, DepartmentBreakdownMode, EngineConfig, IngestConfig,
    TimelineDenominator,
};
