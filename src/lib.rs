pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::{PatchSettings, WriteMode};
pub use crate::core::patcher::{load, persist, transform};
pub use crate::core::{etl::PatchEngine, pipeline::SubregionPipeline};
pub use crate::domain::model::{PatchReport, Record, SubregionUpdate, TransformResult};
pub use crate::utils::error::{PatchError, Result};
