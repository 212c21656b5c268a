pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{json_config::ProjectModel, toml_config::ManifestConfig};
pub use core::summary::{descriptors_match, ModuleSummary};
pub use domain::model::{ModuleSpec, ModuleSpecBuilder};
pub use domain::ports::ModuleDescriptor;
pub use utils::error::{ModuleMetaError, Result};
