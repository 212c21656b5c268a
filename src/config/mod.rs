#[cfg(feature = "cli")]
pub mod cli;
pub mod json_config;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use json_config::ProjectModel;
pub use toml_config::ManifestConfig;
