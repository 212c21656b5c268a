use crate::domain::ports::ModuleDescriptor;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "module-meta")]
#[command(about = "Describe a build module from command line flags")]
pub struct CliConfig {
    #[arg(long, default_value = "app")]
    pub name: String,

    #[arg(long, value_delimiter = ',')]
    pub sources: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub test_sources: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub classpath: Vec<String>,

    #[arg(long, default_value = "app.jar")]
    pub jar: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit the module description as JSON")]
    pub json: bool,
}

impl ModuleDescriptor for CliConfig {
    fn name(&self) -> &str {
        &self.name
    }

    fn source_files(&self) -> &[String] {
        &self.sources
    }

    fn test_source_files(&self) -> &[String] {
        &self.test_sources
    }

    fn classpath_roots(&self) -> &[String] {
        &self.classpath
    }

    fn jar_name(&self) -> &str {
        &self.jar
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;

        for path in &self.sources {
            validate_path("sources", path)?;
        }
        for path in &self.test_sources {
            validate_path("test_sources", path)?;
        }
        for path in &self.classpath {
            validate_path("classpath", path)?;
        }

        Ok(())
    }
}
