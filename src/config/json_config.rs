use crate::domain::model::ModuleSpec;
use crate::domain::ports::ModuleDescriptor;
use crate::utils::error::{ModuleMetaError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_unique_names, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 由外部工具匯出的 JSON 專案模型。欄位形狀與 TOML 清單不同，
/// 但匯入後同樣透過 ModuleDescriptor 查詢。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectModel {
    pub project: String,
    #[serde(default)]
    pub modules: Vec<ImportedModule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedModule {
    pub id: String,
    #[serde(default)]
    pub layout: ModuleLayout,
    pub artifact: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleLayout {
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub test_sources: Vec<String>,
    #[serde(default)]
    pub classpath: Vec<String>,
}

impl ProjectModel {
    /// 從 JSON 檔案匯入專案模型
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ModuleMetaError::IoError)?;
        Self::from_json_str(&content)
    }

    /// 從 JSON 字串匯入專案模型
    pub fn from_json_str(content: &str) -> Result<Self> {
        let mut model: ProjectModel = serde_json::from_str(content)?;
        model.resolve_defaults();
        Ok(model)
    }

    // 未指定 artifact 的模組以 <id>.jar 補齊
    fn resolve_defaults(&mut self) {
        for module in &mut self.modules {
            if module.artifact.is_none() {
                module.artifact = Some(format!("{}.jar", module.id));
            }
        }
    }

    pub fn validate_model(&self) -> Result<()> {
        validate_non_empty_string("project", &self.project)?;

        for module in &self.modules {
            validate_non_empty_string("modules.id", &module.id)?;

            for path in &module.layout.sources {
                validate_path("modules.layout.sources", path)?;
            }
            for path in &module.layout.test_sources {
                validate_path("modules.layout.testSources", path)?;
            }
            for path in &module.layout.classpath {
                validate_path("modules.layout.classpath", path)?;
            }
        }

        validate_unique_names(self.modules.iter().map(|m| m.id.as_str()))?;

        Ok(())
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn find_module(&self, id: &str) -> Option<&ImportedModule> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn module_specs(&self) -> Vec<ModuleSpec> {
        self.modules.iter().map(ImportedModule::to_spec).collect()
    }
}

impl ImportedModule {
    pub fn to_spec(&self) -> ModuleSpec {
        ModuleSpec::from_descriptor(self)
    }
}

impl ModuleDescriptor for ImportedModule {
    fn name(&self) -> &str {
        &self.id
    }

    fn source_files(&self) -> &[String] {
        &self.layout.sources
    }

    fn test_source_files(&self) -> &[String] {
        &self.layout.test_sources
    }

    fn classpath_roots(&self) -> &[String] {
        &self.layout.classpath
    }

    fn jar_name(&self) -> &str {
        self.artifact.as_deref().unwrap_or("")
    }
}

impl Validate for ProjectModel {
    fn validate(&self) -> Result<()> {
        self.validate_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_model() {
        let json_content = r#"{
            "project": "demo",
            "modules": [
                {
                    "id": "core",
                    "layout": {
                        "sources": ["src/Main.kt"],
                        "testSources": ["test/MainTest.kt"],
                        "classpath": ["/lib/runtime.jar"]
                    },
                    "artifact": "core-1.0.jar"
                }
            ]
        }"#;

        let model = ProjectModel::from_json_str(json_content).unwrap();
        assert_eq!(model.project, "demo");

        let core = model.find_module("core").unwrap();
        assert_eq!(core.name(), "core");
        assert_eq!(core.source_files(), ["src/Main.kt"]);
        assert_eq!(core.test_source_files(), ["test/MainTest.kt"]);
        assert_eq!(core.jar_name(), "core-1.0.jar");
    }

    #[test]
    fn test_missing_artifact_defaults_to_id() {
        let json_content = r#"{
            "project": "demo",
            "modules": [{ "id": "cli" }]
        }"#;

        let model = ProjectModel::from_json_str(json_content).unwrap();
        assert_eq!(model.find_module("cli").unwrap().jar_name(), "cli.jar");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json_content = r#"{
            "project": "demo",
            "modules": [{ "id": "core" }, { "id": "core" }]
        }"#;

        let model = ProjectModel::from_json_str(json_content).unwrap();
        assert!(model.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = ProjectModel::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ModuleMetaError::SerializationError(_)));
    }
}
