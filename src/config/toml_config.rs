use crate::domain::model::ModuleSpec;
use crate::domain::ports::ModuleDescriptor;
use crate::utils::error::{ModuleMetaError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_unique_names, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    pub manifest: ManifestInfo,
    #[serde(default)]
    pub modules: Vec<ManifestModule>,
    pub environment: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestModule {
    pub name: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub test_sources: Vec<String>,
    #[serde(default)]
    pub classpath: Vec<String>,
    pub jar: Option<String>,
}

impl ManifestConfig {
    /// 從 TOML 檔案載入模組清單
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ModuleMetaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析模組清單
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        let mut config: ManifestConfig =
            toml::from_str(&processed_content).map_err(|e| ModuleMetaError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        config.resolve_defaults();
        Ok(config)
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    // 未指定 jar 名稱的模組以 <name>.jar 補齊
    fn resolve_defaults(&mut self) {
        for module in &mut self.modules {
            if module.jar.is_none() {
                module.jar = Some(format!("{}.jar", module.name));
            }
        }
    }

    /// 驗證清單的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("manifest.name", &self.manifest.name)?;

        for module in &self.modules {
            validate_non_empty_string("modules.name", &module.name)?;

            for path in &module.sources {
                validate_path("modules.sources", path)?;
            }
            for path in &module.test_sources {
                validate_path("modules.test_sources", path)?;
            }
            for path in &module.classpath {
                validate_path("modules.classpath", path)?;
            }
        }

        // 同一份清單內模組名稱不可重複
        validate_unique_names(self.modules.iter().map(|m| m.name.as_str()))?;

        Ok(())
    }

    /// 取得清單內的模組數量
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// 依名稱查找模組
    pub fn find_module(&self, name: &str) -> Option<&ManifestModule> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// 將所有模組轉成不可變的 ModuleSpec
    pub fn module_specs(&self) -> Vec<ModuleSpec> {
        self.modules.iter().map(ManifestModule::to_spec).collect()
    }
}

impl ManifestModule {
    pub fn to_spec(&self) -> ModuleSpec {
        ModuleSpec::from_descriptor(self)
    }
}

impl ModuleDescriptor for ManifestModule {
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
        self.jar.as_deref().unwrap_or("")
    }
}

impl Validate for ManifestConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
