use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModuleMetaError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Duplicate module name: {name}")]
    DuplicateModuleError { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ModuleMetaError {
    /// 錯誤分類，用於日誌與統計
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) => ErrorCategory::Data,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::DuplicateModuleError { .. } => ErrorCategory::Config,
        }
    }

    /// 錯誤嚴重程度，CLI 依此決定退出碼
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IoError(_) => ErrorSeverity::Critical,
            Self::SerializationError(_) => ErrorSeverity::High,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::DuplicateModuleError { .. } => ErrorSeverity::Medium,
        }
    }

    /// 給使用者的修復建議
    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) => {
                "Check that the file exists and the process has permission to read it".to_string()
            }
            Self::SerializationError(_) => "Check that the input is well-formed JSON".to_string(),
            Self::ConfigValidationError { field, .. } => {
                format!("Review the '{}' section of the manifest", field)
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' and retry", field)
            }
            Self::MissingConfigError { field } => {
                format!("Add the required field '{}'", field)
            }
            Self::DuplicateModuleError { name } => {
                format!("Rename one of the modules named '{}'", name)
            }
        }
    }

    /// 用戶友好的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read the input file: {}", e),
            Self::SerializationError(e) => format!("The input could not be parsed: {}", e),
            Self::ConfigValidationError { field, message } => {
                format!("The manifest is invalid ({}): {}", field, message)
            }
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
            Self::MissingConfigError { field } => {
                format!("The manifest is missing the required field '{}'", field)
            }
            Self::DuplicateModuleError { name } => {
                format!("The module name '{}' is declared more than once", name)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ModuleMetaError>;
