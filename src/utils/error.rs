use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadarError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid radar document '{path}': {message}")]
    DocumentError { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Element not found: quadrant '{name}' is not declared in quadrants")]
    UnknownQuadrant { name: String },

    #[error("Element not found: category '{name}' is not declared in categories")]
    UnknownCategory { name: String },

    #[error("Unsupported output format: '{extension}'")]
    UnsupportedFormat { extension: String },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    NameResolution,
    Output,
}

impl RadarError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RadarError::InputNotFound { .. } | RadarError::DocumentError { .. } => {
                ErrorCategory::Input
            }
            RadarError::ConfigError { .. } | RadarError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            RadarError::UnknownQuadrant { .. } | RadarError::UnknownCategory { .. } => {
                ErrorCategory::NameResolution
            }
            RadarError::IoError(_)
            | RadarError::UnsupportedFormat { .. }
            | RadarError::RenderError { .. } => ErrorCategory::Output,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RadarError::InputNotFound { path } => format!("File not found: {}", path),
            RadarError::UnknownQuadrant { name } => {
                format!("Element not found: unknown quadrant '{}'", name)
            }
            RadarError::UnknownCategory { name } => {
                format!("Element not found: unknown category '{}'", name)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "檢查 --input-yaml 路徑與 YAML 格式 (quadrants, categories, technologies)",
            ErrorCategory::Configuration => "至少宣告一個 quadrant 與一個 category，並檢查命令列參數範圍",
            ErrorCategory::NameResolution => {
                "technologies 底下的每個 quadrant/category 名稱都必須出現在 quadrants/categories 清單中"
            }
            ErrorCategory::Output => "檢查輸出路徑與副檔名 (svg, png, bmp, jpg)",
        }
    }

    /// 所有失敗都以 1 結束
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, RadarError>;
