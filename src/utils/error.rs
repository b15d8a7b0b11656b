use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrudError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API responded with status {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CrudError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CrudError::ApiError(_) | CrudError::HttpStatusError { .. } => ErrorCategory::Network,
            CrudError::UrlError(_)
            | CrudError::ConfigError { .. }
            | CrudError::ConfigValidationError { .. }
            | CrudError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CrudError::SerializationError(_) => ErrorCategory::Data,
            CrudError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CrudError::ApiError(e) if e.is_connect() => {
                "No se pudo conectar con el servidor de clientes.".to_string()
            }
            CrudError::ApiError(e) if e.is_timeout() => {
                "El servidor de clientes no respondió a tiempo.".to_string()
            }
            CrudError::ApiError(_) => "Falló la comunicación con el servidor de clientes.".to_string(),
            CrudError::HttpStatusError { status, .. } => {
                format!("El servidor de clientes respondió con el código {}.", status)
            }
            CrudError::SerializationError(_) => {
                "La respuesta del servidor no tiene el formato esperado.".to_string()
            }
            CrudError::IoError(e) => format!("Error de entrada/salida: {}", e),
            other => format!("Configuración inválida: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Verifique que la API esté en ejecución y que la URL base sea correcta.",
            ErrorCategory::Configuration => {
                "Revise --base-url, --timeout-seconds y el archivo de configuración."
            }
            ErrorCategory::Data => "Confirme que la API devuelva JSON con los campos nombre y apellidos.",
            ErrorCategory::System => "Verifique la terminal y los permisos de archivos.",
        }
    }
}

pub type Result<T> = std::result::Result<T, CrudError>;
