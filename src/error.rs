use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Can't render {value} at {path}: expected a node, a string or a list")]
    UnrenderableValue { path: String, value: String },

    #[error("Indent underflow: unindent called at depth 0")]
    IndentUnderflow,

    #[error("Invalid field '{field}' at {path}: {reason}")]
    InvalidField {
        path: String,
        field: String,
        reason: String,
    },

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("YAML error: {0}")]
    YamlError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::DeserializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        RenderError::YamlError(err.to_string())
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err.to_string())
    }
}
