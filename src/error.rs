use thiserror::Error;

pub type Result<T> = std::result::Result<T, MaskError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MaskError {
    #[error("invalid validation pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("mask template is empty")]
    EmptyTemplate,

    #[error("valid example `{example}` is shorter than template `{template}`")]
    ExampleTooShort { example: String, template: String },

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("unknown preset `{0}`")]
    UnknownPreset(String),

    #[error("config file holds no fields")]
    NoFields,

    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
