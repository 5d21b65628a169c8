#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing configuration: {0} must be set")]
    MissingConfiguration(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("A scene named \"{name}\" already exists")]
    DuplicateName { name: String },

    #[error("Invalid campaign: {0}")]
    UnknownScope(String),

    #[error("Invalid {entity} id: {id}")]
    UnknownEntity { entity: &'static str, id: String },

    #[error("Campaign named \"{0}\" already exists")]
    DuplicateScope(String),
}
