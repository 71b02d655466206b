use thiserror::Error;

#[derive(Debug, Error)]
pub enum DdicError {
    #[error("could not resolve specified class `{name}`")]
    Configuration { name: String },

    #[error("failed to load configuration: {0}")]
    ConfigLoad(#[from] figment::Error),
}
