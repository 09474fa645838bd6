use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load elasticity configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid elasticity configuration: {0}")]
    ValidationError(String),
}
